//! Blog post editor
//!
//! Title, tags, status toggle, markdown textarea with toolbar, and a live
//! preview pane. Session rules (dirtiness, debouncing, persist ordering) live
//! in [`crate::session`]; this module wires them to the DOM.

mod actions;
mod dialogs;
mod styles;
mod tags;
mod toolbar;
pub mod types;

use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;
use shared_types::PostStatus;

use crate::components::notification::Toast;
use crate::format::TextStats;
use crate::interop::{ShortcutListener, UnloadGuard};
use crate::session::PendingAction;
use crate::shortcuts::Shortcut;

pub use actions::EditorHandle;
use dialogs::{ConfirmDialog, PostsDialog, UploadDialog};
use styles::EDITOR_STYLES;
use tags::TagEditor;
use toolbar::Toolbar;
use types::*;

#[component]
pub fn EditorView() -> Element {
    let editor = EditorHandle::use_new();

    let session = editor.session.read();
    let draft = session.draft().clone();
    let dirty = session.is_dirty();
    let status = session.status();
    let saving = session.manual_save_busy();
    drop(session);

    let unload_guard = use_hook(|| Rc::new(UnloadGuard::install()));
    use_effect(move || {
        let dirty = editor.session.read().is_dirty();
        unload_guard.set_armed(dirty);
    });

    // Keys are caught on the document; handling runs inside the component.
    let shortcuts = use_coroutine(move |mut rx: UnboundedReceiver<Shortcut>| async move {
        while let Some(shortcut) = rx.next().await {
            match shortcut {
                Shortcut::Save => editor.save(),
                Shortcut::TogglePreview => editor.toggle_preview(),
                Shortcut::Format(action) => editor.format(action),
                Shortcut::Indent => editor.indent(),
            }
        }
    });
    use_hook(move || {
        Rc::new(ShortcutListener::install(EDITOR_ID, move |shortcut| {
            shortcuts.send(shortcut)
        }))
    });

    let stats = TextStats::of(&draft.content);
    let preview_html = editor.preview_html.read().clone();
    let preview_visible = *editor.preview_visible.read();
    let title_class = if *editor.title_error.read() {
        "title-input error"
    } else {
        "title-input"
    };
    let badge = *editor.autosave_badge.read();
    let removing = editor.removing_tags.read().clone();
    let pending_confirm = editor.confirm.read().clone();

    rsx! {
        style { {EDITOR_STYLES} }
        div {
            class: "editor-app",

            header {
                class: "editor-header",
                h1 { "Blog Editor" }
                button {
                    class: "btn",
                    onclick: move |_| editor.request(PendingAction::NewPost),
                    "New"
                }
                button {
                    class: "btn",
                    onclick: move |_| editor.open_posts(),
                    "Open"
                }
                button {
                    class: if preview_visible { "btn active" } else { "btn" },
                    title: "Toggle preview (Ctrl+P)",
                    onclick: move |_| editor.toggle_preview(),
                    "Preview"
                }
                button {
                    class: "btn btn-primary",
                    disabled: saving,
                    title: "Save (Ctrl+S)",
                    onclick: move |_| editor.save(),
                    if saving { "Saving..." } else { "Save" }
                }
            }

            div {
                class: "editor-meta",
                input {
                    id: TITLE_ID,
                    class: "{title_class}",
                    r#type: "text",
                    placeholder: "Post title",
                    value: "{draft.title}",
                    oninput: move |e| editor.edit_title(e.value()),
                }
                TagEditor {
                    tags: draft.tags.to_vec(),
                    removing,
                    on_add: move |tag: String| editor.add_tag(&tag),
                    on_remove: move |tag: String| editor.remove_tag(tag),
                }
                div {
                    class: "status-row",
                    span { "Status:" }
                    button {
                        class: if status == PostStatus::Draft { "btn btn-small active" } else { "btn btn-small" },
                        onclick: move |_| editor.request(PendingAction::SetStatus(PostStatus::Draft)),
                        "Draft"
                    }
                    button {
                        class: if status == PostStatus::Published { "btn btn-small active" } else { "btn btn-small" },
                        onclick: move |_| editor.request(PendingAction::SetStatus(PostStatus::Published)),
                        "Published"
                    }
                    if dirty {
                        span { class: "unsaved-indicator", "● Unsaved changes" }
                    }
                    match badge {
                        AutosaveBadge::Hidden => rsx! {},
                        AutosaveBadge::Saving => rsx! {
                            span { class: "autosave-badge", "Saving..." }
                        },
                        AutosaveBadge::Saved => rsx! {
                            span { class: "autosave-badge", "Auto-saved" }
                        },
                    }
                }
            }

            Toolbar { on_action: move |action| editor.format(action) }

            div {
                class: "editor-body",
                div {
                    class: "editor-pane",
                    textarea {
                        id: EDITOR_ID,
                        class: "editor-textarea",
                        placeholder: "Write your post in markdown...",
                        value: "{draft.content}",
                        oninput: move |e: FormEvent| editor.edit_content(e.value()),
                        onkeyup: move |_| editor.remember_selection(),
                        onclick: move |_| editor.remember_selection(),
                        onblur: move |_| editor.remember_selection(),
                    }
                    div {
                        class: "editor-footer",
                        span { "{stats.words_label()}" }
                        span { "{stats.chars_label()}" }
                    }
                }
                if preview_visible {
                    div {
                        class: "preview-pane",
                        if preview_html.trim().is_empty() {
                            div { dangerous_inner_html: EMPTY_PREVIEW }
                        } else {
                            div { dangerous_inner_html: "{preview_html}" }
                        }
                    }
                }
            }

            {render_dialog(editor)}
            {pending_confirm.map(|pending| rsx! {
                ConfirmDialog {
                    pending,
                    on_confirm: move |_| editor.confirm_accepted(),
                    on_cancel: move |_| editor.confirm_dismissed(),
                }
            })}
            Toast { notification: editor.toast.read().clone() }
        }
    }
}

fn render_dialog(editor: EditorHandle) -> Element {
    let dialog = editor.dialog.read().clone();

    match dialog {
        DialogState::None => rsx! {},
        DialogState::Posts(listing) => rsx! {
            PostsDialog {
                listing,
                on_select: move |filename: String| {
                    editor.request(PendingAction::LoadPost(filename))
                },
                on_close: move |_| editor.close_dialog(),
            }
        },
        DialogState::Upload(state) => rsx! {
            UploadDialog {
                state,
                on_file: move |(name, bytes): (String, Vec<u8>)| editor.upload(name, bytes),
                on_rejected: move |_| editor.rejected_drop(),
                on_close: move |_| editor.close_dialog(),
            }
        },
    }
}

