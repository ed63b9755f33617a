//! Modal dialogs: confirmation, post browser, image upload

use dioxus::html::HasFileData;
use dioxus::prelude::*;
use shared_types::{is_allowed_image, PostEntry, PostListing, PostStatus};

use super::types::{PendingConfirm, UploadState, UploadStatus};

#[component]
pub fn ConfirmDialog(
    pending: PendingConfirm,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> Element {
    let prompt = pending.prompt;

    rsx! {
        div {
            class: "modal-overlay confirm-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "modal confirm-modal",
                role: "alertdialog",
                onclick: move |e| e.stop_propagation(),
                div {
                    class: "modal-header",
                    h3 { "{prompt.title}" }
                    button {
                        class: "modal-close",
                        title: "Close",
                        onclick: move |_| on_cancel.call(()),
                        "×"
                    }
                }
                p { "{prompt.message}" }
                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        autofocus: true,
                        onclick: move |_| on_confirm.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}

#[component]
pub fn PostsDialog(
    listing: PostListing,
    on_select: Callback<String>,
    on_close: Callback<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal posts-modal",
                role: "dialog",
                onclick: move |e| e.stop_propagation(),
                div {
                    class: "modal-header",
                    h3 { "Open Post" }
                    button {
                        class: "modal-close",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div {
                    class: "modal-body",
                    PostSection {
                        heading: "Drafts",
                        placeholder: "No drafts",
                        entries: listing.drafts.clone(),
                        status: PostStatus::Draft,
                        on_select,
                    }
                    PostSection {
                        heading: "Published",
                        placeholder: "No published posts",
                        entries: listing.posts.clone(),
                        status: PostStatus::Published,
                        on_select,
                    }
                }
            }
        }
    }
}

#[component]
fn PostSection(
    heading: &'static str,
    placeholder: &'static str,
    entries: Vec<PostEntry>,
    status: PostStatus,
    on_select: Callback<String>,
) -> Element {
    rsx! {
        section {
            class: "post-section",
            h4 { "{heading}" }
            if entries.is_empty() {
                p { class: "empty", "{placeholder}" }
            }
            ul {
                class: "post-list",
                for entry in entries {
                    li {
                        key: "{entry.filename}",
                        class: "post-item",
                        onclick: {
                            let filename = entry.filename.clone();
                            move |_| on_select.call(filename.clone())
                        },
                        span { class: "post-name", "{entry.filename}" }
                        span {
                            class: "status-badge {entry.status.unwrap_or(status)}",
                            "{entry.status.unwrap_or(status)}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn UploadDialog(
    state: UploadState,
    on_file: Callback<(String, Vec<u8>)>,
    on_rejected: Callback<()>,
    on_close: Callback<()>,
) -> Element {
    let mut drag_over = use_signal(|| false);

    let on_file_change = move |evt: Event<FormData>| {
        spawn(async move {
            let files = evt.files();
            if let Some(file) = files.first() {
                let name = file.name();
                match file.read_bytes().await {
                    Ok(data) => on_file.call((name, data.to_vec())),
                    Err(e) => {
                        dioxus_logger::tracing::error!("Failed to read {}: {:?}", name, e)
                    }
                }
            }
        });
    };

    let on_drop = move |evt: DragEvent| {
        evt.prevent_default();
        drag_over.set(false);
        spawn(async move {
            let files = evt.files();
            let Some(file) = files.first() else {
                return;
            };
            let name = file.name();
            if !is_allowed_image(&name) {
                on_rejected.call(());
                return;
            }
            match file.read_bytes().await {
                Ok(data) => on_file.call((name, data.to_vec())),
                Err(e) => dioxus_logger::tracing::error!("Failed to read {}: {:?}", name, e),
            }
        });
    };

    let zone_class = if drag_over() {
        "upload-zone drag-over"
    } else {
        "upload-zone"
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal upload-modal",
                role: "dialog",
                onclick: move |e| e.stop_propagation(),
                div {
                    class: "modal-header",
                    h3 { "Upload Image" }
                    button {
                        class: "modal-close",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                label {
                    class: "{zone_class}",
                    ondragover: move |e: DragEvent| {
                        e.prevent_default();
                        drag_over.set(true);
                    },
                    ondragleave: move |_| drag_over.set(false),
                    ondrop: on_drop,
                    input {
                        r#type: "file",
                        accept: "image/*",
                        style: "display: none;",
                        disabled: state.busy,
                        onchange: on_file_change,
                    }
                    if state.busy {
                        span { "Uploading..." }
                    } else {
                        span { "Drop an image here or click to choose" }
                    }
                }
                match &state.status {
                    UploadStatus::Idle => rsx! {},
                    UploadStatus::Success(message) => rsx! {
                        p { class: "upload-status success", "{message}" }
                    },
                    UploadStatus::Error(message) => rsx! {
                        p { class: "upload-status error", "{message}" }
                    },
                }
            }
        }
    }
}
