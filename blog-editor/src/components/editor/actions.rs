//! Event handlers for the editor view
//!
//! [`EditorHandle`] bundles the view's signals. Each method runs one user
//! action: it asks the session for the transition, then performs the side
//! effects the session hands back (timers, HTTP calls, toasts).

use dioxus::core::Task;
use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, error, warn};
use gloo_timers::future::TimeoutFuture;
use shared_types::{is_allowed_image, PostStatus};

use crate::api::{list_posts, load_post, render_preview, save_post, upload_image};
use crate::components::notification::{Notification, NotificationKind};
use crate::config::config;
use crate::format::{apply_action, insert_at, Selection, ToolbarAction};
use crate::interop::{focus_element, place_caret, textarea_selection};
use crate::session::{
    Effects, EditorSession, Gate, LoadOutcome, PendingAction, PersistKind, PersistOutcome,
    PersistTicket, PreviewTrigger, SaveStart, TagInsert, TimerSlot, ValidationError,
};
use crate::shortcuts::INDENT;

use super::types::*;

#[derive(Clone, Copy)]
pub struct EditorHandle {
    pub session: Signal<EditorSession>,
    pub preview_html: Signal<String>,
    pub preview_visible: Signal<bool>,
    /// Bumped per render request; stale responses are dropped
    pub preview_seq: Signal<u64>,
    pub dialog: Signal<DialogState>,
    pub confirm: Signal<Option<PendingConfirm>>,
    pub toast: Signal<Option<Notification>>,
    pub autosave_badge: Signal<AutosaveBadge>,
    pub title_error: Signal<bool>,
    pub last_selection: Signal<Selection>,
    pub removing_tags: Signal<Vec<String>>,
    pub preview_timer: Signal<TimerSlot<Task>>,
    pub autosave_timer: Signal<TimerSlot<Task>>,
}

impl EditorHandle {
    pub fn use_new() -> Self {
        Self {
            session: use_signal(EditorSession::new),
            preview_html: use_signal(String::new),
            preview_visible: use_signal(|| true),
            preview_seq: use_signal(|| 0u64),
            dialog: use_signal(|| DialogState::None),
            confirm: use_signal(|| None::<PendingConfirm>),
            toast: use_signal(|| None::<Notification>),
            autosave_badge: use_signal(|| AutosaveBadge::Hidden),
            title_error: use_signal(|| false),
            last_selection: use_signal(Selection::default),
            removing_tags: use_signal(Vec::<String>::new),
            preview_timer: use_signal(TimerSlot::default),
            autosave_timer: use_signal(TimerSlot::default),
        }
    }

    // ------------------------------------------------------------------
    // Effects
    // ------------------------------------------------------------------

    /// Start whatever timers / renders a session transition asked for.
    /// Each debounce keeps a single live timer; a superseded one is cancelled.
    pub fn apply(self, effects: Effects) {
        let mut preview_timer = self.preview_timer;
        match effects.preview {
            Some(PreviewTrigger::Immediate) => {
                cancel_timer(preview_timer.write().clear());
                self.refresh_preview();
            }
            Some(PreviewTrigger::Debounced(token)) => {
                let delay = config().preview_delay_ms;
                let task = spawn(async move {
                    TimeoutFuture::new(delay).await;
                    let mut session = self.session;
                    let due = session.write().preview_due(token);
                    if let Some(content) = due {
                        self.render(content).await;
                    }
                });
                cancel_timer(preview_timer.write().replace(task));
            }
            None => {}
        }

        let mut autosave_timer = self.autosave_timer;
        if let Some(token) = effects.autosave {
            let delay = config().autosave_delay_ms;
            let task = spawn(async move {
                TimeoutFuture::new(delay).await;
                let mut session = self.session;
                let ticket = session.write().autosave_due(token);
                if let Some(ticket) = ticket {
                    self.send_persist(ticket);
                }
            });
            cancel_timer(autosave_timer.write().replace(task));
        } else if !self.session.peek().autosave_pending() {
            cancel_timer(autosave_timer.write().clear());
        }
    }

    pub fn notify(self, kind: NotificationKind, title: &str, message: impl Into<String>) {
        let note = Notification::new(kind, title, message);
        let id = note.id;
        let mut toast = self.toast;
        toast.set(Some(note));

        let delay = config().notification_ms;
        spawn(async move {
            TimeoutFuture::new(delay).await;
            let current = (*toast.peek()).as_ref().map(|n| n.id);
            if current == Some(id) {
                toast.set(None);
            }
        });
    }

    // ------------------------------------------------------------------
    // Preview
    // ------------------------------------------------------------------

    pub fn refresh_preview(self) {
        let content = self.session.peek().draft().content.clone();
        spawn(async move {
            self.render(content).await;
        });
    }

    async fn render(self, content: String) {
        if !*self.preview_visible.peek() {
            return;
        }
        let mut seq = self.preview_seq;
        let request_id = *seq.peek() + 1;
        seq.set(request_id);

        match render_preview(&content).await {
            Ok(html) => {
                if *seq.peek() == request_id {
                    let mut preview_html = self.preview_html;
                    preview_html.set(html);
                }
            }
            Err(e) => error!("Preview failed: {}", e),
        }
    }

    pub fn toggle_preview(self) {
        let mut visible = self.preview_visible;
        let now_visible = !*visible.peek();
        visible.set(now_visible);
        if now_visible {
            self.refresh_preview();
        }
    }

    // ------------------------------------------------------------------
    // Edits
    // ------------------------------------------------------------------

    pub fn edit_title(self, title: String) {
        if !title.trim().is_empty() {
            let mut title_error = self.title_error;
            title_error.set(false);
        }
        let mut session = self.session;
        let effects = session.write().set_title(title);
        self.apply(effects);
    }

    pub fn edit_content(self, content: String) {
        let mut session = self.session;
        let effects = session.write().set_content(content);
        self.apply(effects);
        self.remember_selection();
    }

    pub fn remember_selection(self) {
        if let Some(selection) = textarea_selection(EDITOR_ID) {
            let mut last = self.last_selection;
            last.set(selection);
        }
    }

    fn current_selection(self) -> Selection {
        textarea_selection(EDITOR_ID).unwrap_or_else(|| *self.last_selection.peek())
    }

    /// Move the caret once the new value has been rendered.
    fn place_caret_after_render(self, content: String, caret: usize) {
        let mut last = self.last_selection;
        last.set(Selection::caret(caret));
        spawn(async move {
            TimeoutFuture::new(0).await;
            place_caret(EDITOR_ID, &content, caret);
        });
    }

    pub fn format(self, action: ToolbarAction) {
        if action == ToolbarAction::Upload {
            self.open_upload();
            return;
        }
        let content = self.session.peek().draft().content.clone();
        let Some(edit) = apply_action(&content, self.current_selection(), action) else {
            return;
        };

        let mut session = self.session;
        let effects = session.write().replace_content(edit.content.clone());
        self.apply(effects);
        self.place_caret_after_render(edit.content, edit.caret);
    }

    pub fn indent(self) {
        let content = self.session.peek().draft().content.clone();
        let edit = insert_at(&content, self.current_selection().start, INDENT);

        let mut session = self.session;
        let effects = session.write().set_content(edit.content.clone());
        self.apply(effects);
        self.place_caret_after_render(edit.content, edit.caret);
    }

    // ------------------------------------------------------------------
    // Tags
    // ------------------------------------------------------------------

    pub fn add_tag(self, raw: &str) {
        let mut session = self.session;
        let (result, effects) = session.write().add_tag(raw);
        match result {
            TagInsert::Added(tag) => self.notify(
                NotificationKind::Success,
                "Tag added",
                format!("\"{tag}\" has been added"),
            ),
            TagInsert::Duplicate(tag) => self.notify(
                NotificationKind::Warning,
                "Duplicate tag",
                format!("\"{tag}\" already exists"),
            ),
            TagInsert::Empty => {}
        }
        self.apply(effects);
    }

    /// Animate the chip out, then drop the tag.
    pub fn remove_tag(self, tag: String) {
        let mut removing = self.removing_tags;
        if removing.peek().contains(&tag) {
            return;
        }
        removing.write().push(tag.clone());

        let delay = config().tag_remove_ms;
        spawn(async move {
            TimeoutFuture::new(delay).await;
            let mut session = self.session;
            let effects = session.write().remove_tag(&tag);
            removing.write().retain(|t| t != &tag);
            self.apply(effects);
        });
    }

    // ------------------------------------------------------------------
    // Confirmation-gated actions
    // ------------------------------------------------------------------

    pub fn request(self, action: PendingAction) {
        let gate = self.session.peek().gate(action);
        match gate {
            Gate::Proceed(action) => self.perform(action),
            Gate::Confirm { prompt, action } => {
                let mut confirm = self.confirm;
                confirm.set(Some(PendingConfirm { prompt, action }));
            }
            Gate::Ignore => {}
        }
    }

    pub fn confirm_accepted(self) {
        let mut confirm = self.confirm;
        let pending = confirm.write().take();
        if let Some(pending) = pending {
            self.perform(pending.action);
        }
    }

    pub fn confirm_dismissed(self) {
        let mut confirm = self.confirm;
        confirm.set(None);
    }

    fn perform(self, action: PendingAction) {
        match action {
            PendingAction::NewPost => {
                let mut session = self.session;
                let effects = session.write().new_post();
                let mut title_error = self.title_error;
                title_error.set(false);
                self.apply(effects);
                self.notify(
                    NotificationKind::Success,
                    "New Post",
                    "Editor cleared for a new post",
                );
            }
            PendingAction::LoadPost(filename) => {
                spawn(async move {
                    self.load(filename).await;
                });
            }
            PendingAction::SetStatus(status) => {
                let mut session = self.session;
                let effects = session.write().set_status(status);
                self.apply(effects);
                let message = match status {
                    PostStatus::Draft => "Post will be saved as draft",
                    PostStatus::Published => "Post will be published when saved",
                };
                self.notify(NotificationKind::Success, "Status changed", message);
            }
        }
    }

    async fn load(self, filename: String) {
        let ticket = self.session.peek().begin_load();
        match load_post(&filename).await {
            Ok(post) => {
                let title = post.title.clone();
                let mut session = self.session;
                let outcome = session.write().finish_load(ticket, post);
                let effects = match outcome {
                    LoadOutcome::Applied(effects) => effects,
                    LoadOutcome::Interrupted => {
                        debug!("Edits arrived while loading {}; asking again", filename);
                        let action = PendingAction::LoadPost(filename);
                        let mut confirm = self.confirm;
                        confirm.set(Some(PendingConfirm {
                            prompt: action.prompt(),
                            action,
                        }));
                        return;
                    }
                };

                let mut title_error = self.title_error;
                title_error.set(false);
                let mut dialog = self.dialog;
                dialog.set(DialogState::None);

                self.apply(effects);
                self.notify(
                    NotificationKind::Success,
                    "Post loaded",
                    format!("\"{title}\" is ready to edit"),
                );
            }
            Err(e) => {
                error!("Failed to load post {}: {}", filename, e);
                self.notify(
                    NotificationKind::Error,
                    "Error",
                    e.user_message("Failed to load post"),
                );
            }
        }
    }

    pub fn open_posts(self) {
        spawn(async move {
            match list_posts().await {
                Ok(listing) => {
                    let mut dialog = self.dialog;
                    dialog.set(DialogState::Posts(listing));
                }
                Err(e) => {
                    error!("Failed to list posts: {}", e);
                    self.notify(NotificationKind::Error, "Error", "Failed to load posts");
                }
            }
        });
    }

    pub fn close_dialog(self) {
        let mut dialog = self.dialog;
        dialog.set(DialogState::None);
    }

    // ------------------------------------------------------------------
    // Persist
    // ------------------------------------------------------------------

    pub fn save(self) {
        let mut session = self.session;
        let start = session.write().begin_save();
        match start {
            Ok(SaveStart::Started(ticket)) => self.send_persist(ticket),
            Ok(SaveStart::Queued) => debug!("Save queued behind in-flight request"),
            Err(err) => self.validation_failed(err),
        }
    }

    fn validation_failed(self, err: ValidationError) {
        match err {
            ValidationError::MissingTitle => {
                let mut title_error = self.title_error;
                title_error.set(true);
                focus_element(TITLE_ID);
            }
            ValidationError::MissingContent => focus_element(EDITOR_ID),
        }
        self.notify(NotificationKind::Error, "Validation Error", err.to_string());
    }

    fn send_persist(self, ticket: PersistTicket) {
        let kind = ticket.kind();
        let mut badge = self.autosave_badge;
        if kind == PersistKind::Auto {
            badge.set(AutosaveBadge::Saving);
        }

        spawn(async move {
            let result = save_post(ticket.request()).await.map(|_| ()).map_err(|e| {
                if kind == PersistKind::Auto {
                    warn!("Autosave failed: {}", e);
                } else {
                    error!("Save failed: {}", e);
                }
                e.user_message("Failed to save post")
            });

            let mut session = self.session;
            let report = session.write().finish_persist(ticket.id(), result);

            match report.outcome {
                PersistOutcome::Saved {
                    kind: PersistKind::Manual,
                    status,
                    ..
                } => self.notify(
                    NotificationKind::Success,
                    "Post Saved!",
                    format!("Your post has been saved as {status}"),
                ),
                PersistOutcome::Saved {
                    kind: PersistKind::Auto,
                    ..
                } => {
                    badge.set(AutosaveBadge::Saved);
                    let delay = config().autosave_badge_ms;
                    spawn(async move {
                        TimeoutFuture::new(delay).await;
                        if *badge.peek() == AutosaveBadge::Saved {
                            badge.set(AutosaveBadge::Hidden);
                        }
                    });
                }
                PersistOutcome::Failed {
                    kind: PersistKind::Manual,
                    error,
                } => self.notify(NotificationKind::Error, "Error", error),
                PersistOutcome::Failed {
                    kind: PersistKind::Auto,
                    ..
                } => badge.set(AutosaveBadge::Hidden),
                PersistOutcome::Stale => {
                    debug!("Dropped acknowledgement for persist {}", ticket.id());
                    if kind == PersistKind::Auto {
                        badge.set(AutosaveBadge::Hidden);
                    }
                }
            }

            match report.next {
                Some(Ok(next)) => self.send_persist(next),
                Some(Err(err)) => self.validation_failed(err),
                None => {}
            }
        });
    }

    // ------------------------------------------------------------------
    // Upload
    // ------------------------------------------------------------------

    pub fn open_upload(self) {
        let mut dialog = self.dialog;
        dialog.set(DialogState::Upload(UploadState::default()));
    }

    pub fn rejected_drop(self) {
        self.notify(
            NotificationKind::Error,
            "Invalid File",
            "Please drop an image file",
        );
    }

    fn set_upload_state(self, state: UploadState) {
        let mut dialog = self.dialog;
        if matches!(*dialog.peek(), DialogState::Upload(_)) {
            dialog.set(DialogState::Upload(state));
        }
    }

    pub fn upload(self, filename: String, bytes: Vec<u8>) {
        if !is_allowed_image(&filename) {
            self.set_upload_state(UploadState {
                busy: false,
                status: UploadStatus::Error("File type not allowed".to_string()),
            });
            return;
        }
        self.set_upload_state(UploadState {
            busy: true,
            status: UploadStatus::Idle,
        });

        let epoch = self.session.peek().epoch();
        spawn(async move {
            let result = upload_image(&filename, &bytes).await;
            if self.session.peek().epoch() != epoch {
                debug!("Dropped upload of {} for a post that is no longer open", filename);
                return;
            }
            match result {
                Ok(uploaded) => {
                    let content = self.session.peek().draft().content.clone();
                    let at = self.last_selection.peek().start;
                    let edit = insert_at(&content, at, &format!("{}\n", uploaded.markdown));

                    let mut session = self.session;
                    let effects = session.write().replace_content(edit.content.clone());
                    self.apply(effects);
                    self.place_caret_after_render(edit.content, edit.caret);

                    self.set_upload_state(UploadState {
                        busy: false,
                        status: UploadStatus::Success(format!("Uploaded: {}", uploaded.filename)),
                    });

                    let delay = config().upload_close_ms;
                    TimeoutFuture::new(delay).await;
                    let mut dialog = self.dialog;
                    if matches!(*dialog.peek(), DialogState::Upload(_)) {
                        dialog.set(DialogState::None);
                    }
                }
                Err(e) => {
                    error!("Upload failed: {}", e);
                    self.set_upload_state(UploadState {
                        busy: false,
                        status: UploadStatus::Error(e.user_message("Upload failed")),
                    });
                }
            }
        });
    }
}

fn cancel_timer(timer: Option<Task>) {
    if let Some(task) = timer {
        task.cancel();
    }
}
