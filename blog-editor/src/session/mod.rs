//! Editor session state
//!
//! [`EditorSession`] owns the post being edited, the last persisted
//! snapshot, and the two debounce handles (preview, autosave). Every user
//! action is one method that mutates the session and returns the side
//! effects the UI has to run: which timers to start, whether to refresh the
//! preview now, which persist request to send.
//!
//! Invariants:
//! - `is_dirty()` is exactly `draft != baseline`, recomputed on demand.
//! - At most one persist request is in flight. Requests made meanwhile are
//!   queued and handed back from [`EditorSession::finish_persist`].
//! - A persist acknowledgement moves the baseline to the draft as it was
//!   sent, never to the draft as it is when the response arrives.

pub mod debounce;
pub mod draft;

pub use debounce::{Debounce, DebounceToken, TimerSlot};
pub use draft::{Draft, TagInsert, TagSet};

use shared_types::{LoadedPost, PostStatus, SavePostRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingTitle,
    #[error("Please enter some content")]
    MissingContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistKind {
    Manual,
    Auto,
}

/// A persist request handed to the UI to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistTicket {
    id: u64,
    kind: PersistKind,
    request: SavePostRequest,
    sent: Draft,
}

impl PersistTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> PersistKind {
        self.kind
    }

    pub fn request(&self) -> &SavePostRequest {
        &self.request
    }

    pub fn status(&self) -> PostStatus {
        self.request.status()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStart {
    Started(PersistTicket),
    /// Another persist is in flight; this one runs when it finishes.
    Queued,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    Saved {
        kind: PersistKind,
        status: PostStatus,
        /// False when edits arrived while the request was in flight.
        clean: bool,
    },
    Failed {
        kind: PersistKind,
        error: String,
    },
    /// The ticket was invalidated by a load or new post.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistReport {
    pub outcome: PersistOutcome,
    /// Queued persist to send next, or why a queued manual save was dropped.
    pub next: Option<Result<PersistTicket, ValidationError>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewTrigger {
    /// Start a timer and call [`EditorSession::preview_due`] when it fires.
    Debounced(DebounceToken),
    /// Render the current content right away.
    Immediate,
}

/// Side effects of a session mutation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Effects {
    pub preview: Option<PreviewTrigger>,
    /// Start a timer and call [`EditorSession::autosave_due`] when it fires.
    pub autosave: Option<DebounceToken>,
}

/// Actions that may need the user's confirmation first
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    NewPost,
    LoadPost(String),
    SetStatus(PostStatus),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: &'static str,
    pub message: &'static str,
}

impl PendingAction {
    pub fn prompt(&self) -> ConfirmPrompt {
        match self {
            Self::NewPost => ConfirmPrompt {
                title: "Discard changes?",
                message: "You have unsaved changes. Create a new post anyway?",
            },
            Self::LoadPost(_) => ConfirmPrompt {
                title: "Discard changes?",
                message: "You have unsaved changes. Load another post anyway?",
            },
            Self::SetStatus(PostStatus::Draft) => ConfirmPrompt {
                title: "Switch to Draft?",
                message: "This will move the post back to drafts when saved.",
            },
            Self::SetStatus(PostStatus::Published) => ConfirmPrompt {
                title: "Publish Post?",
                message: "This will make the post visible on your blog when saved.",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    Proceed(PendingAction),
    Confirm {
        prompt: ConfirmPrompt,
        action: PendingAction,
    },
    /// Nothing to do (e.g. switching to the status already selected).
    Ignore,
}

/// Taken when a load is approved and checked again when the post arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    revision: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied(Effects),
    /// The draft was edited while the post was being fetched; nothing was
    /// replaced.
    Interrupted,
}

#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    draft: Draft,
    baseline: Draft,
    preview: Debounce,
    autosave: Debounce,
    in_flight: Option<PersistTicket>,
    queued: Option<PersistKind>,
    next_persist_id: u64,
    /// Bumped on every draft mutation
    revision: u64,
    /// Bumped whenever the draft is replaced by a load or new post
    epoch: u64,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.baseline
    }

    pub fn status(&self) -> PostStatus {
        self.draft.status
    }

    /// Kind of the persist currently in flight, if any
    pub fn persisting(&self) -> Option<PersistKind> {
        self.in_flight.as_ref().map(|t| t.kind)
    }

    /// True while a manual save is in flight or waiting behind an autosave
    pub fn manual_save_busy(&self) -> bool {
        self.persisting() == Some(PersistKind::Manual) || self.queued == Some(PersistKind::Manual)
    }

    pub fn autosave_pending(&self) -> bool {
        self.autosave.is_pending()
    }

    /// Identifies the post currently open. Results of requests started under
    /// an older epoch belong to a post that is gone.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    // ------------------------------------------------------------------
    // Edits
    // ------------------------------------------------------------------

    pub fn set_title(&mut self, title: String) -> Effects {
        self.draft.title = title;
        self.revision += 1;
        Effects {
            preview: None,
            autosave: self.rearm_autosave(),
        }
    }

    /// Keystroke edit of the content: preview refresh is debounced.
    pub fn set_content(&mut self, content: String) -> Effects {
        self.draft.content = content;
        self.revision += 1;
        Effects {
            preview: Some(PreviewTrigger::Debounced(self.preview.schedule())),
            autosave: self.rearm_autosave(),
        }
    }

    /// Programmatic content change (toolbar, upload): preview refreshes now.
    pub fn replace_content(&mut self, content: String) -> Effects {
        self.draft.content = content;
        self.revision += 1;
        self.preview.cancel();
        Effects {
            preview: Some(PreviewTrigger::Immediate),
            autosave: self.rearm_autosave(),
        }
    }

    pub fn add_tag(&mut self, raw: &str) -> (TagInsert, Effects) {
        let result = self.draft.tags.insert(raw);
        let effects = match result {
            TagInsert::Added(_) => {
                self.revision += 1;
                Effects {
                    preview: None,
                    autosave: self.rearm_autosave(),
                }
            }
            TagInsert::Duplicate(_) | TagInsert::Empty => Effects::default(),
        };
        (result, effects)
    }

    pub fn remove_tag(&mut self, tag: &str) -> Effects {
        if !self.draft.tags.remove(tag) {
            return Effects::default();
        }
        self.revision += 1;
        Effects {
            preview: None,
            autosave: self.rearm_autosave(),
        }
    }

    // ------------------------------------------------------------------
    // Confirmation-gated transitions
    // ------------------------------------------------------------------

    pub fn gate(&self, action: PendingAction) -> Gate {
        let needs_confirm = match &action {
            PendingAction::NewPost | PendingAction::LoadPost(_) => self.is_dirty(),
            PendingAction::SetStatus(target) => {
                if *target == self.draft.status {
                    return Gate::Ignore;
                }
                true
            }
        };
        if needs_confirm {
            Gate::Confirm {
                prompt: action.prompt(),
                action,
            }
        } else {
            Gate::Proceed(action)
        }
    }

    pub fn set_status(&mut self, status: PostStatus) -> Effects {
        self.draft.status = status;
        self.revision += 1;
        Effects {
            preview: None,
            autosave: self.rearm_autosave(),
        }
    }

    pub fn new_post(&mut self) -> Effects {
        self.reset_to(Draft::default())
    }

    pub fn load_post(&mut self, post: LoadedPost) -> Effects {
        self.reset_to(Draft::from(post))
    }

    /// Call when an approved load starts fetching.
    pub fn begin_load(&self) -> LoadTicket {
        LoadTicket {
            revision: self.revision,
        }
    }

    /// Apply a fetched post unless unsaved edits were made after the load
    /// was approved.
    pub fn finish_load(&mut self, ticket: LoadTicket, post: LoadedPost) -> LoadOutcome {
        if ticket.revision != self.revision && self.is_dirty() {
            return LoadOutcome::Interrupted;
        }
        LoadOutcome::Applied(self.load_post(post))
    }

    fn reset_to(&mut self, draft: Draft) -> Effects {
        self.draft = draft;
        self.baseline = self.draft.clone();
        self.revision += 1;
        self.epoch += 1;
        self.autosave.cancel();
        self.preview.cancel();
        self.in_flight = None;
        self.queued = None;
        Effects {
            preview: Some(PreviewTrigger::Immediate),
            autosave: None,
        }
    }

    // ------------------------------------------------------------------
    // Timers
    // ------------------------------------------------------------------

    /// Content to render if `token` is still the latest preview request.
    pub fn preview_due(&mut self, token: DebounceToken) -> Option<String> {
        self.preview
            .fire(token)
            .then(|| self.draft.content.clone())
    }

    /// Persist request to send if `token` is still the latest autosave and
    /// the session still qualifies for one.
    pub fn autosave_due(&mut self, token: DebounceToken) -> Option<PersistTicket> {
        if !self.autosave.fire(token) || !self.autosave_qualifies() {
            return None;
        }
        if self.in_flight.is_some() {
            if self.queued.is_none() {
                self.queued = Some(PersistKind::Auto);
            }
            return None;
        }
        Some(self.start_persist(PersistKind::Auto))
    }

    fn autosave_qualifies(&self) -> bool {
        self.is_dirty() && self.draft.status.is_draft() && self.draft.has_title()
    }

    fn rearm_autosave(&mut self) -> Option<DebounceToken> {
        if self.autosave_qualifies() {
            Some(self.autosave.schedule())
        } else {
            self.autosave.cancel();
            None
        }
    }

    // ------------------------------------------------------------------
    // Persist
    // ------------------------------------------------------------------

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.draft.has_title() {
            return Err(ValidationError::MissingTitle);
        }
        if !self.draft.has_content() {
            return Err(ValidationError::MissingContent);
        }
        Ok(())
    }

    /// Explicit save. Validation failures never reach the server.
    pub fn begin_save(&mut self) -> Result<SaveStart, ValidationError> {
        self.validate()?;
        if self.in_flight.is_some() {
            self.queued = Some(PersistKind::Manual);
            return Ok(SaveStart::Queued);
        }
        Ok(SaveStart::Started(self.start_persist(PersistKind::Manual)))
    }

    fn start_persist(&mut self, kind: PersistKind) -> PersistTicket {
        self.next_persist_id += 1;
        let status = match kind {
            PersistKind::Manual => self.draft.status,
            PersistKind::Auto => PostStatus::Draft,
        };
        let ticket = PersistTicket {
            id: self.next_persist_id,
            kind,
            request: self.draft.to_request(status),
            sent: self.draft.clone(),
        };
        self.in_flight = Some(ticket.clone());
        ticket
    }

    /// Record the server's answer to ticket `id`.
    pub fn finish_persist(&mut self, id: u64, result: Result<(), String>) -> PersistReport {
        let ticket = match self.in_flight.take() {
            Some(ticket) if ticket.id == id => ticket,
            other => {
                self.in_flight = other;
                return PersistReport {
                    outcome: PersistOutcome::Stale,
                    next: None,
                };
            }
        };

        let outcome = match result {
            Ok(()) => {
                let status = ticket.status();
                self.baseline = ticket.sent;
                let clean = !self.is_dirty();
                if clean {
                    self.autosave.cancel();
                }
                PersistOutcome::Saved {
                    kind: ticket.kind,
                    status,
                    clean,
                }
            }
            Err(error) => PersistOutcome::Failed {
                kind: ticket.kind,
                error,
            },
        };

        let next = match self.queued.take() {
            Some(PersistKind::Manual) => Some(
                self.validate()
                    .map(|()| self.start_persist(PersistKind::Manual)),
            ),
            Some(PersistKind::Auto) if self.autosave_qualifies() => {
                Some(Ok(self.start_persist(PersistKind::Auto)))
            }
            _ => None,
        };

        PersistReport { outcome, next }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(title: &str, content: &str) -> EditorSession {
        let mut session = EditorSession::new();
        session.set_title(title.to_string());
        session.set_content(content.to_string());
        session
    }

    fn started(start: Result<SaveStart, ValidationError>) -> PersistTicket {
        match start {
            Ok(SaveStart::Started(ticket)) => ticket,
            other => panic!("expected a started save, got {other:?}"),
        }
    }

    fn loaded(title: &str, content: &str, is_draft: bool) -> LoadedPost {
        LoadedPost {
            title: title.to_string(),
            content: content.to_string(),
            tags: vec!["rust".to_string()],
            is_draft,
        }
    }

    #[test]
    fn dirty_tracks_snapshot_equality() {
        let mut session = EditorSession::new();
        assert!(!session.is_dirty());

        session.set_content("a".to_string());
        assert!(session.is_dirty());

        session.set_content(String::new());
        assert!(!session.is_dirty(), "undo back to baseline is clean");

        session.set_title("T".to_string());
        assert!(session.is_dirty());
        session.set_title(String::new());
        assert!(!session.is_dirty());
    }

    #[test]
    fn save_sends_exact_body_and_clears_dirty() {
        let mut session = written("Hello", "World");
        let ticket = started(session.begin_save());
        assert_eq!(
            ticket.request(),
            &SavePostRequest {
                title: "Hello".to_string(),
                content: "World".to_string(),
                tags: vec![],
                is_draft: true,
            }
        );

        let report = session.finish_persist(ticket.id(), Ok(()));
        assert_eq!(
            report.outcome,
            PersistOutcome::Saved {
                kind: PersistKind::Manual,
                status: PostStatus::Draft,
                clean: true,
            }
        );
        assert!(!session.is_dirty());
        assert!(!session.autosave_pending());
        assert_eq!(session.persisting(), None);
    }

    #[test]
    fn blank_title_never_starts_a_save() {
        let mut session = written("   ", "body");
        assert_eq!(session.begin_save(), Err(ValidationError::MissingTitle));
        assert!(session.is_dirty());
        assert_eq!(session.persisting(), None);
    }

    #[test]
    fn blank_content_never_starts_a_save() {
        let mut session = written("Title", " \n ");
        assert_eq!(session.begin_save(), Err(ValidationError::MissingContent));
        assert_eq!(session.persisting(), None);
    }

    #[test]
    fn failed_save_leaves_everything_as_is() {
        let mut session = written("Hello", "World");
        let before = session.draft().clone();
        let ticket = started(session.begin_save());

        let report = session.finish_persist(ticket.id(), Err("disk full".to_string()));
        assert_eq!(
            report.outcome,
            PersistOutcome::Failed {
                kind: PersistKind::Manual,
                error: "disk full".to_string(),
            }
        );
        assert_eq!(session.draft(), &before);
        assert!(session.is_dirty());
    }

    #[test]
    fn save_reports_published_status() {
        let mut session = written("Hello", "World");
        session.set_status(PostStatus::Published);
        let ticket = started(session.begin_save());
        assert!(!ticket.request().is_draft);
        let report = session.finish_persist(ticket.id(), Ok(()));
        assert!(matches!(
            report.outcome,
            PersistOutcome::Saved {
                status: PostStatus::Published,
                ..
            }
        ));
    }

    #[test]
    fn edits_during_flight_stay_dirty() {
        let mut session = written("Hello", "World");
        let ticket = started(session.begin_save());
        let effects = session.set_content("World!".to_string());
        assert!(effects.autosave.is_some());

        let report = session.finish_persist(ticket.id(), Ok(()));
        assert!(matches!(
            report.outcome,
            PersistOutcome::Saved { clean: false, .. }
        ));
        assert!(session.is_dirty());
        assert!(session.autosave_pending(), "newer edit keeps its autosave");
    }

    #[test]
    fn save_during_flight_is_queued_then_started() {
        let mut session = written("Hello", "World");
        let first = started(session.begin_save());
        session.set_content("World, again".to_string());

        assert_eq!(session.begin_save(), Ok(SaveStart::Queued));
        assert!(session.manual_save_busy());

        let report = session.finish_persist(first.id(), Ok(()));
        let second = match report.next {
            Some(Ok(ticket)) => ticket,
            other => panic!("expected queued save, got {other:?}"),
        };
        assert_eq!(second.request().content, "World, again");
        assert_eq!(session.persisting(), Some(PersistKind::Manual));

        session.finish_persist(second.id(), Ok(()));
        assert!(!session.is_dirty());
    }

    #[test]
    fn queued_save_revalidates() {
        let mut session = written("Hello", "World");
        let first = started(session.begin_save());
        session.begin_save().unwrap();
        session.set_title(String::new());

        let report = session.finish_persist(first.id(), Ok(()));
        assert_eq!(report.next, Some(Err(ValidationError::MissingTitle)));
        assert_eq!(session.persisting(), None);
    }

    #[test]
    fn autosave_is_debounced_to_latest_edit() {
        let mut session = EditorSession::new();
        session.set_title("Post".to_string());
        let t1 = session.set_content("a".to_string()).autosave.unwrap();
        let t2 = session.set_content("ab".to_string()).autosave.unwrap();
        let t3 = session.set_content("abc".to_string()).autosave.unwrap();

        assert!(session.autosave_due(t1).is_none());
        assert!(session.autosave_due(t2).is_none());
        let ticket = session.autosave_due(t3).expect("latest fires");
        assert_eq!(ticket.kind(), PersistKind::Auto);
        assert_eq!(ticket.request().content, "abc");
        assert!(ticket.request().is_draft);

        session.finish_persist(ticket.id(), Ok(()));
        assert!(!session.is_dirty());
    }

    #[test]
    fn autosave_requires_title_and_draft_status() {
        let mut session = EditorSession::new();
        assert!(session.set_content("body".to_string()).autosave.is_none());

        assert!(session.set_title("Post".to_string()).autosave.is_some());

        let effects = session.set_status(PostStatus::Published);
        assert!(effects.autosave.is_none());
        assert!(!session.autosave_pending());
        assert!(session.set_content("more".to_string()).autosave.is_none());
    }

    #[test]
    fn autosave_rechecks_at_fire_time() {
        let mut session = written("Post", "body");
        let ticket = started(session.begin_save());
        session.finish_persist(ticket.id(), Ok(()));

        let token = session.set_content("body 2".to_string()).autosave.unwrap();
        session.set_content("body".to_string());
        // back at the saved state, the pending autosave is void
        assert!(!session.is_dirty());
        assert!(session.autosave_due(token).is_none());
    }

    #[test]
    fn failed_autosave_is_silent_and_keeps_dirty() {
        let mut session = written("Post", "body");
        let token = session.set_content("body!".to_string()).autosave.unwrap();
        let before = session.draft().clone();
        let ticket = session.autosave_due(token).unwrap();
        let report = session.finish_persist(ticket.id(), Err("offline".to_string()));
        assert_eq!(session.draft(), &before);
        assert!(matches!(
            report.outcome,
            PersistOutcome::Failed {
                kind: PersistKind::Auto,
                ..
            }
        ));
        assert!(session.is_dirty());
        assert!(session.set_content("body!!".to_string()).autosave.is_some());
    }

    #[test]
    fn autosave_waits_behind_manual_save() {
        let mut session = written("Post", "body");
        let manual = started(session.begin_save());
        session.set_content("body 3".to_string());
        let token = session.set_content("body 4".to_string()).autosave.unwrap();

        assert!(session.autosave_due(token).is_none());
        let report = session.finish_persist(manual.id(), Ok(()));
        let auto = match report.next {
            Some(Ok(ticket)) => ticket,
            other => panic!("expected queued autosave, got {other:?}"),
        };
        assert_eq!(auto.kind(), PersistKind::Auto);
        assert_eq!(auto.request().content, "body 4");
    }

    #[test]
    fn preview_debounce_uses_final_content() {
        let mut session = EditorSession::new();
        let tokens: Vec<_> = ["h", "he", "hel"]
            .iter()
            .map(|c| match session.set_content(c.to_string()).preview {
                Some(PreviewTrigger::Debounced(token)) => token,
                other => panic!("unexpected {other:?}"),
            })
            .collect();

        let rendered: Vec<_> = tokens
            .into_iter()
            .filter_map(|t| session.preview_due(t))
            .collect();
        assert_eq!(rendered, vec!["hel".to_string()]);
    }

    #[test]
    fn preview_ignores_save_state() {
        let mut session = written("Post", "body");
        session.set_status(PostStatus::Published);
        let effects = session.set_content("x".to_string());
        assert!(matches!(effects.preview, Some(PreviewTrigger::Debounced(_))));
        assert!(effects.autosave.is_none());
    }

    #[test]
    fn load_requires_confirmation_when_dirty() {
        let mut session = EditorSession::new();
        for i in 0..5 {
            session.set_content(format!("edit {i}"));
        }
        let before = session.draft().clone();

        let gate = session.gate(PendingAction::LoadPost("a.md".to_string()));
        match gate {
            Gate::Confirm { prompt, action } => {
                assert_eq!(prompt.title, "Discard changes?");
                assert_eq!(action, PendingAction::LoadPost("a.md".to_string()));
            }
            other => panic!("expected confirmation, got {other:?}"),
        }
        // cancelling is simply not acting on the gate
        assert_eq!(session.draft(), &before);
        assert!(session.is_dirty());
    }

    #[test]
    fn clean_session_loads_without_confirmation() {
        let session = EditorSession::new();
        assert_eq!(
            session.gate(PendingAction::NewPost),
            Gate::Proceed(PendingAction::NewPost)
        );
    }

    #[test]
    fn load_replaces_draft_and_resets_snapshot() {
        let mut session = written("Old", "old body");
        let pending = session.set_content("old body 2".to_string()).autosave.unwrap();

        let effects = session.load_post(loaded("New", "new body", false));
        assert_eq!(effects.preview, Some(PreviewTrigger::Immediate));
        assert!(!session.is_dirty());
        assert_eq!(session.status(), PostStatus::Published);
        assert!(session.draft().tags.contains("rust"));
        assert!(session.autosave_due(pending).is_none());
    }

    #[test]
    fn edits_during_load_fetch_are_not_discarded() {
        let mut session = EditorSession::new();
        let action = PendingAction::LoadPost("a.md".to_string());
        assert_eq!(session.gate(action.clone()), Gate::Proceed(action));
        let ticket = session.begin_load();

        session.set_title("My work".to_string());
        session.set_content("typed while loading".to_string());
        let before = session.draft().clone();

        let outcome = session.finish_load(ticket, loaded("A", "post a", true));
        assert_eq!(outcome, LoadOutcome::Interrupted);
        assert_eq!(session.draft(), &before);
        assert!(session.is_dirty());
    }

    #[test]
    fn load_applies_when_nothing_changed_during_fetch() {
        let mut session = written("Old", "old body");
        let ticket = session.begin_load();
        let outcome = session.finish_load(ticket, loaded("A", "post a", true));
        assert!(matches!(outcome, LoadOutcome::Applied(_)));
        assert_eq!(session.draft().title, "A");
        assert!(!session.is_dirty());
    }

    #[test]
    fn reverted_edits_during_fetch_do_not_block_load() {
        let mut session = EditorSession::new();
        let ticket = session.begin_load();
        session.set_title("x".to_string());
        session.set_title(String::new());
        let outcome = session.finish_load(ticket, loaded("A", "post a", true));
        assert!(matches!(outcome, LoadOutcome::Applied(_)));
    }

    #[test]
    fn epoch_moves_on_load_and_new_only() {
        let mut session = EditorSession::new();
        let start = session.epoch();
        session.set_content("body".to_string());
        session.add_tag("go");
        assert_eq!(session.epoch(), start);

        session.load_post(loaded("A", "post a", true));
        let after_load = session.epoch();
        assert_ne!(after_load, start);
        session.new_post();
        assert_ne!(session.epoch(), after_load);
    }

    #[test]
    fn late_ack_after_load_is_stale() {
        let mut session = written("Old", "old body");
        let ticket = started(session.begin_save());
        session.load_post(loaded("New", "new body", true));
        session.set_content("new body edited".to_string());

        let report = session.finish_persist(ticket.id(), Ok(()));
        assert_eq!(report.outcome, PersistOutcome::Stale);
        assert!(session.is_dirty());
    }

    #[test]
    fn new_post_resets_to_empty_draft() {
        let mut session = written("Old", "body");
        session.add_tag("x");
        session.set_status(PostStatus::Published);
        session.new_post();
        assert_eq!(session.draft(), &Draft::default());
        assert!(!session.is_dirty());
        assert_eq!(session.status(), PostStatus::Draft);
    }

    #[test]
    fn status_toggle_needs_confirmation_and_marks_dirty() {
        let mut session = EditorSession::new();
        assert_eq!(
            session.gate(PendingAction::SetStatus(PostStatus::Draft)),
            Gate::Ignore
        );
        match session.gate(PendingAction::SetStatus(PostStatus::Published)) {
            Gate::Confirm { prompt, .. } => assert_eq!(prompt.title, "Publish Post?"),
            other => panic!("expected confirmation, got {other:?}"),
        }
        session.set_status(PostStatus::Published);
        assert!(session.is_dirty());
    }

    #[test]
    fn duplicate_tag_is_noop() {
        let mut session = EditorSession::new();
        let (first, _) = session.add_tag("go");
        assert_eq!(first, TagInsert::Added("go".to_string()));
        assert!(session.is_dirty());

        let (second, effects) = session.add_tag("go");
        assert_eq!(second, TagInsert::Duplicate("go".to_string()));
        assert_eq!(effects, Effects::default());
        assert_eq!(session.draft().tags.to_vec(), vec!["go".to_string()]);
    }

    #[test]
    fn tag_removal_marks_dirty() {
        let mut session = EditorSession::new();
        session.load_post(loaded("T", "C", true));
        session.remove_tag("rust");
        assert!(session.is_dirty());
        assert!(session.remove_tag("missing").autosave.is_none());
    }

    #[test]
    fn toolbar_replacement_refreshes_preview_now() {
        let mut session = EditorSession::new();
        let token = match session.set_content("a".to_string()).preview {
            Some(PreviewTrigger::Debounced(token)) => token,
            other => panic!("unexpected {other:?}"),
        };
        let effects = session.replace_content("**a**".to_string());
        assert_eq!(effects.preview, Some(PreviewTrigger::Immediate));
        assert!(session.preview_due(token).is_none());
    }
}
