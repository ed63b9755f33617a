//! Editor view data types

use shared_types::PostListing;

use crate::session::{ConfirmPrompt, PendingAction};

/// DOM id of the content textarea
pub const EDITOR_ID: &str = "editor";
/// DOM id of the title input
pub const TITLE_ID: &str = "title";

pub const EMPTY_PREVIEW: &str = r#"<p class="empty">Start writing to see preview...</p>"#;

/// Modal dialogs other than the confirmation prompt
#[derive(Debug, Clone, PartialEq)]
pub enum DialogState {
    None,
    Posts(PostListing),
    Upload(UploadState),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadState {
    pub busy: bool,
    pub status: UploadStatus,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Success(String),
    Error(String),
}

/// Confirmation dialog content plus the action it guards
#[derive(Debug, Clone, PartialEq)]
pub struct PendingConfirm {
    pub prompt: ConfirmPrompt,
    pub action: PendingAction,
}

/// Autosave indicator next to the status toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutosaveBadge {
    Hidden,
    Saving,
    Saved,
}
