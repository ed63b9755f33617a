//! Runtime configuration
//!
//! Timings are fixed. The API base defaults to the page's own origin (the
//! blog server serves the editor) and can be pointed elsewhere with the
//! `blog_editor.api_base` localStorage key.

use std::sync::OnceLock;

pub const API_BASE_STORAGE_KEY: &str = "blog_editor.api_base";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Prefix for every endpoint; empty means same origin
    pub api_base: String,
    /// Quiet period before the preview re-renders
    pub preview_delay_ms: u32,
    /// Quiet period before a draft is auto-saved
    pub autosave_delay_ms: u32,
    /// How long a notification toast stays up
    pub notification_ms: u32,
    /// How long "Auto-saved" stays up
    pub autosave_badge_ms: u32,
    /// Delay before the upload dialog closes after a successful upload
    pub upload_close_ms: u32,
    /// Tag chip removal animation
    pub tag_remove_ms: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            preview_delay_ms: 300,
            autosave_delay_ms: 30_000,
            notification_ms: 4_000,
            autosave_badge_ms: 2_000,
            upload_close_ms: 1_000,
            tag_remove_ms: 200,
        }
    }
}

impl EditorConfig {
    /// Defaults plus the localStorage override, if any.
    pub fn from_browser() -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(API_BASE_STORAGE_KEY).ok().flatten());
        Self::default().with_api_base_override(stored.as_deref())
    }

    pub fn with_api_base_override(mut self, raw: Option<&str>) -> Self {
        if let Some(base) = raw.map(str::trim).filter(|b| !b.is_empty()) {
            self.api_base = base.trim_end_matches('/').to_string();
        }
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

static CONFIG_CACHE: OnceLock<EditorConfig> = OnceLock::new();

/// Resolved once at first use
pub fn config() -> &'static EditorConfig {
    CONFIG_CACHE.get_or_init(EditorConfig::from_browser)
}
