//! Shared types between the editor UI and the blog server
//!
//! These types describe the JSON bodies of the five endpoints the editor
//! talks to:
//! - `POST /preview`  markdown in, rendered HTML out
//! - `POST /save`     persist a post as draft or published
//! - `GET  /posts`    list drafts and published posts
//! - `GET  /load/:filename`
//! - `POST /upload`   multipart image upload (field `image`)
//!
//! Any response may instead carry `{ "error": "..." }`, see [`ApiReply`].

use serde::{Deserialize, Serialize};

// ============================================================================
// Post status
// ============================================================================

/// Publication status of a post
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

impl PostStatus {
    pub fn from_is_draft(is_draft: bool) -> Self {
        if is_draft {
            Self::Draft
        } else {
            Self::Published
        }
    }

    pub fn is_draft(self) -> bool {
        matches!(self, Self::Draft)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Error envelope
// ============================================================================

/// A response that is either the expected payload or a structured error.
///
/// The server answers validation failures with `{ "error": "..." }` and a 4xx
/// status, and the UI treats the body the same way regardless of status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ApiReply<T> {
    Failure { error: String },
    Success(T),
}

impl<T> ApiReply<T> {
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Failure { error } => Err(error),
            Self::Success(value) => Ok(value),
        }
    }
}

// ============================================================================
// Preview
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreviewRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PreviewResponse {
    #[serde(default)]
    pub html: String,
}

// ============================================================================
// Save
// ============================================================================

/// Body of `POST /save`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavePostRequest {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub is_draft: bool,
}

impl SavePostRequest {
    pub fn status(&self) -> PostStatus {
        PostStatus::from_is_draft(self.is_draft)
    }
}

/// Successful `POST /save` response. Every field is optional; an empty
/// object is a valid acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SavePostResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

// ============================================================================
// Listing and loading
// ============================================================================

/// One entry of `GET /posts`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostEntry {
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PostListing {
    #[serde(default)]
    pub drafts: Vec<PostEntry>,
    #[serde(default)]
    pub posts: Vec<PostEntry>,
}

/// Response of `GET /load/:filename`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadedPost {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_draft: bool,
}

impl LoadedPost {
    pub fn status(&self) -> PostStatus {
        PostStatus::from_is_draft(self.is_draft)
    }
}

// ============================================================================
// Upload
// ============================================================================

/// Multipart field name the server reads the image from
pub const UPLOAD_FIELD: &str = "image";

/// Extensions the server accepts for uploads
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    pub filename: String,
    pub markdown: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Whether a filename carries one of [`ALLOWED_IMAGE_EXTENSIONS`]
pub fn is_allowed_image(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
