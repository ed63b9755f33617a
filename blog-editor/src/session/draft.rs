//! The in-memory post being edited

use shared_types::{LoadedPost, PostStatus, SavePostRequest};

/// Result of adding a tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagInsert {
    Added(String),
    Duplicate(String),
    /// Input was blank after trimming
    Empty,
}

/// Insertion-ordered tag set. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, raw: &str) -> TagInsert {
        let tag = raw.trim();
        if tag.is_empty() {
            return TagInsert::Empty;
        }
        if self.contains(tag) {
            return TagInsert::Duplicate(tag.to_string());
        }
        self.0.push(tag.to_string());
        TagInsert::Added(tag.to_string())
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        self.0.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

impl FromIterator<String> for TagSet {
    /// Builds a set from server-provided tags, dropping blanks and repeats.
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(&tag);
        }
        set
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
    pub tags: TagSet,
    pub status: PostStatus,
}

impl Draft {
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }

    /// Body of a persist request. Title and content go out trimmed.
    pub fn to_request(&self, status: PostStatus) -> SavePostRequest {
        SavePostRequest {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            tags: self.tags.to_vec(),
            is_draft: status.is_draft(),
        }
    }
}

impl From<LoadedPost> for Draft {
    fn from(post: LoadedPost) -> Self {
        let status = post.status();
        Self {
            title: post.title,
            content: post.content,
            tags: post.tags.into_iter().collect(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_tag_is_rejected() {
        let mut tags = TagSet::new();
        assert_eq!(tags.insert("go"), TagInsert::Added("go".to_string()));
        assert_eq!(tags.insert("go"), TagInsert::Duplicate("go".to_string()));
        assert_eq!(tags.to_vec(), vec!["go".to_string()]);
    }

    #[test]
    fn tags_are_case_sensitive_and_trimmed() {
        let mut tags = TagSet::new();
        tags.insert("  Rust ");
        assert_eq!(tags.insert("rust"), TagInsert::Added("rust".to_string()));
        assert_eq!(tags.insert("Rust"), TagInsert::Duplicate("Rust".to_string()));
        assert_eq!(tags.insert("   "), TagInsert::Empty);
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["Rust", "rust"]);
    }

    #[test]
    fn remove_keeps_order() {
        let mut tags: TagSet = ["a", "b", "c"].into_iter().map(String::from).collect();
        assert!(tags.remove("b"));
        assert!(!tags.remove("b"));
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn request_body_is_trimmed() {
        let draft = Draft {
            title: "  Hello ".to_string(),
            content: "\nWorld\n\n".to_string(),
            tags: TagSet::new(),
            status: PostStatus::Draft,
        };
        let request = draft.to_request(PostStatus::Draft);
        assert_eq!(request.title, "Hello");
        assert_eq!(request.content, "World");
        assert!(request.is_draft);
    }

    #[test]
    fn loaded_post_dedups_tags() {
        let draft = Draft::from(LoadedPost {
            title: "T".to_string(),
            content: "C".to_string(),
            tags: vec!["x".to_string(), "x".to_string(), " ".to_string()],
            is_draft: false,
        });
        assert_eq!(draft.tags.len(), 1);
        assert_eq!(draft.status, PostStatus::Published);
    }
}
