use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author recorded when none is given.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

pub const TITLE_MAX_LEN: usize = 200;
pub const AUTHOR_MAX_LEN: usize = 100;

/// Post entity - a single blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post from validated input. Both timestamps are set to now.
    ///
    /// Ids are UUIDv7, monotonic within the process, so they order posts
    /// created in the same instant.
    pub fn new(draft: PostDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: draft.title,
            content: draft.content,
            author: draft.author,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh the last-updated timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Validated input for a new post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    title: String,
    content: String,
    author: String,
}

impl PostDraft {
    /// Validate raw form input.
    ///
    /// Title and content must contain something other than whitespace.
    /// A blank author falls back to [`DEFAULT_AUTHOR`].
    pub fn new(title: &str, content: &str, author: Option<&str>) -> Result<Self, DomainError> {
        let title = title.trim();
        if title.is_empty() || content.trim().is_empty() {
            return Err(DomainError::MissingFields);
        }
        if title.chars().count() > TITLE_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "Title must be at most {TITLE_MAX_LEN} characters!"
            )));
        }

        let author = author
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(DEFAULT_AUTHOR);
        if author.chars().count() > AUTHOR_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "Author must be at most {AUTHOR_MAX_LEN} characters!"
            )));
        }

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
        })
    }
}

/// Inclusive bounds on the number of stored posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostBounds {
    pub min: usize,
    pub max: usize,
}

impl Default for PostBounds {
    fn default() -> Self {
        Self { min: 1, max: 5 }
    }
}

impl PostBounds {
    /// Whether one more post fits when `count` posts are stored.
    pub fn allows_insert(&self, count: usize) -> bool {
        count < self.max
    }

    /// Whether one post may be removed when `count` posts are stored.
    pub fn allows_delete(&self, count: usize) -> bool {
        count > self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_timestamps_match() {
        let draft = PostDraft::new("Welcome", "Hello", None).unwrap();
        let post = Post::new(draft);

        assert_eq!(post.created_at, post.updated_at);
        assert_eq!(post.author, DEFAULT_AUTHOR);
    }

    #[test]
    fn test_touch_moves_updated_at_only() {
        let mut post = Post::new(PostDraft::new("Welcome", "Hello", None).unwrap());
        let created = post.created_at;

        post.touch();

        assert_eq!(post.created_at, created);
        assert!(post.updated_at >= created);
    }

    #[test]
    fn test_draft_requires_title_and_content() {
        assert!(matches!(
            PostDraft::new("", "body", None),
            Err(DomainError::MissingFields)
        ));
        assert!(matches!(
            PostDraft::new("Title", "", None),
            Err(DomainError::MissingFields)
        ));
        assert!(matches!(
            PostDraft::new("   ", "body", None),
            Err(DomainError::MissingFields)
        ));
    }

    #[test]
    fn test_draft_blank_author_defaults() {
        let post = Post::new(PostDraft::new("Title", "body", Some("   ")).unwrap());
        assert_eq!(post.author, "Anonymous");

        let post = Post::new(PostDraft::new("  Title ", "body", Some("  Jane ")).unwrap());
        assert_eq!(post.author, "Jane");
        assert_eq!(post.title, "Title");
    }

    #[test]
    fn test_ids_follow_creation_order() {
        let first = Post::new(PostDraft::new("First", "body", None).unwrap());
        let second = Post::new(PostDraft::new("Second", "body", None).unwrap());

        assert!(second.id > first.id);
    }

    #[test]
    fn test_draft_rejects_long_title() {
        let title = "x".repeat(TITLE_MAX_LEN + 1);
        assert!(matches!(
            PostDraft::new(&title, "body", None),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_bounds() {
        let bounds = PostBounds::default();

        assert!(bounds.allows_insert(4));
        assert!(!bounds.allows_insert(5));
        assert!(bounds.allows_delete(2));
        assert!(!bounds.allows_delete(1));
    }
}
