//! Post store - CRUD over the repository with count bounds enforced.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Post, PostBounds, PostDraft};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

#[derive(Clone)]
pub struct PostStore {
    repo: Arc<dyn PostRepository>,
    bounds: PostBounds,
}

impl PostStore {
    pub fn new(repo: Arc<dyn PostRepository>, bounds: PostBounds) -> Self {
        Self { repo, bounds }
    }

    pub fn bounds(&self) -> PostBounds {
        self.bounds
    }

    /// All posts, newest first.
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        self.repo.list_newest_first().await.map_err(internal)
    }

    pub async fn get(&self, id: Uuid) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })
    }

    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repo.count().await.map_err(internal)
    }

    /// Validate and insert a new post.
    pub async fn create(
        &self,
        title: &str,
        content: &str,
        author: Option<&str>,
    ) -> Result<Post, DomainError> {
        let draft = PostDraft::new(title, content, author)?;
        let post = Post::new(draft);

        match self.repo.insert_bounded(post, self.bounds.max).await {
            Ok(post) => {
                tracing::debug!(post_id = %post.id, "Post inserted");
                Ok(post)
            }
            Err(RepoError::CapacityReached) => Err(DomainError::CapacityExceeded {
                max: self.bounds.max,
            }),
            Err(e) => Err(internal(e)),
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        match self.repo.delete_bounded(id, self.bounds.min).await {
            Ok(()) => {
                tracing::debug!(post_id = %id, "Post deleted");
                Ok(())
            }
            Err(RepoError::NotFound) => Err(DomainError::NotFound {
                entity_type: "Post",
                id,
            }),
            Err(RepoError::MinimumReached) => Err(DomainError::MinimumViolation {
                min: self.bounds.min,
            }),
            Err(e) => Err(internal(e)),
        }
    }
}

fn internal(err: RepoError) -> DomainError {
    DomainError::Internal(err.to_string())
}
