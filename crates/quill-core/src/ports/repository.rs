use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::RepoError;

/// Generic read-side repository operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Count stored entities.
    async fn count(&self) -> Result<usize, RepoError>;
}

/// Post repository.
///
/// Writes go through the bounded operations only, so the count invariant
/// cannot be bypassed.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// All posts, newest-created first.
    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError>;

    /// Insert `post` unless `max` posts are already stored.
    ///
    /// The count check and the insert must be atomic with respect to other
    /// bounded writes. Fails with `RepoError::CapacityReached`.
    async fn insert_bounded(&self, post: Post, max: usize) -> Result<Post, RepoError>;

    /// Delete the post with `id` unless only `min` posts remain.
    ///
    /// Existence is checked first (`RepoError::NotFound`), then the count
    /// (`RepoError::MinimumReached`). Atomic like `insert_bounded`.
    async fn delete_bounded(&self, id: Uuid, min: usize) -> Result<(), RepoError>;
}
