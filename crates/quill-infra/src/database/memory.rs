//! In-memory post repository - used when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::Post;
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository};

/// Post repository backed by a `Vec` behind an async RwLock.
///
/// Bounded writes check and mutate under one write guard.
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given posts, bypassing the bounds.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn count(&self) -> Result<usize, RepoError> {
        Ok(self.posts.read().await.len())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;

        // Reverse insertion order first so equal timestamps keep the later
        // insert in front; the sort is stable.
        let mut listed: Vec<Post> = posts.iter().rev().cloned().collect();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }

    async fn insert_bounded(&self, post: Post, max: usize) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        if posts.len() >= max {
            return Err(RepoError::CapacityReached);
        }

        posts.push(post.clone());
        Ok(post)
    }

    async fn delete_bounded(&self, id: Uuid, min: usize) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        if posts.len() <= min {
            return Err(RepoError::MinimumReached);
        }

        posts.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use quill_core::domain::PostDraft;

    use super::*;

    fn post(title: &str) -> Post {
        Post::new(PostDraft::new(title, "content", None).unwrap())
    }

    #[tokio::test]
    async fn test_insert_stops_at_max() {
        let repo = InMemoryPostRepository::new();
        for i in 0..5 {
            repo.insert_bounded(post(&format!("post {i}")), 5)
                .await
                .unwrap();
        }

        let result = repo.insert_bounded(post("sixth"), 5).await;

        assert!(matches!(result, Err(RepoError::CapacityReached)));
        assert_eq!(repo.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_delete_checks_existence_before_minimum() {
        let only = post("only");
        let repo = InMemoryPostRepository::with_posts(vec![only.clone()]);

        let missing = repo.delete_bounded(Uuid::new_v4(), 1).await;
        let last = repo.delete_bounded(only.id, 1).await;

        assert!(matches!(missing, Err(RepoError::NotFound)));
        assert!(matches!(last, Err(RepoError::MinimumReached)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = InMemoryPostRepository::new();
        let first = repo.insert_bounded(post("first"), 5).await.unwrap();
        let second = repo.insert_bounded(post("second"), 5).await.unwrap();

        let listed = repo.list_newest_first().await.unwrap();

        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_respect_max() {
        let repo = Arc::new(InMemoryPostRepository::new());

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.insert_bounded(post(&format!("p{i}")), 5).await })
            })
            .collect();

        let mut inserted = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                inserted += 1;
            }
        }

        assert_eq!(inserted, 5);
        assert_eq!(repo.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_concurrent_deletes_keep_minimum() {
        let posts: Vec<Post> = (0..5).map(|i| post(&format!("p{i}"))).collect();
        let ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();
        let repo = Arc::new(InMemoryPostRepository::with_posts(posts));

        let handles: Vec<_> = ids
            .into_iter()
            .map(|id| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.delete_bounded(id, 1).await })
            })
            .collect();

        let mut deleted = 0;
        let mut refused = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => deleted += 1,
                Err(RepoError::MinimumReached) => refused += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        assert_eq!(deleted, 4);
        assert_eq!(refused, 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
