//! SeaORM post repository with transactional count bounds.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseBackend, DatabaseTransaction, DbErr, EntityTrait,
    IsolationLevel, PaginatorTrait, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use quill_core::domain::Post;
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::sea_base::SeaOrmBaseRepository;

/// SeaORM post repository.
pub type SeaOrmPostRepository = SeaOrmBaseRepository<PostEntity>;

fn query_err(e: DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

impl SeaOrmPostRepository {
    /// Begin a write transaction.
    ///
    /// SQLite has a single writer, so only other backends get an explicit
    /// isolation level.
    async fn begin_write(&self) -> Result<DatabaseTransaction, RepoError> {
        let isolation = match self.db.get_database_backend() {
            DatabaseBackend::Sqlite => None,
            _ => Some(IsolationLevel::Serializable),
        };

        self.db
            .begin_with_config(isolation, None)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))
    }
}

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn insert_bounded(&self, post: Post, max: usize) -> Result<Post, RepoError> {
        let _guard = self.write_lock.lock().await;
        let txn = self.begin_write().await?;

        let count = PostEntity::find().count(&txn).await.map_err(query_err)? as usize;
        if count >= max {
            tracing::debug!(count, max, "Refusing insert at capacity");
            txn.rollback().await.map_err(query_err)?;
            return Err(RepoError::CapacityReached);
        }

        let model = post::ActiveModel::from(post)
            .insert(&txn)
            .await
            .map_err(query_err)?;
        txn.commit().await.map_err(query_err)?;

        Ok(model.into())
    }

    async fn delete_bounded(&self, id: Uuid, min: usize) -> Result<(), RepoError> {
        let _guard = self.write_lock.lock().await;
        let txn = self.begin_write().await?;

        let existing = PostEntity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(query_err)?;
        if existing.is_none() {
            txn.rollback().await.map_err(query_err)?;
            return Err(RepoError::NotFound);
        }

        let count = PostEntity::find().count(&txn).await.map_err(query_err)? as usize;
        if count <= min {
            tracing::debug!(count, min, "Refusing delete at minimum");
            txn.rollback().await.map_err(query_err)?;
            return Err(RepoError::MinimumReached);
        }

        let result = PostEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(query_err)?;
        if result.rows_affected == 0 {
            txn.rollback().await.map_err(query_err)?;
            return Err(RepoError::NotFound);
        }
        txn.commit().await.map_err(query_err)?;

        Ok(())
    }
}
