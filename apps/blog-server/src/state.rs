//! Application state - shared across all handlers.

use std::sync::Arc;

use migration::{DbErr, Migrator, MigratorTrait};
use quill_core::domain::PostBounds;
use quill_core::ports::{PostRepository, SessionCodec};
use quill_core::services::{AdminController, PostStore};
use quill_infra::database::connect;
use quill_infra::{Argon2PasswordService, InMemoryPostRepository, JwtSessionCodec, SeaOrmPostRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub controller: AdminController,
    pub sessions: Arc<dyn SessionCodec>,
    pub cookie_secure: bool,
}

impl AppState {
    /// Build the application state, connecting and migrating the database
    /// when one is configured.
    pub async fn new(config: &AppConfig) -> Result<Self, DbErr> {
        let repo: Arc<dyn PostRepository> = match &config.database {
            Some(db_config) => {
                let conn = connect(db_config).await?;
                Migrator::up(&conn, None).await?;
                tracing::info!("Database schema up to date");
                Arc::new(SeaOrmPostRepository::new(conn))
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Posts are kept in memory only.");
                Arc::new(InMemoryPostRepository::new())
            }
        };

        let state = Self::with_repository(config, repo);
        tracing::info!("Application state initialized");
        Ok(state)
    }

    /// Build the application state around an existing repository.
    pub fn with_repository(config: &AppConfig, repo: Arc<dyn PostRepository>) -> Self {
        let store = PostStore::new(repo, PostBounds::default());
        let controller = AdminController::new(
            store,
            config.admin.clone(),
            Arc::new(Argon2PasswordService::new()),
        );

        tracing::info!(keyname = %config.admin.keyname, "Admin identity configured");

        Self {
            controller,
            sessions: Arc::new(JwtSessionCodec::new(config.session.clone())),
            cookie_secure: config.cookie_secure,
        }
    }
}
