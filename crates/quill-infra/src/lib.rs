//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains the post repositories, database setup, and the
//! session and password services.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory post store only
//! - `database` - PostgreSQL / SQLite post store via SeaORM
//! - `auth` - JWT session cookies + Argon2 password verification

pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use database::InMemoryPostRepository;

#[cfg(feature = "database")]
pub use database::{DatabaseConfig, SeaOrmPostRepository};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtSessionCodec, SessionConfig};
