//! # Quill Core
//!
//! The domain layer of the Quill blog.
//! This crate holds the post store invariants and the admin session
//! controller, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
