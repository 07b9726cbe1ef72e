//! Request extractors and error mapping.

pub mod error;
pub mod session;
