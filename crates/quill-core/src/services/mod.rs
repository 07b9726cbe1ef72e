//! Application services built on the ports.

mod admin;
mod posts;

pub use admin::{ActionOutcome, AdminAction, AdminController, Redirect};
pub use posts::PostStore;
