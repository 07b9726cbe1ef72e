//! Domain entities - the core business objects.

mod identity;
mod post;
mod session;

pub use identity::{AdminIdentity, AdminSecret};
pub use post::{AUTHOR_MAX_LEN, DEFAULT_AUTHOR, Post, PostBounds, PostDraft, TITLE_MAX_LEN};
pub use session::{AdminSession, Flash, FlashKind, MAX_PENDING_FLASHES};
