use serde::{Deserialize, Serialize};

/// Pending flashes carried in the session cookie; the oldest go first.
pub const MAX_PENDING_FLASHES: usize = 5;

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
        }
    }
}

/// A one-shot status message shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

/// Per-visitor admin session state.
///
/// Only the admin controller can flip the authenticated flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    #[serde(default)]
    authenticated: bool,
    #[serde(default)]
    flashes: Vec<Flash>,
}

impl AdminSession {
    /// A fresh, unauthenticated session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub(crate) fn mark_authenticated(&mut self) {
        self.authenticated = true;
    }

    /// Drop all session state.
    pub fn clear(&mut self) {
        self.authenticated = false;
        self.flashes.clear();
    }

    /// Queue a flash, keeping at most [`MAX_PENDING_FLASHES`].
    pub fn push_flash(&mut self, flash: Flash) {
        if self.flashes.len() >= MAX_PENDING_FLASHES {
            let excess = self.flashes.len() + 1 - MAX_PENDING_FLASHES;
            self.flashes.drain(..excess);
        }
        self.flashes.push(flash);
    }

    pub fn flashes(&self) -> &[Flash] {
        &self.flashes
    }

    /// Remove and return pending flashes.
    pub fn take_flashes(&mut self) -> Vec<Flash> {
        std::mem::take(&mut self.flashes)
    }
}
