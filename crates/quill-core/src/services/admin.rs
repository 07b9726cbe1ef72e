//! Admin session controller - login/logout and the gated post actions.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{AdminIdentity, AdminSession, Flash, Post};
use crate::error::DomainError;
use crate::ports::PasswordService;
use crate::services::PostStore;

const MSG_INTERNAL: &str = "Something went wrong. Please try again.";

/// One admin form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAction {
    Login { keyname: String, password: String },
    Logout,
    CreatePost {
        title: String,
        content: String,
        author: Option<String>,
    },
    DeletePost { post_id: Option<String> },
    ChangePassword,
    Unknown(String),
}

impl AdminAction {
    /// Wire name of the action.
    pub fn name(&self) -> &str {
        match self {
            AdminAction::Login { .. } => "login",
            AdminAction::Logout => "logout",
            AdminAction::CreatePost { .. } => "create_blog",
            AdminAction::DeletePost { .. } => "delete_blog",
            AdminAction::ChangePassword => "change_password",
            AdminAction::Unknown(name) => name,
        }
    }

    /// Actions that are silently ignored for anonymous visitors.
    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            AdminAction::Login { .. } | AdminAction::Logout | AdminAction::Unknown(_)
        )
    }
}

/// Where the visitor goes after an admin action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Home,
    Admin,
}

impl Redirect {
    pub fn path(&self) -> &'static str {
        match self {
            Redirect::Home => "/",
            Redirect::Admin => "/admin",
        }
    }
}

/// Result of dispatching one admin action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub redirect: Redirect,
    /// Status message queued on the session, if any.
    pub flash: Option<Flash>,
}

impl ActionOutcome {
    fn admin(flash: Option<Flash>) -> Self {
        Self {
            redirect: Redirect::Admin,
            flash,
        }
    }
}

/// Validates the admin identity and gates post mutations on the session.
#[derive(Clone)]
pub struct AdminController {
    store: PostStore,
    identity: AdminIdentity,
    passwords: Arc<dyn PasswordService>,
}

impl AdminController {
    pub fn new(
        store: PostStore,
        identity: AdminIdentity,
        passwords: Arc<dyn PasswordService>,
    ) -> Self {
        Self {
            store,
            identity,
            passwords,
        }
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    /// Authenticate the session if the pair matches the admin identity.
    ///
    /// A failed attempt leaves the session untouched.
    pub fn login(
        &self,
        session: &mut AdminSession,
        keyname: &str,
        password: &str,
    ) -> Result<(), DomainError> {
        if keyname.is_empty() || password.is_empty() {
            return Err(DomainError::MissingFields);
        }

        let valid = self
            .identity
            .verify(keyname, password, self.passwords.as_ref())
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        if !valid {
            return Err(DomainError::InvalidCredentials);
        }

        session.mark_authenticated();
        Ok(())
    }

    pub fn logout(&self, session: &mut AdminSession) {
        session.clear();
    }

    pub fn require_auth(&self, session: &AdminSession) -> bool {
        session.is_authenticated()
    }

    /// Create a post. Returns `Ok(None)` without touching the store when the
    /// session is not authenticated.
    pub async fn create_post(
        &self,
        session: &AdminSession,
        title: &str,
        content: &str,
        author: Option<&str>,
    ) -> Result<Option<Post>, DomainError> {
        if !self.require_auth(session) {
            return Ok(None);
        }
        self.store.create(title, content, author).await.map(Some)
    }

    /// Delete a post. Returns `Ok(None)` without touching the store when the
    /// session is not authenticated.
    pub async fn delete_post(
        &self,
        session: &AdminSession,
        id: Uuid,
    ) -> Result<Option<()>, DomainError> {
        if !self.require_auth(session) {
            return Ok(None);
        }
        self.store.delete(id).await.map(Some)
    }

    /// Run one admin action against the session and queue its status flash.
    pub async fn dispatch(&self, session: &mut AdminSession, action: AdminAction) -> ActionOutcome {
        if action.requires_auth() && !self.require_auth(session) {
            tracing::debug!(action = action.name(), "Ignoring admin action for anonymous session");
            return ActionOutcome::admin(None);
        }

        let outcome = match action {
            AdminAction::Login { keyname, password } => {
                let flash = match self.login(session, &keyname, &password) {
                    Ok(()) => {
                        tracing::info!(keyname = %keyname, "Admin logged in");
                        Flash::success("Login successful!")
                    }
                    Err(DomainError::MissingFields) => {
                        Flash::error("Please enter both keyname and password!")
                    }
                    Err(DomainError::InvalidCredentials) => {
                        tracing::warn!(keyname = %keyname, "Rejected admin login");
                        Flash::error("Invalid credentials!")
                    }
                    Err(e) => internal_flash(&e),
                };
                ActionOutcome::admin(Some(flash))
            }
            AdminAction::Logout => {
                self.logout(session);
                tracing::info!("Admin logged out");
                ActionOutcome {
                    redirect: Redirect::Home,
                    flash: Some(Flash::success("Logged out successfully!")),
                }
            }
            AdminAction::CreatePost {
                title,
                content,
                author,
            } => {
                let flash = match self
                    .create_post(session, &title, &content, author.as_deref())
                    .await
                {
                    Ok(_) => {
                        tracing::info!(title = %title.trim(), "Post created");
                        Flash::success("Blog created successfully!")
                    }
                    Err(DomainError::MissingFields) => {
                        Flash::error("Title and content are required!")
                    }
                    Err(DomainError::Validation(msg)) => Flash::error(msg),
                    Err(DomainError::CapacityExceeded { max }) => Flash::error(format!(
                        "Maximum {max} blogs allowed! Please delete a blog first."
                    )),
                    Err(e) => internal_flash(&e),
                };
                ActionOutcome::admin(Some(flash))
            }
            AdminAction::DeletePost { post_id } => {
                let Some(raw) = post_id.filter(|id| !id.trim().is_empty()) else {
                    return ActionOutcome::admin(None);
                };

                let flash = match Uuid::parse_str(raw.trim()) {
                    Err(_) => Flash::error("Blog not found!"),
                    Ok(id) => match self.delete_post(session, id).await {
                        Ok(_) => {
                            tracing::info!(post_id = %id, "Post deleted");
                            Flash::success("Blog deleted successfully!")
                        }
                        Err(DomainError::NotFound { .. }) => Flash::error("Blog not found!"),
                        Err(DomainError::MinimumViolation { min }) => Flash::error(format!(
                            "Cannot delete the last blog! Minimum {min} blog required."
                        )),
                        Err(e) => internal_flash(&e),
                    },
                };
                ActionOutcome::admin(Some(flash))
            }
            AdminAction::ChangePassword => ActionOutcome::admin(Some(Flash::error(
                "The admin password is static configuration. Set ADMIN_PASSWORD or ADMIN_PASSWORD_HASH and restart the server to change it.",
            ))),
            AdminAction::Unknown(name) => {
                tracing::debug!(action = %name, "Unknown admin action");
                ActionOutcome::admin(None)
            }
        };

        if let Some(flash) = &outcome.flash {
            session.push_flash(flash.clone());
        }
        outcome
    }
}

fn internal_flash(err: &DomainError) -> Flash {
    tracing::error!(error = %err, "Admin action failed");
    Flash::error(MSG_INTERNAL)
}
