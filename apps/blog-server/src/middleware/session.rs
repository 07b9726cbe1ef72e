//! Visitor session extractor and cookie writer.

use std::future::{Ready, ready};

use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use quill_core::domain::AdminSession;

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Name of the signed session cookie.
pub const SESSION_COOKIE: &str = "quill_session";

/// The visitor's admin session, decoded from the session cookie.
///
/// A missing, expired or tampered cookie yields an anonymous session.
#[derive(Debug, Clone, Default)]
pub struct VisitorSession(pub AdminSession);

impl FromRequest for VisitorSession {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            tracing::error!("AppState not found in app data");
            return ready(Err(AppError::Internal(
                "Server configuration error".to_string(),
            )));
        };

        let session = match req.cookie(SESSION_COOKIE) {
            Some(cookie) => match state.sessions.decode(cookie.value()) {
                Ok(session) => session,
                Err(e) => {
                    tracing::debug!(error = %e, "Discarding session cookie");
                    AdminSession::anonymous()
                }
            },
            None => AdminSession::anonymous(),
        };

        ready(Ok(VisitorSession(session)))
    }
}

/// Encode `session` into the cookie sent back to the visitor.
pub fn session_cookie(state: &AppState, session: &AdminSession) -> Result<Cookie<'static>, AppError> {
    let value = state.sessions.encode(session)?;

    Ok(Cookie::build(SESSION_COOKIE, value)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.cookie_secure)
        .max_age(Duration::seconds(state.sessions.max_age_seconds()))
        .finish())
}
