//! Admin dashboard: login form, post management, and the action endpoint.

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use quill_core::domain::{AUTHOR_MAX_LEN, TITLE_MAX_LEN};
use quill_core::services::AdminAction;
use quill_shared::dto::AdminForm;

use crate::handlers::pages::render_page;
use crate::middleware::error::AppResult;
use crate::middleware::session::{VisitorSession, session_cookie};
use crate::state::AppState;
use crate::views::AdminTemplate;

/// Map the submitted form onto an admin action.
fn action_from_form(form: AdminForm) -> AdminAction {
    match form.action.as_str() {
        "login" => AdminAction::Login {
            keyname: form.keyname.unwrap_or_default(),
            password: form.password.unwrap_or_default(),
        },
        "logout" => AdminAction::Logout,
        "create_blog" => AdminAction::CreatePost {
            title: form.title.unwrap_or_default(),
            content: form.content.unwrap_or_default(),
            author: form.author,
        },
        "delete_blog" => AdminAction::DeletePost {
            post_id: form.blog_id,
        },
        "change_password" => AdminAction::ChangePassword,
        other => AdminAction::Unknown(other.to_string()),
    }
}

/// GET /admin - login form, or the dashboard when authenticated.
pub async fn dashboard(
    state: web::Data<AppState>,
    VisitorSession(session): VisitorSession,
) -> AppResult<HttpResponse> {
    let store = state.controller.store();
    let bounds = store.bounds();

    let posts = if state.controller.require_auth(&session) {
        Some(store.list().await?)
    } else {
        None
    };

    render_page(&state, session, |flashes| {
        let logged_in = posts.is_some();
        let posts: Vec<_> = posts.unwrap_or_default().into_iter().map(Into::into).collect();
        AdminTemplate {
            flashes,
            logged_in,
            count: posts.len(),
            posts,
            max: bounds.max,
            min: bounds.min,
            title_max: TITLE_MAX_LEN,
            author_max: AUTHOR_MAX_LEN,
        }
    })
}

/// POST /admin - run one admin action, then redirect with a status flash.
pub async fn submit(
    state: web::Data<AppState>,
    VisitorSession(mut session): VisitorSession,
    form: web::Form<AdminForm>,
) -> AppResult<HttpResponse> {
    let action = action_from_form(form.into_inner());
    let name = action.name().to_string();

    let outcome = state.controller.dispatch(&mut session, action).await;
    tracing::debug!(
        action = %name,
        redirect = outcome.redirect.path(),
        flashed = outcome.flash.is_some(),
        "Admin action handled"
    );

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, outcome.redirect.path()))
        .cookie(session_cookie(&state, &session)?)
        .finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_form() {
        let form = AdminForm {
            action: "create_blog".to_string(),
            title: Some("Update".to_string()),
            content: Some("v2".to_string()),
            author: Some("Jane".to_string()),
            ..Default::default()
        };

        assert_eq!(
            action_from_form(form),
            AdminAction::CreatePost {
                title: "Update".to_string(),
                content: "v2".to_string(),
                author: Some("Jane".to_string()),
            }
        );
    }

    #[test]
    fn test_missing_login_fields_become_empty() {
        let form = AdminForm {
            action: "login".to_string(),
            ..Default::default()
        };

        assert_eq!(
            action_from_form(form),
            AdminAction::Login {
                keyname: String::new(),
                password: String::new(),
            }
        );
    }

    #[test]
    fn test_unknown_action() {
        let form = AdminForm {
            action: "publish".to_string(),
            ..Default::default()
        };

        assert_eq!(
            action_from_form(form),
            AdminAction::Unknown("publish".to_string())
        );
    }
}
