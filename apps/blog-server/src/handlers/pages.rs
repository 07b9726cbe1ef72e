//! Public pages: the post list and single posts.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};
use askama::Template;
use quill_core::DomainError;
use quill_core::domain::AdminSession;
use uuid::Uuid;

use crate::middleware::error::{AppError, AppResult};
use crate::middleware::session::{VisitorSession, session_cookie};
use crate::state::AppState;
use crate::views::{FlashView, IndexTemplate, PostTemplate};

/// Render a page, consuming the visitor's pending flashes.
///
/// The session cookie is rewritten only when flashes were shown.
pub(crate) fn render_page<T: Template>(
    state: &AppState,
    mut session: AdminSession,
    build: impl FnOnce(Vec<FlashView>) -> T,
) -> AppResult<HttpResponse> {
    let flashes = session.take_flashes();
    let shown_flashes = !flashes.is_empty();
    let body = build(flashes.into_iter().map(FlashView::from).collect()).render()?;

    let mut response = HttpResponse::Ok();
    response.content_type(ContentType::html());
    if shown_flashes {
        response.cookie(session_cookie(state, &session)?);
    }
    Ok(response.body(body))
}

/// GET / - all posts, newest first.
pub async fn index(
    state: web::Data<AppState>,
    VisitorSession(session): VisitorSession,
) -> AppResult<HttpResponse> {
    let posts = state.controller.store().list().await?;

    render_page(&state, session, |flashes| IndexTemplate {
        flashes,
        posts: posts.into_iter().map(Into::into).collect(),
    })
}

/// GET /blog/{id}
pub async fn view_post(
    state: web::Data<AppState>,
    VisitorSession(session): VisitorSession,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = Uuid::parse_str(&path.into_inner()).map_err(|_| AppError::PageNotFound)?;

    let post = match state.controller.store().get(id).await {
        Ok(post) => post,
        Err(DomainError::NotFound { .. }) => return Err(AppError::PageNotFound),
        Err(e) => return Err(e.into()),
    };

    render_page(&state, session, |flashes| PostTemplate {
        flashes,
        post: post.into(),
    })
}
