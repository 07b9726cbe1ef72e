//! Read-only JSON API over the post store.

use actix_web::{HttpResponse, web};
use quill_core::domain::Post;
use quill_shared::ApiResponse;
use quill_shared::dto::{PostListResponse, PostResponse};
use uuid::Uuid;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        content: post.content,
        author: post.author,
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
    }
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let store = state.controller.store();
    let posts: Vec<PostResponse> = store.list().await?.into_iter().map(post_response).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostListResponse {
        count: posts.len(),
        posts,
        max: store.bounds().max,
    })))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw = path.into_inner();
    let id = Uuid::parse_str(&raw)
        .map_err(|_| AppError::NotFound(format!("Post with id {} not found", raw)))?;

    let post = state.controller.store().get(id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post_response(post))))
}
