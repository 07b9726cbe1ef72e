//! HTML templates and the view models they render.

use askama::Template;
use quill_core::domain::{Flash, Post};

const DATE_FORMAT: &str = "%B %d, %Y at %H:%M UTC";

pub struct FlashView {
    pub kind: &'static str,
    pub message: String,
}

impl From<Flash> for FlashView {
    fn from(flash: Flash) -> Self {
        Self {
            kind: flash.kind.as_str(),
            message: flash.message,
        }
    }
}

pub struct PostView {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: String,
    pub updated_at: String,
    pub edited: bool,
}

impl From<Post> for PostView {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            edited: post.updated_at != post.created_at,
            created_at: post.created_at.format(DATE_FORMAT).to_string(),
            updated_at: post.updated_at.format(DATE_FORMAT).to_string(),
            title: post.title,
            content: post.content,
            author: post.author,
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub flashes: Vec<FlashView>,
    pub posts: Vec<PostView>,
}

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostTemplate {
    pub flashes: Vec<FlashView>,
    pub post: PostView,
}

#[derive(Template)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    pub flashes: Vec<FlashView>,
    pub logged_in: bool,
    pub posts: Vec<PostView>,
    pub count: usize,
    pub max: usize,
    pub min: usize,
    pub title_max: usize,
    pub author_max: usize,
}

#[derive(Template, Default)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub flashes: Vec<FlashView>,
}
