//! HTTP handlers and route configuration.

mod admin;
mod api;
mod health;
mod pages;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(pages::index))
        .route("/blog/{id}", web::get().to(pages::view_post))
        .service(
            web::resource("/admin")
                .route(web::get().to(admin::dashboard))
                .route(web::post().to(admin::submit)),
        )
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .route("/posts", web::get().to(api::list_posts))
                .route("/posts/{id}", web::get().to(api::get_post)),
        );
}
