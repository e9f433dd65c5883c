pub mod config;
pub mod database;
pub mod handlers;
pub mod helpers;

pub use database::Database;

use actix_web::web;

/// Register every route served by the API.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::pages::home))
        .service(
            web::resource("/upload/")
                .route(web::get().to(handlers::pages::upload_form))
                .route(web::post().to(handlers::upload::upload_archive)),
        )
        .route("/health", web::get().to(handlers::health::health))
        .route("/api/resumes", web::get().to(handlers::resumes::list_resumes))
        .route("/api/resumes/{id}", web::get().to(handlers::resumes::get_resume));
}
