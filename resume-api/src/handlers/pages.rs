use actix_web::{web, HttpResponse, Result as ActixResult};

use crate::handlers::AppState;

pub const HOME_TEMPLATE: &str = "home.html";
pub const UPLOAD_TEMPLATE: &str = "upload_resume.html";

pub async fn home(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    render(&state, HOME_TEMPLATE).await
}

pub async fn upload_form(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    render(&state, UPLOAD_TEMPLATE).await
}

async fn render(state: &AppState, template: &str) -> ActixResult<HttpResponse> {
    let path = state.templates_dir.join(template);

    let html = tokio::fs::read_to_string(&path).await.map_err(|e| {
        tracing::error!("Failed to read template {}: {}", path.display(), e);
        actix_web::error::ErrorInternalServerError(format!("Template {} is unavailable", template))
    })?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}
