use actix_web::{web, HttpResponse, Result as ActixResult};
use serde::Deserialize;
use shared_types::{ErrorResponse, ResumesResponse};
use std::sync::Arc;

use crate::database::{Database, RecordStore};

const DEFAULT_LIMIT: usize = 50;
const MAX_LIMIT: usize = 500;

#[derive(Deserialize)]
pub struct ListResumesQuery {
    pub limit: Option<usize>,
}

pub async fn list_resumes(
    db: web::Data<Arc<Database>>,
    query: web::Query<ListResumesQuery>,
) -> ActixResult<HttpResponse> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let db = db.get_ref().clone();

    let resumes = web::block(move || db.list(limit))
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(ResumesResponse { resumes }))
}

pub async fn get_resume(
    db: web::Data<Arc<Database>>,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let resume_id = path.into_inner();
    let db = db.get_ref().clone();

    let resume = web::block(move || db.get(resume_id))
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    match resume {
        Some(resume) => Ok(HttpResponse::Ok().json(resume)),
        None => Ok(HttpResponse::NotFound().json(ErrorResponse {
            error: format!("Resume {} not found", resume_id),
        })),
    }
}
