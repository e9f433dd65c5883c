use actix_web::{web, HttpResponse, Responder};
use shared_types::HealthResponse;
use std::sync::Arc;

use crate::database::Database;

pub async fn health(db: web::Data<Arc<Database>>) -> impl Responder {
    if db.is_connected() {
        HttpResponse::Ok().json(HealthResponse {
            status: "healthy".to_string(),
            database: "connected".to_string(),
        })
    } else {
        HttpResponse::InternalServerError().json(HealthResponse {
            status: "unhealthy".to_string(),
            database: "disconnected".to_string(),
        })
    }
}
