use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

/// Liveness message at the root path.
#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Server is up",
        "timestamp": Utc::now()
    }))
}

/// Health check endpoint
///
/// Returns the current status of the API and timestamp.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "timestamp": Utc::now()
    }))
}
