use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde_json::json;

use crate::config::Settings;

pub async fn get_healthz(settings: web::Data<Settings>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "api": settings.version,
        "version": settings.release_id,
        "description": "health of hello-restful service",
        "time": Utc::now().to_rfc3339(),
    }))
}
