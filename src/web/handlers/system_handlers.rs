//! Liveness probe.

use rocket::serde::json::Json;

use crate::web::types::HealthResponse;

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "talentflow",
    })
}
