use axum::Json;
use chrono::{SecondsFormat, Utc};

#[derive(serde::Serialize)]
pub struct HealthResponse {
    status: &'static str,
    message: &'static str,
    timestamp: String,
}

pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "PawSafety backend is running",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
