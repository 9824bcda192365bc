//! Root greeting and health check

use axum::Json;
use serde::Serialize;
use social_core::Greeting;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

pub async fn root() -> Json<Greeting> {
    Json(Greeting::default())
}

/// Liveness probe, no store access.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
