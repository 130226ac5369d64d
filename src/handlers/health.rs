use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe for Docker/K8s. Always healthy: the service has no
/// downstream dependencies to check.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy"
    }))
}
