use axum::http::StatusCode;

/// Liveness probe for anything hosting the generator.
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "healthy")
}
