use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

/// Any origin when `origins` is empty, otherwise only the listed ones.
/// Unparseable entries are skipped; if none survive the layer falls back to
/// any origin.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new().allow_headers(Any).allow_methods(Any);
    if allowed.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(allowed)
    }
}
