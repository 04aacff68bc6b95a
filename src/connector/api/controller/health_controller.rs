use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use super::super::dto::HealthBody;
use super::super::Container;

/// `GET /api/health`
pub async fn health(State(container): State<Arc<Container>>) -> Json<HealthBody> {
    Json(container.health_use_case().execute().into())
}
