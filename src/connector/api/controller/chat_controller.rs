use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;
use tracing::Instrument;
use uuid::Uuid;

use super::super::dto::ChatSuccessBody;
use super::super::error::ApiError;
use super::super::Container;

/// `POST /api/chat`
///
/// The body is taken as raw JSON so that a missing or non-array `messages`
/// field, and bodies that are not JSON at all, all produce the same 400.
pub async fn chat(
    State(container): State<Arc<Container>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatSuccessBody>, ApiError> {
    let Json(body) = body?;
    let request_id = Uuid::new_v4();

    let reply = container
        .relay_chat_use_case()
        .execute_value(body)
        .instrument(tracing::info_span!("chat", %request_id))
        .await?;

    Ok(Json(reply.into()))
}
