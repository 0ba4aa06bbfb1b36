//! Wish Routes
//!
//! - GET /api/wishes - List all wishes in stored order
//! - POST /api/wishes - Append a wish

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::api::dto::{CreateWishRequest, CreateWishResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::storage::Wish;

/// Header identifying the submitting client
pub const SENDER_HEADER: &str = "x-user-agent";

/// GET /api/wishes
///
/// Return the full collection.
pub async fn list_wishes(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Wish>>> {
    let wishes = state.store.load().await.map_err(ApiError::ReadWishes)?;
    Ok(Json(wishes))
}

/// POST /api/wishes
///
/// Validate the payload, append the new wish and echo it back.
pub async fn create_wish(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<CreateWishResponse>> {
    let Json(body) = payload.map_err(reject_payload)?;
    let req = decode_request(body)?;

    let wish = build_wish(req, sender_label(&headers))?;
    let wish = state.store.append(wish).await.map_err(ApiError::SaveWish)?;

    tracing::info!(
        id = %wish.id,
        from = %wish.from,
        timestamp = %wish.timestamp,
        text = %wish.text,
        "New wish saved"
    );

    Ok(Json(CreateWishResponse {
        success: true,
        wish,
    }))
}

/// Map an extractor rejection; oversized bodies keep their own status
fn reject_payload(rejection: JsonRejection) -> ApiError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(rejection.body_text())
    } else {
        ApiError::Validation(rejection.body_text())
    }
}

/// Decode the body, accepting JSON objects only
fn decode_request(body: Value) -> ApiResult<CreateWishRequest> {
    match body {
        body @ Value::Object(_) => serde_json::from_value(body)
            .map_err(|e| ApiError::Validation(e.to_string())),
        other => Err(ApiError::Validation(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Turn a decoded request into a wish, rejecting missing or empty fields
fn build_wish(req: CreateWishRequest, sender: Option<&str>) -> ApiResult<Wish> {
    let text = req.text.filter(|t| !t.is_empty());
    let timestamp = req.timestamp.filter(|t| !t.is_empty());

    let (text, timestamp) = match (text, timestamp) {
        (Some(text), Some(timestamp)) => (text, timestamp),
        (None, _) => return Err(ApiError::Validation("text is missing or empty".to_string())),
        (_, None) => {
            return Err(ApiError::Validation(
                "timestamp is missing or empty".to_string(),
            ))
        }
    };

    let mut wish = Wish::new(text, timestamp);
    if let Some(id) = req.id {
        wish = wish.id(id);
    }
    if let Some(sender) = sender {
        wish = wish.sent_by(sender);
    }

    Ok(wish)
}

/// Sender label from the request headers, if one was sent
fn sender_label(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(SENDER_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
}
