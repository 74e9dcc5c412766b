use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use axum::Router;
use cihui_core::build_prompt;
use cihui_generator::{GenerationRequest, generate_vocabulary};
use cihui_types::{PatternError, QueryPattern, VocabularyEntry};
use serde_json::{Value, json};

use crate::error::{ApiError, INVALID_INPUT};
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/vocabulary", post(get_vocabulary))
        .route("/api/health", get(api_health))
}

/// Decode `{ "inputs": [...] }` into a pattern.
///
/// An empty body reads as `{}`.
pub(crate) fn parse_inputs(body: &[u8]) -> Result<QueryPattern, ApiError> {
    let value: Value = if body.iter().all(u8::is_ascii_whitespace) {
        json!({})
    } else {
        serde_json::from_slice(body)
            .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {e}")))?
    };

    let inputs = value
        .get("inputs")
        .and_then(Value::as_array)
        .filter(|inputs| !inputs.is_empty())
        .ok_or_else(|| ApiError::BadRequest(INVALID_INPUT.to_string()))?;

    let slots = inputs
        .iter()
        .map(|v| v.as_str())
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| ApiError::BadRequest("Invalid input: inputs must be strings.".to_string()))?;

    QueryPattern::new(slots).map_err(|e| match e {
        PatternError::NoSlots => ApiError::BadRequest(INVALID_INPUT.to_string()),
        PatternError::TooManySlots(_) => ApiError::BadRequest(format!("Invalid input: {e}.")),
    })
}

async fn get_vocabulary(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Vec<VocabularyEntry>>, ApiError> {
    let pattern = parse_inputs(&body)?;

    let Some(prompt) = build_prompt(&pattern) else {
        tracing::debug!("blank pattern, skipping model call");
        return Ok(Json(Vec::new()));
    };

    tracing::info!(pattern = %pattern.compact(), "vocabulary query");

    let request = GenerationRequest::vocabulary(prompt, state.temperature);

    match generate_vocabulary(state.generator.as_ref(), &request, state.retry).await {
        Ok(entries) => {
            tracing::info!(entries = entries.len(), "vocabulary query answered");
            Ok(Json(entries))
        }
        Err(e) => {
            tracing::error!(error = %e, "vocabulary query failed");
            Err(e.into())
        }
    }
}

async fn api_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let metadata = state.generator.metadata();

    Json(json!({
        "status": "ok",
        "provider": metadata.name,
        "model": metadata.model,
    }))
}
