use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cihui_generator::GenerationFailure;
use serde::Serialize;

pub const INVALID_INPUT: &str = "Invalid input: inputs array is required.";
pub const EXHAUSTED: &str = "AI 模型在多次嘗試後仍無法回傳有效結果，請調整您的輸入或稍後再試。";
pub const BACKEND_FAILED: &str = "後端函式執行失敗。";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Generation(#[from] GenerationFailure),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.as_str(), None),
            ApiError::Generation(GenerationFailure::Exhausted { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, EXHAUSTED, None)
            }
            ApiError::Generation(GenerationFailure::Fatal { details }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                BACKEND_FAILED,
                Some(details.as_str()),
            ),
        };

        (status, Json(ErrorBody { error, details })).into_response()
    }
}
