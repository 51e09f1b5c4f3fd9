use axum::http::{HeaderMap, HeaderValue};
use axum::response::IntoResponse;
use axum::Json;
use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Failures of the outbound chat-completion call.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("rate limited by completion provider")]
    RateLimited,
    #[error("provider returned an error: {0}")]
    Api(String),
    #[error("invalid completion envelope: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing input: {0}")]
    MissingInput(String),
    #[error("Model reply is not a well-formed portfolio object: {detail}")]
    MalformedResponse { detail: String, raw: String },
    #[error("Model reply is missing required field `{0}`")]
    MissingField(&'static str),
    #[error("Completion call failed: {0}")]
    Transport(#[from] LlmError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    /// Raw completion text, echoed back so the caller can see what the model
    /// actually produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_response: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let message = self.to_string();
        match self {
            AppError::MissingInput(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody { error: message, raw_response: None }),
            )
                .into_response(),
            AppError::MalformedResponse { raw, .. } => (
                StatusCode::BAD_GATEWAY,
                Json(ErrorBody { error: message, raw_response: Some(raw) }),
            )
                .into_response(),
            AppError::MissingField(_) => (
                StatusCode::BAD_GATEWAY,
                Json(ErrorBody { error: message, raw_response: None }),
            )
                .into_response(),
            AppError::Transport(LlmError::RateLimited) => {
                let mut headers = HeaderMap::new();
                headers.insert("Retry-After", HeaderValue::from_static("60"));
                (StatusCode::TOO_MANY_REQUESTS, headers, "Rate limited").into_response()
            }
            AppError::Transport(_) => (
                StatusCode::BAD_GATEWAY,
                Json(ErrorBody { error: message, raw_response: None }),
            )
                .into_response(),
        }
    }
}
