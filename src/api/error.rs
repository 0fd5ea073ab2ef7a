use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Position of an offending value inside the request, e.g. `["body", "numbers", 2]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LocPart {
    Key(&'static str),
    Index(usize),
}

/// One validation failure, shaped for the `detail` list of a 422 response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub loc: Vec<LocPart>,
    pub msg: String,
}

impl FieldError {
    pub fn new(kind: &'static str, loc: Vec<LocPart>, msg: impl Into<String>) -> Self {
        Self {
            kind,
            loc,
            msg: msg.into(),
        }
    }
}

/// Errors surfaced to HTTP callers.
#[derive(Debug)]
pub enum ApiError {
    /// The request body was not an acceptable `{"numbers": [...]}` payload.
    Validation(Vec<FieldError>),
    /// The computation task panicked or was cancelled.
    Internal(String),
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl Display for ApiError {
    fn fmt(&self, formatter: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            ApiError::Validation(errors) => {
                write!(formatter, "request validation failed")?;
                for err in errors {
                    write!(formatter, "; {}", err.msg)?;
                }
                Ok(())
            }
            ApiError::Internal(msg) => write!(formatter, "internal error: {}", msg),
        }
    }
}

impl Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": errors })),
            )
                .into_response(),
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": "Error computing statistics" })),
            )
                .into_response(),
        }
    }
}
