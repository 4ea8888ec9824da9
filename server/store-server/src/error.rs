use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

use crate::store::DocumentKind;

/// Error body, same shape as the bot server's
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error_id: String,
    pub error_type: String,
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[derive(Error, Debug)]
pub enum StoreServerError {
    #[error("Invalid application name: {0}")]
    InvalidName(String),

    #[error("{} not found for {app}", .kind.label())]
    NotFound { kind: DocumentKind, app: String },

    #[error("Missing JSON data")]
    EmptyDocument,

    #[error("Request body is not valid JSON: {0}")]
    MalformedBody(serde_json::Error),

    #[error("Stored document {path} is not valid JSON: {source}")]
    CorruptDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            StoreServerError::InvalidName(_)
            | StoreServerError::EmptyDocument
            | StoreServerError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            StoreServerError::NotFound { .. } => StatusCode::NOT_FOUND,
            StoreServerError::CorruptDocument { .. } | StoreServerError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            StoreServerError::InvalidName(_) => "invalid_name",
            StoreServerError::NotFound { .. } => "not_found",
            StoreServerError::EmptyDocument | StoreServerError::MalformedBody(_) => "bad_request",
            StoreServerError::CorruptDocument { .. } => "corrupt_document",
            StoreServerError::Io(_) => "storage_error",
        }
    }
}

impl IntoResponse for StoreServerError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4().to_string();
        let status_code = self.status_code();

        error!(
            error_id = %error_id,
            error_type = %self.error_type(),
            status_code = %status_code.as_u16(),
            error = %self,
            "store error occurred"
        );

        let body = ApiErrorResponse {
            error_id,
            error_type: self.error_type().to_string(),
            message: self.to_string(),
            timestamp: chrono::Utc::now(),
        };

        (status_code, Json(body)).into_response()
    }
}

pub type StoreResult<T> = Result<T, StoreServerError>;
