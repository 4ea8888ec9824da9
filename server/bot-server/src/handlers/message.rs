use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use config_engine::Rejection;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use utoipa::ToSchema;

use crate::error::{ApiError, ApiErrorResponse, ApiResult};
use crate::orchestrator::Outcome;
use crate::server::BotServer;

/// Natural-language instruction
#[derive(Debug, Deserialize, ToSchema)]
pub struct MessageRequest {
    /// Free text naming an application and the change to make
    #[schema(example = "set memory to 1024 for tournament")]
    pub input: String,
}

/// Body returned when the updated document violates its schema
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RejectionResponse {
    #[schema(example = "error")]
    pub status: String,
    /// `Schema validation failed: <reason>`
    pub message: String,
    /// JSON pointer to the offending value
    #[schema(example = "/deployment/replicas")]
    pub path: String,
    /// The updated, unsaved document
    #[schema(value_type = Object)]
    pub original_values: Value,
}

impl RejectionResponse {
    pub fn new(rejection: Rejection, document: Value) -> Self {
        Self {
            status: "error".to_string(),
            message: format!("Schema validation failed: {}", rejection.reason),
            path: rejection.path,
            original_values: document,
        }
    }
}

/// Apply a natural-language configuration change
#[utoipa::path(
    post,
    path = "/message",
    tag = "message",
    request_body = MessageRequest,
    responses(
        (status = 200, description = "Current configuration document, after any accepted update"),
        (status = 400, description = "Malformed request or schema rejection", body = RejectionResponse),
        (status = 404, description = "No known application mentioned", body = ApiErrorResponse),
        (status = 500, description = "Values service unreachable", body = ApiErrorResponse)
    )
)]
pub async fn handle_message(
    State(server): State<BotServer>,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    debug!(input = %request.input, "received message");

    let outcome = server.orchestrator.handle(&request.input).await?;

    Ok(match outcome {
        Outcome::Unchanged { document, .. } | Outcome::Updated { document, .. } => {
            Json(document).into_response()
        }
        Outcome::Rejected {
            rejection,
            document,
            ..
        } => (
            StatusCode::BAD_REQUEST,
            Json(RejectionResponse::new(rejection, document)),
        )
            .into_response(),
    })
}
