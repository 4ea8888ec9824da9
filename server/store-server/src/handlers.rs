use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::error::{StoreResult, StoreServerError};
use crate::store::FileDocumentStore;

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub status: String,
    pub message: String,
}

/// `GET /{app}`
pub async fn get_document(
    State(store): State<FileDocumentStore>,
    Path(app): Path<String>,
) -> StoreResult<Json<Value>> {
    Ok(Json(store.read(&app).await?))
}

/// `PUT /{app}` and `POST /{app}`
pub async fn put_document(
    State(store): State<FileDocumentStore>,
    Path(app): Path<String>,
    body: Bytes,
) -> StoreResult<Json<UpdateResponse>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(StoreServerError::EmptyDocument);
    }
    let document: Value = serde_json::from_slice(&body).map_err(StoreServerError::MalformedBody)?;

    store.write(&app, &document).await?;

    Ok(Json(UpdateResponse {
        status: "success".to_string(),
        message: format!("Updated values for {app}"),
    }))
}
