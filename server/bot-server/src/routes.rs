pub mod paths;

use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    handlers::{health, message},
    openapi::ApiDoc,
    server::BotServer,
};

/// Create health check routes
pub fn health_routes() -> Router<BotServer> {
    Router::new().route(paths::HEALTH, get(health::health_check))
}

/// Create message routes
pub fn message_routes() -> Router<BotServer> {
    Router::new().route(paths::MESSAGE, post(message::handle_message))
}

/// Serve the generated OpenAPI document
pub fn docs_routes() -> Router<BotServer> {
    Router::new().route(paths::OPENAPI_JSON, get(|| async { Json(ApiDoc::openapi()) }))
}

/// Create all routes
pub fn create_routes() -> Router<BotServer> {
    Router::new()
        .merge(health_routes())
        .merge(message_routes())
        .merge(docs_routes())
}
