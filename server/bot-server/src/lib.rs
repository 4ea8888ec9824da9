//! confbot server - natural-language configuration updates
//!
//! `POST /message` takes an instruction such as "turnuva için replicas 5
//! yap", works out which application and fields it talks about, applies
//! the change to the application's configuration document, validates the
//! result against the application's JSON Schema and writes it back.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod orchestrator;
pub mod routes;
pub mod server;

// Re-export commonly used types
pub use config::BotConfig;
pub use error::*;
pub use orchestrator::{OrchestratorError, Outcome, RequestOrchestrator};
pub use server::BotServer;

use axum::{middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the main application router with all routes and middleware
pub fn create_app(server: BotServer) -> Router {
    routes::create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(from_fn(middleware::request_timing_middleware)),
        )
        .with_state(server)
}
