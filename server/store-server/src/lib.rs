//! File-backed document services for confbot
//!
//! The same crate serves two processes:
//!
//! - `schema-server`: read-only JSON Schemas, `GET /{app}`
//! - `values-server`: configuration documents, `GET`, `PUT` and `POST /{app}`
//!
//! Documents live as one file per application in a flat directory; see
//! [`FileDocumentStore`].

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod store;

pub use error::*;
pub use server::{serve, ServeOptions};
pub use store::{DocumentKind, FileDocumentStore};

use axum::{middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the router for one store
pub fn create_app(store: FileDocumentStore) -> Router {
    routes::create_routes(&store)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(from_fn(middleware::request_timing_middleware)),
        )
        .with_state(store)
}
