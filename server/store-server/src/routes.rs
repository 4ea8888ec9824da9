use axum::{routing::get, Router};

use crate::handlers::{get_document, put_document};
use crate::store::FileDocumentStore;

pub const DOCUMENT: &str = "/:app";

/// Read routes, plus write routes when the store holds values
pub fn create_routes(store: &FileDocumentStore) -> Router<FileDocumentStore> {
    let route = get(get_document);
    let route = if store.kind().is_writable() {
        route.put(put_document).post(put_document)
    } else {
        route
    };
    Router::new().route(DOCUMENT, route)
}
