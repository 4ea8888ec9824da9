use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

use error_common::{ConfbotError, Result};

use crate::create_app;
use crate::store::{DocumentKind, FileDocumentStore};

/// Everything a store binary needs to start
#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub kind: DocumentKind,
    pub dir: PathBuf,
    pub listen: String,
}

/// Bind `options.listen` and serve documents until the process stops
///
/// # Errors
///
/// Fails on an unparsable listen address, a missing document directory,
/// a bind failure, or a server runtime error.
pub async fn serve(options: ServeOptions) -> Result<()> {
    let addr: SocketAddr = options
        .listen
        .parse()
        .map_err(|e| ConfbotError::ConfigError(format!("invalid listen address {}: {e}", options.listen)))?;

    let is_dir = tokio::fs::metadata(&options.dir)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false);
    if !is_dir {
        return Err(ConfbotError::StorageError(format!(
            "{} directory {} does not exist",
            options.kind,
            options.dir.display()
        )));
    }

    let store = FileDocumentStore::new(&options.dir, options.kind);
    let app = create_app(store);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ConfbotError::NetworkError(format!("Failed to bind to {addr}: {e}")))?;

    info!(
        kind = %options.kind,
        dir = %options.dir.display(),
        "{} service running on http://{addr}",
        options.kind
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| ConfbotError::ServerError(format!("HTTP server error: {e}")))
}
