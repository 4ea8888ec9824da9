//! File-backed document store
//!
//! One JSON file per application in a flat directory, named
//! `<app>.schema.json` or `<app>.value.json`. Lookups try the exact name
//! first and then fall back to a case-insensitive scan, so
//! `Tournament.schema.json` answers for `tournament`.

use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::error::{StoreResult, StoreServerError};

/// Which kind of document a store serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Schema,
    Values,
}

impl DocumentKind {
    pub fn suffix(self) -> &'static str {
        match self {
            DocumentKind::Schema => ".schema.json",
            DocumentKind::Values => ".value.json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Schema => "Schema",
            DocumentKind::Values => "Values",
        }
    }

    pub fn is_writable(self) -> bool {
        matches!(self, DocumentKind::Values)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Documents of one kind in one directory
#[derive(Debug, Clone)]
pub struct FileDocumentStore {
    dir: PathBuf,
    kind: DocumentKind,
}

impl FileDocumentStore {
    pub fn new(dir: impl AsRef<Path>, kind: DocumentKind) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            kind,
        }
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_name(&self, app: &str) -> StoreResult<String> {
        let invalid = app.is_empty()
            || app.contains(['/', '\\', '\0'])
            || app.contains("..");
        if invalid {
            return Err(StoreServerError::InvalidName(app.to_string()));
        }
        Ok(format!("{app}{}", self.kind.suffix()))
    }

    /// Locate the file for `app`, exact name first
    pub async fn resolve(&self, app: &str) -> StoreResult<Option<PathBuf>> {
        let target = self.file_name(app)?;

        let exact = self.dir.join(&target);
        if fs::try_exists(&exact).await? {
            return Ok(Some(exact));
        }

        let target = target.to_lowercase();
        let mut entries = fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_name().to_string_lossy().to_lowercase() == target {
                debug!(app = %app, path = %entry.path().display(), "case-insensitive match");
                return Ok(Some(entry.path()));
            }
        }

        Ok(None)
    }

    /// Read and parse the document for `app`
    pub async fn read(&self, app: &str) -> StoreResult<Value> {
        let path = self
            .resolve(app)
            .await?
            .ok_or_else(|| StoreServerError::NotFound {
                kind: self.kind,
                app: app.to_string(),
            })?;

        let content = fs::read_to_string(&path).await?;
        serde_json::from_str(&content)
            .map_err(|source| StoreServerError::CorruptDocument { path, source })
    }

    /// Replace the document for `app`, creating the file if needed
    ///
    /// Writes to an existing case-insensitive match when there is one.
    pub async fn write(&self, app: &str, document: &Value) -> StoreResult<PathBuf> {
        if is_empty_document(document) {
            return Err(StoreServerError::EmptyDocument);
        }

        let path = match self.resolve(app).await? {
            Some(path) => path,
            None => self.dir.join(self.file_name(app)?),
        };

        let mut content = serde_json::to_string_pretty(document)
            .map_err(StoreServerError::MalformedBody)?;
        content.push('\n');
        fs::write(&path, content).await?;

        info!(app = %app, path = %path.display(), "stored document");
        Ok(path)
    }
}

/// `null`, `false`, `0`, `""`, `{}` and `[]` carry nothing worth storing
pub fn is_empty_document(document: &Value) -> bool {
    match document {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
    }
}
