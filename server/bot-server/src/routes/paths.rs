//! Route path constants
//!
//! utoipa `#[path(...)]` attributes need string literals; keep them in sync
//! with these constants.

pub const HEALTH: &str = "/health";
pub const MESSAGE: &str = "/message";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
