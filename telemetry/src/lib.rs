//! Logging setup for the confbot services
//!
//! All three binaries initialize `tracing` through [`init_tracing`] so they
//! share the same filter defaults and output formats:
//!
//! - **Pretty**: human-readable lines with RFC 3339 timestamps, file and
//!   line numbers, meant for local development
//! - **Json**: one JSON object per event, meant for log shippers
//!
//! `RUST_LOG` always wins over the computed default filter.
//!
//! # Example
//!
//! ```rust,no_run
//! use telemetry::{init_tracing, LogFormat, LoggingConfig};
//!
//! let config = LoggingConfig::new("bot-server")
//!     .with_verbose(true)
//!     .with_format(LogFormat::Json);
//! init_tracing(&config).expect("tracing already initialized");
//! tracing::info!(service = %config.service_name, "logging ready");
//! ```

pub mod error;
pub mod logging;

pub use error::*;
pub use logging::*;
