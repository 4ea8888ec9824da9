//! Common error handling utilities for the confbot services
//!
//! Every binary in the workspace (`bot-server`, `schema-server`,
//! `values-server`) returns [`ConfbotError`] from `main`, so start-up
//! failures are reported the same way regardless of which process hit them.
//! Library crates keep their own `thiserror` enums and convert into this one
//! at the process boundary.
//!
//! # Example
//!
//! ```rust
//! use error_common::{ConfbotError, Result};
//!
//! fn parse_listen(addr: &str) -> Result<std::net::SocketAddr> {
//!     addr.parse()
//!         .map_err(|e| ConfbotError::ConfigError(format!("invalid listen address {addr}: {e}")))
//! }
//!
//! assert!(parse_listen("0.0.0.0:5003").is_ok());
//! assert!(parse_listen("nope").is_err());
//! ```

pub mod types;

pub use types::*;
