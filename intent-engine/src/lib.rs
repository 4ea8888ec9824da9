//! Intent extraction for confbot
//!
//! Turns an operator instruction such as "set memory to 1024 for tournament"
//! into a flat [`config_engine::FieldUpdateMap`].
//!
//! # Pipeline
//!
//! 1. Resolve the target application from a fixed alias table
//!    ([`resolve_application`])
//! 2. Ask a text-completion oracle for a JSON object, using a few-shot
//!    prompt built from the same keyword table the fallback uses
//! 3. Clean up and parse the answer, accepting loose literal syntax
//! 4. If anything goes wrong, fall back to a keyword and digit scan of the
//!    raw input. Input with no digits never produces updates.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use intent_engine::{create_oracle, resolve_application, IntentExtractor, OracleConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let oracle = create_oracle(&OracleConfig::default())?;
//! let extractor = IntentExtractor::new(oracle);
//!
//! let input = "turnuva için replicas 5 yap";
//! if let Some(app) = resolve_application(input) {
//!     let updates = extractor.extract(input, &app).await;
//!     println!("{app}: {}", serde_json::to_string(&updates)?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod extractor;
pub mod fallback;
pub mod parsing;
pub mod prompt;
pub mod providers;
pub mod vocabulary;

pub use config::*;
pub use error::*;
pub use extractor::*;
pub use fallback::*;
pub use providers::{create_oracle, CompletionOracle, OllamaOracle};
pub use vocabulary::*;
