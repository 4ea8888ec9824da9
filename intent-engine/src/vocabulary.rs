//! Application aliases and configuration field vocabulary
//!
//! Both tables are ordered; lookups walk them front to back and stop at the
//! first hit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// `(pattern, canonical application)` pairs, English and Turkish
pub const APP_ALIASES: &[(&str, &str)] = &[
    ("tournament", "tournament"),
    ("turnuva", "tournament"),
    ("matchmaking", "matchmaking"),
    ("eşleştirme", "matchmaking"),
    ("chat", "chat"),
    ("sohbet", "chat"),
];

/// Canonical configuration fields the extractor knows about
pub const FIELD_VOCABULARY: &[&str] = &[
    "limitMiB",
    "requestMiB",
    "limitMilliCPU",
    "requestMilliCPU",
    "replicas",
];

/// Keywords that select a group of configuration fields
#[derive(Debug, Clone, Copy)]
pub struct KeywordClass {
    pub keywords: &'static [&'static str],
    pub fields: &'static [&'static str],
}

impl KeywordClass {
    /// `lowered_input` must already be lowercased
    pub fn matches(&self, lowered_input: &str) -> bool {
        self.keywords.iter().any(|k| lowered_input.contains(k))
    }
}

pub const KEYWORD_CLASSES: &[KeywordClass] = &[
    KeywordClass {
        keywords: &["memory", "bellek", "hafıza"],
        fields: &["limitMiB", "requestMiB"],
    },
    KeywordClass {
        keywords: &["cpu", "işlemci"],
        fields: &["limitMilliCPU", "requestMilliCPU"],
    },
    KeywordClass {
        keywords: &["replica", "replika"],
        fields: &["replicas"],
    },
];

/// First keyword class mentioned in `input`, case-insensitively
pub fn classify(input: &str) -> Option<&'static KeywordClass> {
    let lowered = input.to_lowercase();
    KEYWORD_CLASSES.iter().find(|class| class.matches(&lowered))
}

/// Canonical name of a managed application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationName(String);

impl ApplicationName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ApplicationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Resolve the application an instruction talks about
///
/// Case-insensitive substring match against [`APP_ALIASES`]; the first
/// alias found in the input wins.
pub fn resolve_application(input: &str) -> Option<ApplicationName> {
    let lowered = input.to_lowercase();
    APP_ALIASES
        .iter()
        .find(|(pattern, _)| lowered.contains(pattern))
        .map(|(_, canonical)| ApplicationName((*canonical).to_string()))
}
