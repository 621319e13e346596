// src/error.rs
//! Error type shared by every layer of the client.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, YowebError>;

#[derive(Debug, Error)]
pub enum YowebError {
    /// Missing world name, unusable fetch options, HTTP client build failure.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network failure or non-2xx response.
    #[error("Fetch error for {url}: {message}")]
    Fetch { url: String, message: String },

    /// A table, row or cell the page layout promises is missing or malformed.
    #[error("Parse error on {page} page: {message}")]
    Parse { page: &'static str, message: String },
}

impl YowebError {
    pub(crate) fn fetch(url: &str, message: impl Into<String>) -> Self {
        Self::Fetch { url: s!(url), message: message.into() }
    }

    pub(crate) fn parse(page: &'static str, message: impl Into<String>) -> Self {
        Self::Parse { page, message: message.into() }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
