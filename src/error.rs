// src/error.rs

//! Unified error handling for corpus loading, selection and generation.

use std::fmt;

use thiserror::Error;

use crate::models::Framework;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A curriculum document could not be read
    #[error("Source error for {location}: {message}")]
    Source { location: String, message: String },

    /// A curriculum document had content the parser cannot accept
    #[error("Parse error in {framework} document: {message}")]
    Parse { framework: Framework, message: String },

    /// The text generation service rejected or failed a request
    #[error("Generation service error ({status}): {message}")]
    Generation { status: u16, message: String },
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a source error with the offending location.
    pub fn source(location: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Source {
            location: location.into(),
            message: message.to_string(),
        }
    }

    /// Create a parse error for a framework document.
    pub fn parse(framework: Framework, message: impl fmt::Display) -> Self {
        Self::Parse {
            framework,
            message: message.to_string(),
        }
    }

    /// Create a generation service error.
    pub fn generation(status: u16, message: impl fmt::Display) -> Self {
        Self::Generation {
            status,
            message: message.to_string(),
        }
    }
}
