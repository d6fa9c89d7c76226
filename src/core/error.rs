//! Error types for islander-compat
//!
//! This module provides structured error handling using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for compatibility operations
pub type Result<T> = std::result::Result<T, CompatError>;

/// Errors that can occur while loading reference data or scoring villagers
#[derive(Error, Debug)]
pub enum CompatError {
    /// Malformed or incomplete bundled rule data. Fatal at startup.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A requested villager id has no record in the dataset
    #[error("Villager #{position} '{id}' not found in the dataset")]
    SubjectNotFound { position: usize, id: String },

    /// A date that falls outside every star sign range
    #[error("Invalid birthday: {month}/{day}")]
    InvalidDate { month: u32, day: u32 },

    /// The scorer received the wrong number of marks
    #[error("Invalid input: expected 3 compatibility marks, got {count}")]
    InvalidInput { count: usize },

    /// Dataset-level problem (duplicate ids, bad shape)
    #[error("Dataset error: {message}")]
    Dataset { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<CompatError>,
    },
}

impl CompatError {
    /// Wrap an error with additional context
    pub fn with_context(self, context: impl Into<String>) -> Self {
        CompatError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        CompatError::Configuration {
            message: message.into(),
        }
    }

    /// Create a dataset error
    pub fn dataset(message: impl Into<String>) -> Self {
        CompatError::Dataset {
            message: message.into(),
        }
    }

    /// The innermost error, skipping any context wrappers
    pub fn root(&self) -> &CompatError {
        match self {
            CompatError::WithContext { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(ctx))
    }
}
