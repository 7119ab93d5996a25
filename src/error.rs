//! Error types for the Cosmic Notebook title controller
//!
//! Nothing in the title controller is fatal. Configuration and editor model
//! failures are surfaced as `Result`s; failures of asynchronous workbench
//! actions are handed to an [`ErrorSink`] instead of propagating into UI
//! event handlers.

use crate::state::{DocumentId, GroupId};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type encompassing all error categories
#[derive(Error, Debug)]
pub enum AppError {
    /// Title controller errors
    #[error(transparent)]
    Title(#[from] TitleError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Editor model errors
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// Generic unexpected error
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors raised while dispatching title interactions
#[derive(Error, Debug)]
pub enum TitleError {
    /// The asynchronous close action reported a failure
    #[error("Could not close document {document} in group {group}")]
    CloseFailed {
        group: GroupId,
        document: DocumentId,
        #[source]
        source: anyhow::Error,
    },
}

/// Configuration related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Could not load configuration: {path}")]
    LoadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing configuration
    #[error("Invalid configuration format: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration directory error
    #[error("Could not access configuration directory")]
    DirectoryError,
}

/// Editor model errors
#[derive(Error, Debug)]
pub enum EditorError {
    /// Group not found
    #[error("Editor group not found: {id}")]
    GroupNotFound { id: GroupId },

    /// Document not found in the group
    #[error("Document {document} is not open in group {group}")]
    DocumentNotFound { group: GroupId, document: DocumentId },

    /// Document has unsaved changes and cannot be closed silently
    #[error("Document has unsaved changes: {name}")]
    UnsavedChanges { name: String },
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for editor model operations
pub type EditorResult<T> = Result<T, EditorError>;

impl EditorError {
    /// Create a user-friendly error message suitable for display in dialogs
    pub fn user_message(&self) -> String {
        match self {
            EditorError::UnsavedChanges { name } => {
                format!("\"{}\" has unsaved changes. Save or revert it before closing.", name)
            }
            EditorError::DocumentNotFound { .. } => {
                "The document is no longer open. It may have been closed already.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Process-wide reporter for failures nobody is waiting on
pub trait ErrorSink {
    fn report(&self, error: &AppError);
}

/// Error sink writing unexpected errors to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogErrorSink;

impl ErrorSink for LogErrorSink {
    fn report(&self, error: &AppError) {
        match std::error::Error::source(error) {
            Some(source) => log::error!("Unexpected error: {} ({})", error, source),
            None => log::error!("Unexpected error: {}", error),
        }
    }
}
