//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use std::io;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (writing output, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from the datadesc-core library
    #[error(transparent)]
    Core(#[from] datadesc_core::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        use datadesc_core::Error as CoreError;

        match self {
            Self::Io(_) => 1,
            Self::Core(core) => match core {
                CoreError::Io { .. } => 1,
                CoreError::EmptyDocument { .. } | CoreError::Encode { .. } => 2,
                CoreError::FileNotFound { .. } => 3,
                CoreError::UnsupportedFormat { .. } => 4,
                CoreError::YamlParse { .. }
                | CoreError::JsonParse { .. }
                | CoreError::Codec { .. } => 5,
                CoreError::ReferenceNotFound { .. } => 6,
                CoreError::InvalidPointer { .. } => 7,
                CoreError::CyclicReference { .. } | CoreError::DepthExceeded { .. } => 8,
            },
            Self::Config(_) => 10,
            Self::Other { .. } => 99,
        }
    }
}

/// Format an error for display to the user, including its causes
pub fn format_error(error: &Error, use_color: bool) -> String {
    let mut message = if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    };

    // thiserror already folds `source` into most messages; only the opaque
    // codec errors carry a deeper chain worth printing
    if let Error::Core(datadesc_core::Error::Codec { source, .. }) = error {
        for cause in source.chain().skip(1) {
            message.push_str(&format!("\n  caused by: {}", cause));
        }
    }

    message
}
