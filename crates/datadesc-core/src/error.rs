//! Error types for document loading and reference resolution
//!
//! Copyright (c) 2025 Datadesc Team
//! Licensed under the Apache-2.0 license

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for datadesc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading, saving or resolving documents
#[derive(Error, Debug)]
pub enum Error {
    /// No codec is registered for the file's extension
    #[error("Unsupported file format for '{}'. Expected one of: {expected}", path.display())]
    UnsupportedFormat { path: PathBuf, expected: String },

    /// Save attempted on a document without a root value, or with a null root
    #[error("No document to save to '{}'", path.display())]
    EmptyDocument { path: PathBuf },

    /// The file to load does not exist
    #[error("File not found: '{}'", path.display())]
    FileNotFound { path: PathBuf },

    /// Any other filesystem failure
    #[error("Failed to access file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML decoding errors
    #[error("Failed to parse YAML file '{}': {source}", path.display())]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON decoding errors
    #[error("Failed to parse JSON file '{}': {source}", path.display())]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Encoding a value back to text failed
    #[error("Failed to encode {format}: {reason}")]
    Encode { format: String, reason: String },

    /// Failure reported by a user-registered codec
    #[error("Codec '{name}' failed on '{}': {source}", path.display())]
    Codec {
        name: String,
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// A path segment could not be found while walking a document
    #[error("Failed to resolve reference '{reference}': segment '{segment}' not found after '{consumed}'")]
    ReferenceNotFound {
        reference: String,
        segment: String,
        consumed: String,
    },

    /// A local path that is not valid RFC 6901 syntax
    #[error("Invalid JSON pointer '{pointer}': {reason}")]
    InvalidPointer { pointer: String, reason: String },

    /// A chain of embedded references loops back on itself
    #[error("Circular reference detected: {chain}")]
    CyclicReference { chain: String },

    /// Embedded references nest deeper than allowed
    #[error("Reference '{reference}' exceeds the maximum dereference depth of {max_depth}")]
    DepthExceeded { reference: String, max_depth: usize },
}

impl Error {
    /// Create an unsupported format error listing the accepted extensions
    pub fn unsupported_format(path: impl Into<PathBuf>, expected: &[String]) -> Self {
        let expected = if expected.is_empty() {
            "<none registered>".to_string()
        } else {
            expected
                .iter()
                .map(|ext| format!(".{ext}"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        Self::UnsupportedFormat {
            path: path.into(),
            expected,
        }
    }

    /// Create an empty document error
    pub fn empty_document(path: impl Into<PathBuf>) -> Self {
        Self::EmptyDocument { path: path.into() }
    }

    /// Create an I/O error with path context, mapping `NotFound` to [`Error::FileNotFound`]
    pub fn io_error(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        let path = path.into();
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Io {
                path,
                source: error,
            }
        }
    }

    /// Create a YAML parsing error with path context
    pub fn yaml_parse_error(path: impl Into<PathBuf>, error: serde_yaml::Error) -> Self {
        Self::YamlParse {
            path: path.into(),
            source: error,
        }
    }

    /// Create a JSON parsing error with path context
    pub fn json_parse_error(path: impl Into<PathBuf>, error: serde_json::Error) -> Self {
        Self::JsonParse {
            path: path.into(),
            source: error,
        }
    }

    /// Create an encoding error
    pub fn encode_error(format: impl Into<String>, reason: impl ToString) -> Self {
        Self::Encode {
            format: format.into(),
            reason: reason.to_string(),
        }
    }

    /// Wrap a failure from a custom codec
    pub fn codec_error(name: impl Into<String>, path: &Path, source: anyhow::Error) -> Self {
        Self::Codec {
            name: name.into(),
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a reference-not-found error
    pub fn reference_not_found(
        reference: impl Into<String>,
        segment: impl Into<String>,
        consumed: impl Into<String>,
    ) -> Self {
        Self::ReferenceNotFound {
            reference: reference.into(),
            segment: segment.into(),
            consumed: consumed.into(),
        }
    }

    /// Create an invalid pointer error
    pub fn invalid_pointer(pointer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPointer {
            pointer: pointer.into(),
            reason: reason.into(),
        }
    }

    /// Create a circular reference error from the chain of visited locations
    pub fn cyclic_reference<S: AsRef<str>>(chain: &[S]) -> Self {
        let chain = chain
            .iter()
            .map(|entry| entry.as_ref())
            .collect::<Vec<_>>()
            .join(" -> ");
        Self::CyclicReference { chain }
    }

    /// Create a depth exceeded error
    pub fn depth_exceeded(reference: impl Into<String>, max_depth: usize) -> Self {
        Self::DepthExceeded {
            reference: reference.into(),
            max_depth,
        }
    }

    /// Get the file path associated with this error, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::UnsupportedFormat { path, .. }
            | Self::EmptyDocument { path }
            | Self::FileNotFound { path }
            | Self::Io { path, .. }
            | Self::YamlParse { path, .. }
            | Self::JsonParse { path, .. }
            | Self::Codec { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Whether this error came from walking a path rather than from a file
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ReferenceNotFound { .. })
    }
}
