//! Datadesc Core - YAML/JSON documents with cross-file references
//!
//! This crate loads structured data files, resolves JSON-Pointer style
//! references within and across them, and writes documents back out.
//!
//! ## Features
//!
//! - **Format Registry**: Extension-based codec selection, YAML and JSON built in
//! - **References**: `[<file>]#[<local path>]` strings resolved relative to the
//!   referencing document
//! - **Deep Dereferencing**: Inline every embedded `{"$ref": ...}` object with
//!   cycle detection and a depth limit
//! - **Indented Output**: Configurable indentation for both YAML and JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use datadesc_core::Document;
//! use serde_json::json;
//!
//! let document = Document::new(json!({
//!     "definitions": {
//!         "path/with/slashes": {"type": "string"}
//!     },
//!     "user": {"$ref": "#/definitions/path~1with~1slashes"}
//! }));
//!
//! let target = document.resolve("#/definitions/path~1with~1slashes").unwrap();
//! assert_eq!(target, json!({"type": "string"}));
//!
//! let inlined = document.dereference().unwrap();
//! assert_eq!(inlined["user"], json!({"type": "string"}));
//! ```
//!
//! ## Reference Semantics
//!
//! - The text before the first `#` names a file, relative to the directory
//!   of the referencing document; no file part means the current document
//! - The local part is split on `/`, empty segments are skipped, and each
//!   segment is decoded (`~1` to `/`, then `~0` to `~`)
//! - Sequence segments must be plain non-negative integers
//!
//! Copyright (c) 2025 Datadesc Team
//! Licensed under the Apache-2.0 license

pub mod codec;
pub mod config;
pub mod document;
pub mod error;
pub mod loader;
pub mod paths;
pub mod pointer;
pub mod reference;
pub mod resolver;

// Re-export commonly used types for convenience
pub use codec::{Codec, FormatRegistry, JsonCodec, YamlCodec};
pub use config::{ResolverConfig, DEFAULT_MAX_DEPTH, DEFAULT_REF_KEY};
pub use document::{Document, ROOT_BASE_PATH};
pub use error::{Error, Result};
pub use loader::{DocumentLoader, DEFAULT_INDENT};
pub use pointer::{escape_segment, unescape_segment, Pointer};
pub use reference::Reference;
pub use resolver::{ReferenceResolver, ResolverContext};
