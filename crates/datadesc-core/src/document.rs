//! In-memory documents and their base paths
//!
//! Copyright (c) 2025 Datadesc Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use crate::loader::{DocumentLoader, DEFAULT_INDENT};
use crate::resolver::ReferenceResolver;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Base path of documents that were never loaded from disk
pub const ROOT_BASE_PATH: &str = "/";

/// A parsed YAML/JSON tree plus the path that anchors its relative references
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Option<Value>,
    base_path: PathBuf,
}

impl Document {
    /// In-memory document anchored at the root marker
    pub fn new(root: Value) -> Self {
        Self::with_base_path(root, ROOT_BASE_PATH)
    }

    /// Document without a root value; it can be resolved against but not saved
    pub fn empty() -> Self {
        Self {
            root: None,
            base_path: PathBuf::from(ROOT_BASE_PATH),
        }
    }

    /// In-memory document whose relative references resolve next to `base_path`
    pub fn with_base_path(root: Value, base_path: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root),
            base_path: base_path.into(),
        }
    }

    /// Load a document with the default YAML/JSON loader
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        DocumentLoader::new().load(path.as_ref())
    }

    /// Save with the default loader and indentation
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        DocumentLoader::new().save(self, path.as_ref(), DEFAULT_INDENT)
    }

    /// Resolve a reference with a default resolver
    pub fn resolve(&self, reference: &str) -> Result<Value> {
        ReferenceResolver::new().resolve(self, reference)
    }

    /// Copy of the root with every embedded `$ref` object replaced by its target
    pub fn dereference(&self) -> Result<Value> {
        ReferenceResolver::new().dereference(self)
    }

    pub fn root(&self) -> Option<&Value> {
        self.root.as_ref()
    }

    pub fn root_mut(&mut self) -> Option<&mut Value> {
        self.root.as_mut()
    }

    /// Replace the root value, returning the previous one
    pub fn set_root(&mut self, root: Value) -> Option<Value> {
        self.root.replace(root)
    }

    pub fn into_root(self) -> Option<Value> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for Document {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_in_memory_defaults() {
        let document = Document::new(json!({"a": 1}));
        assert_eq!(document.base_path(), Path::new("/"));
        assert_eq!(document.root(), Some(&json!({"a": 1})));
        assert!(!document.is_empty());

        let empty = Document::default();
        assert!(empty.is_empty());
        assert_eq!(empty.base_path(), Path::new("/"));
    }

    #[test]
    fn test_set_root() {
        let mut document = Document::empty();
        assert_eq!(document.set_root(json!([1])), None);
        assert_eq!(document.set_root(json!([2])), Some(json!([1])));
        if let Some(root) = document.root_mut() {
            root[0] = json!(3);
        }
        assert_eq!(document.into_root(), Some(json!([3])));
    }

    #[test]
    fn test_resolve_convenience() -> Result<()> {
        let document: Document = json!({"a": {"b/c": 1, "d": 2}}).into();
        assert_eq!(document.resolve("#/a/b~1c")?, json!(1));
        assert_eq!(document.resolve("#/a/d")?, json!(2));
        Ok(())
    }
}
