//! Loading documents from disk and writing them back
//!
//! The format is picked from the file extension alone, through the
//! [`FormatRegistry`]. A loaded document remembers its absolute path so that
//! relative references inside it resolve next to the file, whatever the
//! process working directory is later on.
//!
//! Copyright (c) 2025 Datadesc Team
//! Licensed under the Apache-2.0 license

use crate::codec::FormatRegistry;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::paths;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Indentation used when the caller does not pick one
pub const DEFAULT_INDENT: usize = 2;

/// Reads and writes documents using a shared format registry
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    registry: Arc<FormatRegistry>,
}

impl DocumentLoader {
    /// Loader for YAML and JSON
    pub fn new() -> Self {
        Self::with_registry(FormatRegistry::with_defaults())
    }

    /// Loader backed by a custom registry
    pub fn with_registry(registry: FormatRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Read and decode `path`; the document's base path is `path` made absolute
    #[instrument(level = "debug", skip_all, fields(path = %path.display()))]
    pub fn load(&self, path: &Path) -> Result<Document> {
        let codec = self.registry.codec_for(path)?;
        let text = std::fs::read_to_string(path).map_err(|e| Error::io_error(path, e))?;
        let root = codec.decode(&text, path)?;
        let base_path = paths::absolutize(path)?;

        debug!(
            format = codec.name(),
            base_path = %base_path.display(),
            bytes = text.len(),
            "Loaded document"
        );

        Ok(Document::with_base_path(root, base_path))
    }

    /// Decode `text` as if it had been read from `path`
    pub fn load_str(&self, text: &str, path: &Path) -> Result<Document> {
        let codec = self.registry.codec_for(path)?;
        let root = codec.decode(text, path)?;
        Ok(Document::with_base_path(root, paths::absolutize(path)?))
    }

    /// Encode `value` in the format implied by `path`
    pub fn encode(&self, value: &Value, path: &Path, indent: usize) -> Result<String> {
        self.registry.codec_for(path)?.encode(value, indent)
    }

    /// Serialize the document's root in the format implied by `path` and overwrite the file
    ///
    /// A document without a root, or whose root is null (an empty YAML file),
    /// has nothing to save and fails with [`Error::EmptyDocument`].
    #[instrument(level = "debug", skip_all, fields(path = %path.display(), indent = indent))]
    pub fn save(&self, document: &Document, path: &Path, indent: usize) -> Result<()> {
        let codec = self.registry.codec_for(path)?;
        let root = match document.root() {
            None | Some(Value::Null) => return Err(Error::empty_document(path)),
            Some(root) => root,
        };

        let text = codec.encode(root, indent)?;
        std::fs::write(path, &text).map_err(|e| Error::io_error(path, e))?;

        debug!(format = codec.name(), indent, bytes = text.len(), "Saved document");
        Ok(())
    }
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_yaml_and_json() -> Result<()> {
        let dir = tempdir().unwrap();
        let yaml_path = dir.path().join("doc.yml");
        let json_path = dir.path().join("doc.json");
        fs::write(&yaml_path, "defs:\n  widget: 3\n").unwrap();
        fs::write(&json_path, r#"{"defs": {"widget": 4}}"#).unwrap();

        let loader = DocumentLoader::new();
        let yaml = loader.load(&yaml_path)?;
        let json = loader.load(&json_path)?;

        assert_eq!(yaml.root(), Some(&json!({"defs": {"widget": 3}})));
        assert_eq!(json.root(), Some(&json!({"defs": {"widget": 4}})));
        assert_eq!(yaml.base_path(), paths::normalize(&yaml_path));

        Ok(())
    }

    #[test]
    fn test_load_unsupported_extension_before_reading() {
        let loader = DocumentLoader::new();
        let err = loader.load(Path::new("/does/not/exist/config.toml")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));

        let err = loader.load(Path::new("/does/not/exist/Makefile")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        let err = DocumentLoader::new().load(&missing).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { ref path } if *path == missing));
    }

    #[test]
    fn test_save_round_trip_across_formats() -> Result<()> {
        let dir = tempdir().unwrap();
        let base = dir.path().join("base.yaml");
        let out = dir.path().join("out.json");
        fs::write(&base, "{x: 1}\n").unwrap();

        let loader = DocumentLoader::new();
        let original = loader.load(&base)?;
        loader.save(&original, &out, DEFAULT_INDENT)?;
        let reloaded = loader.load(&out)?;

        assert_eq!(reloaded.root(), original.root());
        assert_eq!(fs::read_to_string(&out).unwrap(), "{\n  \"x\": 1\n}");

        Ok(())
    }

    #[test]
    fn test_save_indent_applies_to_yaml() -> Result<()> {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out.yaml");
        let document = Document::new(json!({"a": {"b": 1}}));

        DocumentLoader::new().save(&document, &out, 4)?;
        assert_eq!(fs::read_to_string(&out).unwrap(), "a:\n    b: 1\n");

        Ok(())
    }

    #[test]
    fn test_save_errors() {
        let dir = tempdir().unwrap();
        let loader = DocumentLoader::new();

        let err = loader
            .save(&Document::new(json!({})), &dir.path().join("config.toml"), 2)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));

        let err = loader
            .save(&Document::empty(), &dir.path().join("out.yaml"), 2)
            .unwrap_err();
        assert!(matches!(err, Error::EmptyDocument { .. }));
        assert!(!dir.path().join("out.yaml").exists());
    }

    #[test]
    fn test_save_refuses_null_root() -> Result<()> {
        let dir = tempdir().unwrap();
        let empty = dir.path().join("empty.yaml");
        fs::write(&empty, "").unwrap();

        let loader = DocumentLoader::new();
        let document = loader.load(&empty)?;
        assert_eq!(document.root(), Some(&Value::Null));

        let out = dir.path().join("out.json");
        let err = loader.save(&document, &out, 2).unwrap_err();
        assert!(matches!(err, Error::EmptyDocument { ref path } if *path == out));
        assert!(!out.exists());

        let out = dir.path().join("n.yaml");
        let err = loader.save(&Document::new(Value::Null), &out, 2).unwrap_err();
        assert!(matches!(err, Error::EmptyDocument { .. }));
        assert!(!out.exists());

        Ok(())
    }

    #[test]
    fn test_load_str_uses_hint_path() -> Result<()> {
        let loader = DocumentLoader::new();
        let document = loader.load_str("a: [1, 2]", Path::new("/virtual/doc.yaml"))?;
        assert_eq!(document.base_path(), Path::new("/virtual/doc.yaml"));
        assert_eq!(document.root(), Some(&json!({"a": [1, 2]})));

        assert!(loader.load_str("{}", Path::new("doc.ini")).is_err());
        Ok(())
    }
}
