//! Format dispatch by file extension
//!
//! A [`FormatRegistry`] maps lowercase extensions to [`Codec`] implementations.
//! The loader consults it for every read and write; nothing else in the crate
//! knows which formats exist.
//!
//! Copyright (c) 2025 Datadesc Team
//! Licensed under the Apache-2.0 license

mod json;
mod yaml;

pub use json::JsonCodec;
pub use yaml::YamlCodec;

use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Decoder/encoder pair for one document format
pub trait Codec: Send + Sync {
    /// Human-readable format name used in logs and errors
    fn name(&self) -> &str;

    /// Decode file text into a value; `path` is only used for error context
    fn decode(&self, text: &str, path: &Path) -> Result<Value>;

    /// Encode a value as text using `indent` spaces per nesting level
    fn encode(&self, value: &Value, indent: usize) -> Result<String>;
}

/// Registry of codecs keyed by file extension
#[derive(Clone)]
pub struct FormatRegistry {
    codecs: BTreeMap<String, Arc<dyn Codec>>,
}

impl FormatRegistry {
    /// An empty registry; every path is unsupported until codecs are registered
    pub fn empty() -> Self {
        Self {
            codecs: BTreeMap::new(),
        }
    }

    /// Registry with YAML (`.yaml`, `.yml`) and JSON (`.json`) codecs
    pub fn with_defaults() -> Self {
        let yaml: Arc<dyn Codec> = Arc::new(YamlCodec);
        let json: Arc<dyn Codec> = Arc::new(JsonCodec);

        let mut registry = Self::empty();
        registry.register_shared("yaml", Arc::clone(&yaml));
        registry.register_shared("yml", yaml);
        registry.register_shared("json", json);
        registry
    }

    /// Register (or replace) the codec for an extension
    pub fn register<C: Codec + 'static>(&mut self, extension: &str, codec: C) -> &mut Self {
        self.register_shared(extension, Arc::new(codec))
    }

    /// Register a codec instance shared between several extensions
    pub fn register_shared(&mut self, extension: &str, codec: Arc<dyn Codec>) -> &mut Self {
        let extension = normalize_extension(extension);
        tracing::trace!(extension = %extension, codec = codec.name(), "Registering codec");
        self.codecs.insert(extension, codec);
        self
    }

    /// Look up the codec for a file path by its extension
    pub fn codec_for(&self, path: &Path) -> Result<Arc<dyn Codec>> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.codecs.get(&normalize_extension(ext)))
            .cloned()
            .ok_or_else(|| Error::unsupported_format(path, &self.extensions()))
    }

    /// Whether a path has a registered extension
    pub fn supports(&self, path: &Path) -> bool {
        self.codec_for(path).is_ok()
    }

    /// Registered extensions, sorted
    pub fn extensions(&self) -> Vec<String> {
        self.codecs.keys().cloned().collect()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.codecs.iter().map(|(ext, codec)| (ext, codec.name())))
            .finish()
    }
}

fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct UpperCodec;

    impl Codec for UpperCodec {
        fn name(&self) -> &str {
            "upper"
        }

        fn decode(&self, text: &str, _path: &Path) -> Result<Value> {
            Ok(Value::String(text.trim().to_uppercase()))
        }

        fn encode(&self, value: &Value, _indent: usize) -> Result<String> {
            Ok(value.as_str().unwrap_or_default().to_lowercase())
        }
    }

    #[test]
    fn test_default_extensions() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(registry.extensions(), ["json", "yaml", "yml"]);

        assert_eq!(registry.codec_for(Path::new("a.yaml")).unwrap().name(), "YAML");
        assert_eq!(registry.codec_for(Path::new("a.yml")).unwrap().name(), "YAML");
        assert_eq!(registry.codec_for(Path::new("a.json")).unwrap().name(), "JSON");
        assert_eq!(registry.codec_for(Path::new("A.YML")).unwrap().name(), "YAML");
    }

    #[test]
    fn test_unsupported_extensions() {
        let registry = FormatRegistry::with_defaults();
        for path in ["config.toml", "config", "archive.yaml.bak", ".yaml/dir"] {
            let err = registry.codec_for(Path::new(path)).err();
            assert!(
                matches!(err, Some(Error::UnsupportedFormat { .. })),
                "expected unsupported format for {path}"
            );
        }
        assert!(!FormatRegistry::empty().supports(Path::new("a.json")));
    }

    #[test]
    fn test_register_custom_codec() -> Result<()> {
        let mut registry = FormatRegistry::with_defaults();
        registry.register(".UP", UpperCodec);

        assert!(registry.supports(Path::new("shout.up")));
        let codec = registry.codec_for(Path::new("shout.up"))?;
        assert_eq!(codec.decode("hello\n", Path::new("shout.up"))?, json!("HELLO"));
        assert_eq!(codec.encode(&json!("HELLO"), 2)?, "hello");

        Ok(())
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = FormatRegistry::with_defaults();
        registry.register("json", UpperCodec);
        assert_eq!(registry.codec_for(Path::new("a.json")).unwrap().name(), "upper");
        assert_eq!(registry.extensions().len(), 3);
    }
}
