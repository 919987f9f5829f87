//! Resolver configuration
//!
//! Copyright (c) 2025 Datadesc Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};

/// Key marking an embedded reference object, as in JSON Schema
pub const DEFAULT_REF_KEY: &str = "$ref";

/// Nested dereferences allowed before giving up
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Settings for [`crate::ReferenceResolver`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Mapping key whose string value is treated as a reference when dereferencing
    pub ref_key: String,
    /// Maximum nesting of embedded references followed by `dereference`
    pub max_depth: usize,
}

impl ResolverConfig {
    pub fn with_ref_key(mut self, ref_key: impl Into<String>) -> Self {
        self.ref_key = ref_key.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            ref_key: DEFAULT_REF_KEY.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
