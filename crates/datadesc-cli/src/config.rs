//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON), parsed with the same loader as documents
//! - Command-line arguments, applied on top by the handlers

use crate::error::{Error, Result};
use datadesc_core::{DocumentLoader, ResolverConfig, DEFAULT_INDENT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reference resolution settings
    pub resolver: ResolverConfig,

    /// Output settings
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Spaces per nesting level for printed and saved documents
    pub indent: usize,

    /// Use colored output when the terminal supports it
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let document = DocumentLoader::new().load(path).map_err(|e| {
            Error::config(format!("Failed to load configuration from {}: {}", path.display(), e))
        })?;

        match document.into_root() {
            None | Some(serde_json::Value::Null) => Ok(Self::default()),
            Some(root) => serde_json::from_value(root).map_err(|e| {
                Error::config(format!("Invalid configuration in {}: {}", path.display(), e))
            }),
        }
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if !path.exists() {
                continue;
            }

            match Self::from_file(&path) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded configuration");
                    return Ok(config);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to load configuration");
                }
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".datadesc.yaml"),
            PathBuf::from(".datadesc.yml"),
            PathBuf::from(".datadesc.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let datadesc_dir = config_dir.join("datadesc");
            paths.push(datadesc_dir.join("config.yaml"));
            paths.push(datadesc_dir.join("config.json"));
        }

        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".datadesc.yaml"));
            paths.push(home_dir.join(".datadesc.json"));
        }

        paths
    }

    /// Indent to use when a command does not override it
    pub fn indent(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.output.indent)
    }
}
