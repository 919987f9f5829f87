//! YAML codec
//!
//! Decoding goes through `serde_yaml::Value` (merge keys applied) and is then
//! converted into the shared `serde_json::Value` tree. Encoding uses a small
//! block-style emitter because `serde_yaml` has no indentation setting;
//! scalars are still rendered by `serde_yaml` so quoting stays correct.
//!
//! Copyright (c) 2025 Datadesc Team
//! Licensed under the Apache-2.0 license

use super::Codec;
use crate::error::{Error, Result};
use anyhow::Context;
use serde_json::{Map, Value};
use std::path::Path;

/// YAML documents (`.yaml`, `.yml`)
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

impl Codec for YamlCodec {
    fn name(&self) -> &str {
        "YAML"
    }

    fn decode(&self, text: &str, path: &Path) -> Result<Value> {
        let mut yaml_value: serde_yaml::Value =
            serde_yaml::from_str(text).map_err(|e| Error::yaml_parse_error(path, e))?;
        yaml_value
            .apply_merge()
            .map_err(|e| Error::yaml_parse_error(path, e))?;

        serde_json::to_value(yaml_value)
            .context("YAML value has no JSON-compatible representation")
            .map_err(|e| Error::codec_error(self.name(), path, e))
    }

    fn encode(&self, value: &Value, indent: usize) -> Result<String> {
        let mut emitter = Emitter {
            out: String::new(),
            step: indent.max(1),
        };
        emitter.document(value)?;
        Ok(emitter.out)
    }
}

struct Emitter {
    out: String,
    step: usize,
}

impl Emitter {
    fn document(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Object(map) if !map.is_empty() => self.mapping(map, 0, false),
            Value::Array(items) if !items.is_empty() => self.sequence(items, 0, false),
            scalar => {
                self.out.push_str(&inline(scalar)?);
                self.out.push('\n');
                Ok(())
            }
        }
    }

    /// Write mapping entries at `column`. With `continued`, the cursor already
    /// sits at `column` on the current line (after a sequence dash).
    fn mapping(&mut self, map: &Map<String, Value>, column: usize, continued: bool) -> Result<()> {
        for (i, (key, value)) in map.iter().enumerate() {
            if !(continued && i == 0) {
                self.pad(column);
            }
            self.out.push_str(&string_scalar(key)?);
            self.out.push(':');

            match value {
                Value::Object(inner) if !inner.is_empty() => {
                    self.out.push('\n');
                    self.mapping(inner, column + self.step, false)?;
                }
                Value::Array(items) if !items.is_empty() => {
                    self.out.push('\n');
                    self.sequence(items, column + self.step, false)?;
                }
                scalar => {
                    self.out.push(' ');
                    self.out.push_str(&inline(scalar)?);
                    self.out.push('\n');
                }
            }
        }
        Ok(())
    }

    fn sequence(&mut self, items: &[Value], column: usize, continued: bool) -> Result<()> {
        // "- " needs two columns whatever the configured step
        let nested = column + self.step.max(2);

        for (i, item) in items.iter().enumerate() {
            if !(continued && i == 0) {
                self.pad(column);
            }
            self.out.push('-');

            match item {
                Value::Object(inner) if !inner.is_empty() => {
                    self.pad(nested - column - 1);
                    self.mapping(inner, nested, true)?;
                }
                Value::Array(inner) if !inner.is_empty() => {
                    self.pad(nested - column - 1);
                    self.sequence(inner, nested, true)?;
                }
                scalar => {
                    self.out.push(' ');
                    self.out.push_str(&inline(scalar)?);
                    self.out.push('\n');
                }
            }
        }
        Ok(())
    }

    fn pad(&mut self, width: usize) {
        self.out.extend(std::iter::repeat(' ').take(width));
    }
}

/// Single-line rendering of a scalar or empty collection
fn inline(value: &Value) -> Result<String> {
    match value {
        Value::Object(_) => Ok("{}".to_string()),
        Value::Array(_) => Ok("[]".to_string()),
        Value::String(s) => string_scalar(s),
        other => serde_yaml::to_string(other)
            .map(|text| text.trim_end_matches('\n').to_string())
            .map_err(|e| Error::encode_error("YAML", e)),
    }
}

/// Plain or single-quoted when that fits one line, JSON-style double quotes otherwise
fn string_scalar(s: &str) -> Result<String> {
    let rendered = serde_yaml::to_string(s).map_err(|e| Error::encode_error("YAML", e))?;
    let rendered = rendered.trim_end_matches('\n');

    if rendered.contains('\n') {
        serde_json::to_string(s).map_err(|e| Error::encode_error("YAML", e))
    } else {
        Ok(rendered.to_string())
    }
}
