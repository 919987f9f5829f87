//! JSON-Pointer style local paths
//!
//! A local path is split on `/`, empty segments are dropped and every
//! remaining segment is decoded independently (`~1` to `/`, then `~0` to
//! `~`). Splitting happens before decoding, so a decoded `/` never acts as
//! a delimiter and `~01` decodes to `~1`.
//!
//! Copyright (c) 2025 Datadesc Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use serde_json::Value;
use std::fmt;

/// Decode a single pointer segment
pub fn unescape_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

/// Encode a key so it can be embedded as one pointer segment
pub fn escape_segment(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

/// A parsed local path: the decoded segments walked from a document root
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pointer {
    segments: Vec<String>,
}

impl Pointer {
    /// The empty pointer, addressing the whole document
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse the local part of a reference (the text after `#`)
    pub fn parse(local: &str) -> Self {
        let segments = local
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(unescape_segment)
            .collect();
        Self { segments }
    }

    /// Build a pointer from already decoded segments
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Decoded segments in walk order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append a decoded segment
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Walk `root` segment by segment
    pub fn walk<'v>(&self, root: &'v Value) -> Result<&'v Value> {
        self.walk_in(root, &format!("#{self}"))
    }

    /// Walk `root`, reporting failures against the full `reference` text
    pub(crate) fn walk_in<'v>(&self, root: &'v Value, reference: &str) -> Result<&'v Value> {
        let mut current = root;

        for (depth, segment) in self.segments.iter().enumerate() {
            let next = match current {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => parse_index(segment).and_then(|index| items.get(index)),
                _ => None,
            };

            current = next.ok_or_else(|| {
                let consumed = Pointer::from_segments(self.segments[..depth].iter().cloned());
                tracing::debug!(
                    reference,
                    segment = %segment,
                    consumed = %consumed,
                    "Pointer segment not found"
                );
                Error::reference_not_found(reference, segment.as_str(), consumed.to_string())
            })?;
        }

        Ok(current)
    }

    /// Strict RFC 6901 syntax check: leading `/` and only `~0`/`~1` escapes
    pub fn validate(local: &str) -> Result<()> {
        if local.is_empty() {
            return Ok(());
        }

        if !local.starts_with('/') {
            return Err(Error::invalid_pointer(
                local,
                "JSON pointer must start with '/' or be empty",
            ));
        }

        for segment in local.split('/').skip(1) {
            let mut chars = segment.chars().peekable();
            while let Some(ch) = chars.next() {
                if ch == '~' {
                    match chars.peek() {
                        Some('0') | Some('1') => {
                            chars.next();
                        }
                        _ => {
                            return Err(Error::invalid_pointer(
                                local,
                                "Invalid escape sequence in JSON pointer",
                            ));
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", escape_segment(segment))?;
        }
        Ok(())
    }
}

impl From<&str> for Pointer {
    fn from(local: &str) -> Self {
        Self::parse(local)
    }
}

/// Sequence indices are plain base-10 integers without sign or leading zeros
fn parse_index(segment: &str) -> Option<usize> {
    let well_formed = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));

    if well_formed {
        segment.parse().ok()
    } else {
        None
    }
}
