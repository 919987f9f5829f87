//! Reference strings: `[<remote-part>]#[<local-part>]`
//!
//! Copyright (c) 2025 Datadesc Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use crate::pointer::Pointer;
use std::fmt;

/// A reference split into its file part and its local path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    remote: Option<String>,
    local: String,
    pointer: Pointer,
}

impl Reference {
    /// Split on the first `#`. Without a `#` the whole text is the remote part.
    pub fn parse(reference: &str) -> Self {
        let (remote, local) = reference.split_once('#').unwrap_or((reference, ""));

        Self {
            remote: (!remote.is_empty()).then(|| remote.to_string()),
            local: local.to_string(),
            pointer: Pointer::parse(local),
        }
    }

    /// The file part, `None` for references into the current document
    pub fn remote(&self) -> Option<&str> {
        self.remote.as_deref()
    }

    pub fn is_local(&self) -> bool {
        self.remote.is_none()
    }

    /// The raw local part as written, before decoding
    pub fn local(&self) -> &str {
        &self.local
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    /// The same local path with the file part dropped (`#<local-part>`)
    pub fn local_reference(&self) -> String {
        format!("#{}", self.local)
    }

    /// Strict syntax check of the local part, see [`Pointer::validate`]
    pub fn validate(&self) -> Result<()> {
        Pointer::validate(&self.local)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.remote().unwrap_or_default(), self.local)
    }
}

impl From<&str> for Reference {
    fn from(reference: &str) -> Self {
        Self::parse(reference)
    }
}
