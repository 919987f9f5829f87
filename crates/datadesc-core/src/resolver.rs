//! Reference resolution within and across documents
//!
//! This module handles:
//! - Local references (`#/a/b`) walked against the current document
//! - Remote references (`./other.yaml#/a/b`) loaded relative to the
//!   referencing document's base path
//! - Deep dereferencing of embedded `{"$ref": "..."}` objects, with
//!   circular reference detection and a depth limit
//!
//! Copyright (c) 2025 Datadesc Team
//! Licensed under the Apache-2.0 license

use crate::config::ResolverConfig;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::loader::DocumentLoader;
use crate::paths;
use crate::pointer::Pointer;
use crate::reference::Reference;
use serde_json::{Map, Value};
use tracing::{debug, instrument, trace};

/// Stack of locations being dereferenced, for cycle and depth checks
#[derive(Debug, Clone)]
pub struct ResolverContext {
    /// Locations currently being expanded, outermost first
    pub resolution_stack: Vec<String>,
    /// Maximum stack size
    pub max_depth: usize,
}

impl ResolverContext {
    pub fn new(max_depth: usize) -> Self {
        Self {
            resolution_stack: Vec::new(),
            max_depth,
        }
    }

    /// Enter a location; fails if it is already being expanded or the stack is full
    pub fn push_location(&mut self, location: String, reference: &str) -> Result<()> {
        if self.resolution_stack.contains(&location) {
            let mut chain = self.resolution_stack.clone();
            chain.push(location);
            return Err(Error::cyclic_reference(&chain));
        }

        if self.resolution_stack.len() >= self.max_depth {
            return Err(Error::depth_exceeded(reference, self.max_depth));
        }

        self.resolution_stack.push(location);
        Ok(())
    }

    pub fn pop_location(&mut self) -> Option<String> {
        self.resolution_stack.pop()
    }

    pub fn depth(&self) -> usize {
        self.resolution_stack.len()
    }
}

/// Resolves reference strings against documents, loading remote files on demand
#[derive(Debug, Clone, Default)]
pub struct ReferenceResolver {
    loader: DocumentLoader,
    config: ResolverConfig,
}

impl ReferenceResolver {
    /// Resolver with the default YAML/JSON loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver that loads remote documents through `loader`
    pub fn with_loader(loader: DocumentLoader) -> Self {
        Self {
            loader,
            config: ResolverConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn loader(&self) -> &DocumentLoader {
        &self.loader
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `reference` against `document`.
    ///
    /// A reference without a file part is walked in `document` and never
    /// touches the filesystem. Otherwise the file part is located next to
    /// `document`'s base path, loaded fresh, and the local part is walked in
    /// the loaded document. The result is not scanned for further references.
    #[instrument(level = "debug", skip(self, document), fields(base_path = %document.base_path().display()))]
    pub fn resolve(&self, document: &Document, reference: &str) -> Result<Value> {
        let parsed = Reference::parse(reference);

        match parsed.remote() {
            None => self.resolve_local(document, parsed.pointer(), reference).cloned(),
            Some(remote) => {
                let remote_document = self.load_remote(document, remote)?;
                self.resolve_local(&remote_document, parsed.pointer(), reference)
                    .cloned()
            }
        }
    }

    /// Copy of `document`'s root with every embedded reference object replaced
    /// by its target, recursively. Relative references inside a substituted
    /// value stay anchored to the file they were written in.
    #[instrument(level = "debug", skip_all, fields(base_path = %document.base_path().display()))]
    pub fn dereference(&self, document: &Document) -> Result<Value> {
        let root = document
            .root()
            .ok_or_else(|| Error::empty_document(document.base_path()))?;

        let mut context = ResolverContext::new(self.config.max_depth);
        self.dereference_value(root, document, &mut context)
    }

    fn load_remote(&self, document: &Document, remote: &str) -> Result<Document> {
        let target = paths::resolve_remote(document.base_path(), remote);
        debug!(
            remote,
            from = %document.base_path().display(),
            target = %target.display(),
            "Loading remote document"
        );
        self.loader.load(&target)
    }

    fn resolve_local<'d>(
        &self,
        document: &'d Document,
        pointer: &Pointer,
        reference: &str,
    ) -> Result<&'d Value> {
        let Some(root) = document.root() else {
            return match pointer.segments().first() {
                None => Err(Error::empty_document(document.base_path())),
                Some(first) => Err(Error::reference_not_found(reference, first.as_str(), "")),
            };
        };

        trace!(pointer = %pointer, "Walking local path");
        pointer.walk_in(root, reference)
    }

    fn dereference_value(
        &self,
        value: &Value,
        document: &Document,
        context: &mut ResolverContext,
    ) -> Result<Value> {
        match value {
            Value::Object(map) => {
                if let Some(reference) = map.get(&self.config.ref_key).and_then(Value::as_str) {
                    return self.follow(reference, document, context);
                }

                let mut resolved = Map::with_capacity(map.len());
                for (key, item) in map {
                    resolved.insert(key.clone(), self.dereference_value(item, document, context)?);
                }
                Ok(Value::Object(resolved))
            }
            Value::Array(items) => items
                .iter()
                .map(|item| self.dereference_value(item, document, context))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
            scalar => Ok(scalar.clone()),
        }
    }

    fn follow(
        &self,
        reference: &str,
        document: &Document,
        context: &mut ResolverContext,
    ) -> Result<Value> {
        let parsed = Reference::parse(reference);

        let loaded;
        let target_document = match parsed.remote() {
            None => document,
            Some(remote) => {
                loaded = self.load_remote(document, remote)?;
                &loaded
            }
        };

        let location = format!("{}#{}", target_document.base_path().display(), parsed.pointer());
        trace!(reference, location = %location, depth = context.depth(), "Following embedded reference");
        context.push_location(location, reference)?;

        let target = self.resolve_local(target_document, parsed.pointer(), reference)?;
        let resolved = self.dereference_value(target, target_document, context)?;

        context.pop_location();
        Ok(resolved)
    }
}
