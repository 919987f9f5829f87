//! Shared utilities for command handlers

use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;
use datadesc_core::{DocumentLoader, ReferenceResolver, ResolverConfig};
use std::path::Path;

/// Resolver settings from the config file with command-line overrides applied
pub fn resolver_config(
    config: &Config,
    max_depth: Option<usize>,
    ref_key: Option<&str>,
) -> ResolverConfig {
    let mut resolver = config.resolver.clone();
    if let Some(max_depth) = max_depth {
        resolver = resolver.with_max_depth(max_depth);
    }
    if let Some(ref_key) = ref_key {
        resolver = resolver.with_ref_key(ref_key);
    }
    resolver
}

/// Resolver sharing `loader`'s format registry
pub fn build_resolver(loader: &DocumentLoader, config: ResolverConfig) -> ReferenceResolver {
    ReferenceResolver::with_loader(loader.clone()).with_config(config)
}

/// Warn before a command replaces an existing file
pub fn warn_if_overwriting(output: &mut OutputWriter, path: &Path) -> Result<()> {
    if path.exists() {
        output.warning(&format!("Overwriting existing file {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win_over_config() {
        let mut config = Config::default();
        config.resolver.max_depth = 5;
        config.resolver.ref_key = "ref".to_string();

        let unchanged = resolver_config(&config, None, None);
        assert_eq!(unchanged.max_depth, 5);
        assert_eq!(unchanged.ref_key, "ref");

        let overridden = resolver_config(&config, Some(9), Some("$ref"));
        assert_eq!(overridden.max_depth, 9);
        assert_eq!(overridden.ref_key, "$ref");
    }
}
