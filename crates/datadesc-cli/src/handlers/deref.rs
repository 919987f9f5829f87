//! Deref command handler

use super::utils::{build_resolver, resolver_config, warn_if_overwriting};
use crate::cli::DerefArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use datadesc_core::{Document, DocumentLoader};
use tracing::{info, instrument};

/// Handle the deref command
#[instrument(skip(config, output), fields(file = %args.file.display()))]
pub fn handle_deref(args: DerefArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("deref_command", &args.file.display().to_string());
    output.info(&format!("Dereferencing {}", args.file.display()))?;

    let loader = DocumentLoader::new();
    let document = loader.load(&args.file)?;
    let resolver = build_resolver(
        &loader,
        resolver_config(config, args.max_depth, args.ref_key.as_deref()),
    );

    let resolved = resolver.dereference(&document)?;
    let indent = config.indent(args.indent);

    match args.save_to {
        Some(path) => {
            warn_if_overwriting(output, &path)?;
            loader.save(&Document::new(resolved), &path, indent)?;
            info!(path = %path.display(), indent, "Saved dereferenced document");
            output.success(&format!("✓ Wrote dereferenced document to {}", path.display()))
        }
        None => {
            output.set_indent(indent);
            output.data(&resolved)
        }
    }
}
