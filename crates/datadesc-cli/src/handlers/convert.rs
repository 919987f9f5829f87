//! Convert command handler

use super::utils::warn_if_overwriting;
use crate::cli::ConvertArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use datadesc_core::DocumentLoader;
use tracing::{debug, instrument};

/// Handle the convert command
#[instrument(skip(config, output), fields(input = %args.input.display(), destination = %args.destination.display()))]
pub fn handle_convert(args: ConvertArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("convert_command");
    output.info(&format!(
        "Converting {} to {}",
        args.input.display(),
        args.destination.display()
    ))?;

    let loader = DocumentLoader::new();

    // Fail on an unknown output extension before touching the input
    let target_codec = loader.registry().codec_for(&args.destination)?;
    let document = loader.load(&args.input)?;
    debug!(format = target_codec.name(), "Encoding document");

    warn_if_overwriting(output, &args.destination)?;
    loader.save(&document, &args.destination, config.indent(args.indent))?;

    output.success(&format!(
        "✓ Wrote {} document to {}",
        target_codec.name(),
        args.destination.display()
    ))
}
