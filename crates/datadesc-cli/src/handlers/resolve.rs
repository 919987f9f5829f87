//! Resolve command handler

use super::utils::{build_resolver, resolver_config};
use crate::cli::ResolveArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use datadesc_core::{DocumentLoader, Reference};
use tracing::{debug, info, instrument};

/// Handle the resolve command
#[instrument(skip(config, output), fields(file = %args.file.display(), reference = %args.reference))]
pub fn handle_resolve(args: ResolveArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("resolve_command", &args.reference);
    output.info(&format!(
        "Resolving '{}' against {}",
        args.reference,
        args.file.display()
    ))?;

    let reference = Reference::parse(&args.reference);
    if args.strict {
        debug!("Checking reference syntax");
        reference.validate()?;
    }

    let loader = DocumentLoader::new();
    let document = loader.load(&args.file)?;
    let resolver = build_resolver(&loader, resolver_config(config, None, None));

    let value = resolver.resolve(&document, &args.reference)?;
    info!(remote = reference.remote().unwrap_or(""), "Reference resolved");

    output.data(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::error::Error;
    use crate::output::tests::writer;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn args(file: PathBuf, reference: &str, strict: bool) -> ResolveArgs {
        ResolveArgs {
            file,
            reference: reference.to_string(),
            strict,
        }
    }

    #[test]
    fn test_resolve_remote_value() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.yaml"), "name: a\n").unwrap();
        fs::write(dir.path().join("b.json"), r#"{"value": {"answer": 42}}"#).unwrap();

        let (mut output, buffer) = writer(OutputFormat::Json, false);
        handle_resolve(
            args(dir.path().join("a.yaml"), "./b.json#/value", false),
            &Config::default(),
            &mut output,
        )
        .unwrap();

        assert_eq!(buffer.contents(), "{\"answer\":42}\n");
    }

    #[test]
    fn test_resolve_human_output() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.yaml"), "greeting: hello\n").unwrap();

        let (mut output, buffer) = writer(OutputFormat::Human, false);
        handle_resolve(
            args(dir.path().join("a.yaml"), "#/greeting", false),
            &Config::default(),
            &mut output,
        )
        .unwrap();

        let contents = buffer.contents();
        assert!(contents.starts_with("INFO: Resolving '#/greeting'"));
        assert!(contents.ends_with("\nhello\n"));
    }

    #[test]
    fn test_strict_rejects_malformed_pointer() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.yaml"), "key: 1\n").unwrap();
        let (mut output, _) = writer(OutputFormat::Json, true);

        // Lenient resolution accepts a pointer without the leading slash
        handle_resolve(
            args(dir.path().join("a.yaml"), "#key", false),
            &Config::default(),
            &mut output,
        )
        .unwrap();

        let err = handle_resolve(
            args(dir.path().join("a.yaml"), "#key", true),
            &Config::default(),
            &mut output,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Core(datadesc_core::Error::InvalidPointer { .. })));
        assert_eq!(err.exit_code(), 7);
    }

    #[test]
    fn test_missing_segment() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.yaml"), "key: 1\n").unwrap();
        let (mut output, _) = writer(OutputFormat::Json, true);

        let err = handle_resolve(
            args(dir.path().join("a.yaml"), "#/other", false),
            &Config::default(),
            &mut output,
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 6);
    }
}
