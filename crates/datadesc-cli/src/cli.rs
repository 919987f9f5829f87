//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// Datadesc CLI - Resolve references across YAML and JSON documents
///
/// Load structured data files, follow JSON-Pointer references between them,
/// inline embedded `$ref` objects and convert between formats.
#[derive(Parser, Debug)]
#[command(
    name = "datadesc",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "DATADESC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a reference against a document and print the target value
    Resolve(ResolveArgs),

    /// Replace every embedded reference object in a document with its target
    Deref(DerefArgs),

    /// Load a document and save it in the format implied by another extension
    Convert(ConvertArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Document the reference is resolved against (YAML or JSON)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Reference of the form `[file]#[/local/path]`
    #[arg(value_name = "REFERENCE")]
    pub reference: String,

    /// Reject local paths that are not well-formed JSON pointers
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the deref command
#[derive(Parser, Debug)]
pub struct DerefArgs {
    /// Document to dereference (YAML or JSON)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write the result to a file instead of stdout
    #[arg(long = "save-to", value_name = "OUTPUT_FILE")]
    pub save_to: Option<PathBuf>,

    /// Spaces per nesting level (defaults to the configured indent)
    #[arg(long)]
    pub indent: Option<usize>,

    /// Maximum nesting of embedded references
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Mapping key that marks an embedded reference
    #[arg(long)]
    pub ref_key: Option<String>,
}

/// Arguments for the convert command
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Source document
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination; its extension picks the output format
    #[arg(value_name = "OUTPUT")]
    pub destination: PathBuf,

    /// Spaces per nesting level (defaults to the configured indent)
    #[arg(long)]
    pub indent: Option<usize>,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
