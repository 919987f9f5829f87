//! Output formatting and writing utilities
//!
//! This module formats resolved values in the selected output format
//! (human-readable, JSON, YAML) and writes status messages.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use datadesc_core::{Codec, JsonCodec, YamlCodec};
use serde_json::Value;
use std::io::{self, Write};
use tracing::trace;

/// Trait for turning values into text in a given output format
pub trait OutputFormatter {
    /// Format a value using `indent` spaces per nesting level where the format allows it
    fn format_value(&self, value: &Value, indent: usize) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format_value(&self, value: &Value, indent: usize) -> Result<String> {
        let text = match self {
            OutputFormat::Json => JsonCodec.encode(value, 0)?,
            OutputFormat::JsonPretty => JsonCodec.encode(value, indent.max(1))?,
            OutputFormat::Yaml => YamlCodec.encode(value, indent)?,
            OutputFormat::Human => match value {
                // Bare strings read better unquoted
                Value::String(s) => s.clone(),
                other => YamlCodec.encode(other, indent)?,
            },
        };
        Ok(text)
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    indent: usize,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool, indent: usize) -> Self {
        Self::with_writer(format, use_color, quiet, indent, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        indent: usize,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            indent,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Replace the indent used for data output
    pub fn set_indent(&mut self, indent: usize) {
        self.indent = indent;
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write a value in the configured format
    pub fn data(&mut self, value: &Value) -> Result<()> {
        trace!(format = ?self.format, indent = self.indent, "Outputting data");

        let formatted = self.format.format_value(value, self.indent)?;
        let formatted = formatted.trim_end_matches('\n');
        self.writeln(formatted)
    }
}
