use crate::context::AppContext;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt;
use std::io::{self, IsTerminal, Write};

pub use libhumane::config::OutputFormat;

/// Color output choice from `--color`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<&str> for ColorChoice {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColorChoice::Auto => "auto",
            ColorChoice::Always => "always",
            ColorChoice::Never => "never",
        };
        write!(f, "{}", s)
    }
}

/// Parse an output format name, falling back to pretty
pub fn parse_output_format(s: &str) -> OutputFormat {
    match s.to_lowercase().as_str() {
        "json" => OutputFormat::Json,
        "yaml" | "yml" => OutputFormat::Yaml,
        _ => OutputFormat::Pretty,
    }
}

/// Pick the format from `--format`, else the configured one
pub fn resolve_format(ctx: &AppContext, flag: Option<&str>) -> OutputFormat {
    match flag {
        Some(f) => parse_output_format(f),
        None => ctx.config.output.format,
    }
}

/// Check if we should use colors in output
pub fn should_color(ctx: &AppContext) -> bool {
    match ctx.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err()
        }
    }
}

/// Colorize an X mark for errors if colors are enabled
pub fn error_mark(ctx: &AppContext) -> String {
    if should_color(ctx) {
        format!("{}", "✗".red().bold())
    } else {
        "✗".to_string()
    }
}

/// Print an error message to stderr
pub fn error(ctx: &AppContext, message: &str) {
    eprintln!("{} {}", error_mark(ctx), message);
}

/// Trait for types that can be formatted for CLI output
pub trait Formattable: Serialize {
    /// Format the type for pretty (human-readable) output
    fn format_pretty(&self) -> String;
}

/// Format a single item for output
pub fn format_output<T: Formattable>(item: &T, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Pretty => Ok(item.format_pretty()),
        OutputFormat::Json => serde_json::to_string_pretty(item)
            .map_err(|e| format!("Failed to serialize to JSON: {}", e)),
        OutputFormat::Yaml => {
            serde_yaml::to_string(item).map_err(|e| format!("Failed to serialize to YAML: {}", e))
        }
    }
}

/// Write `text` followed by a newline and flush
pub fn write_line<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{}", text)?;
    out.flush()
}

/// Exit status for a failed stdout write: a closed pipe is not an error
pub fn write_exit_code(err: &io::Error) -> i32 {
    if err.kind() == io::ErrorKind::BrokenPipe {
        0
    } else {
        1
    }
}

/// Print a line to stdout, exiting quietly if the reader has gone away
pub fn print_line(text: &str) {
    if let Err(e) = write_line(&mut io::stdout().lock(), text) {
        let code = write_exit_code(&e);
        if code != 0 {
            eprintln!("✗ Failed to write output: {}", e);
        }
        std::process::exit(code);
    }
}

/// Print a formatted item, exiting with status 1 on failure
pub fn emit<T: Formattable>(ctx: &AppContext, item: &T, format: OutputFormat) {
    match format_output(item, format) {
        Ok(output) => print_line(output.trim_end()),
        Err(e) => {
            error(ctx, &format!("Error formatting output: {}", e));
            std::process::exit(1);
        }
    }
}
