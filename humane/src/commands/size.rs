use crate::context::AppContext;
use crate::format::{self, Formattable, OutputFormat};
use libhumane::Grouped;
use libhumane::size::{format_size, format_size_decimal};
use serde::Serialize;

/// Result of the size command
#[derive(Debug, Serialize)]
pub struct SizeOutput {
    pub bytes: u64,
    pub grouped: String,
    pub human: String,
}

impl Formattable for SizeOutput {
    fn format_pretty(&self) -> String {
        self.human.clone()
    }
}

/// Render a byte count in binary (default) or decimal units
pub fn describe_size(bytes: u64, decimal: bool) -> SizeOutput {
    let human = if decimal {
        format_size_decimal(bytes)
    } else {
        format_size(bytes)
    };

    SizeOutput {
        bytes,
        grouped: bytes.to_grouped(),
        human,
    }
}

/// Handle the size command
pub fn handle_size(ctx: &AppContext, bytes: u64, decimal: bool, fmt: OutputFormat) {
    format::emit(ctx, &describe_size(bytes, decimal), fmt);
}

#[cfg(test)]
#[path = "size_tests.rs"]
mod tests;
