use crate::context::AppContext;
use crate::format::{self, Formattable, OutputFormat};
use libhumane::{HumaneError, Result, big_comma, comma_f64};
use num_bigint::BigInt;
use serde::Serialize;

/// How the input was interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberKind {
    Integer,
    Float,
}

/// Result of the comma command
#[derive(Debug, Serialize)]
pub struct CommaOutput {
    pub input: String,
    pub kind: NumberKind,
    pub grouped: String,
}

impl Formattable for CommaOutput {
    fn format_pretty(&self) -> String {
        self.grouped.clone()
    }
}

/// Group the digits of `input`.
///
/// Integers of any size go through the arbitrary-precision path; anything
/// else that parses as a float is truncated toward zero first.
pub fn group_input(input: &str) -> Result<CommaOutput> {
    let trimmed = input.trim();

    if let Ok(n) = trimmed.parse::<BigInt>() {
        log::debug!("{:?} parsed as integer", trimmed);
        return Ok(CommaOutput {
            input: input.to_string(),
            kind: NumberKind::Integer,
            grouped: big_comma(&n),
        });
    }

    match trimmed.parse::<f64>() {
        Ok(value) => {
            log::debug!("{:?} parsed as float {}", trimmed, value);
            Ok(CommaOutput {
                input: input.to_string(),
                kind: NumberKind::Float,
                grouped: comma_f64(value),
            })
        }
        Err(e) => Err(HumaneError::parse_with_source("not a number", input, e)),
    }
}

/// Handle the comma command
pub fn handle_comma(ctx: &AppContext, value: &str, fmt: OutputFormat) {
    match group_input(value) {
        Ok(output) => format::emit(ctx, &output, fmt),
        Err(e) => {
            format::error(ctx, &e.to_string());
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "comma_tests.rs"]
mod tests;
