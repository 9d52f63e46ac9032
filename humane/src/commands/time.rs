use crate::context::AppContext;
use crate::format::{self, Formattable, OutputFormat};
use chrono::{DateTime, Utc};
use libhumane::times::Direction;
use libhumane::{Humane, HumaneError, Result};
use serde::Serialize;

/// Result of the age and rel commands
#[derive(Debug, Serialize)]
pub struct RelativeOutput {
    pub instant: DateTime<Utc>,
    pub reference: DateTime<Utc>,
    pub direction: Direction,
    pub delta_seconds: i64,
    pub scaled: i64,
    pub template: String,
    pub phrase: String,
}

impl Formattable for RelativeOutput {
    fn format_pretty(&self) -> String {
        self.phrase.clone()
    }
}

/// Parse an instant given on the command line.
///
/// Accepts RFC 3339 (`2024-05-01T10:00:00Z`), Unix seconds (`1714557600`
/// or `@1714557600`) and the word `now`.
pub fn parse_instant(humane: &Humane, input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();

    if trimmed.eq_ignore_ascii_case("now") {
        return Ok(humane.now());
    }

    let digits = trimmed.strip_prefix('@').unwrap_or(trimmed);
    if let Ok(secs) = digits.parse::<i64>() {
        return DateTime::<Utc>::from_timestamp(secs, 0)
            .ok_or_else(|| HumaneError::parse("timestamp out of range", input));
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| HumaneError::parse_with_source("not an RFC 3339 timestamp", input, e))
}

/// Compare `instant` against `reference` using the configured labels
pub fn describe(
    humane: &Humane,
    instant: DateTime<Utc>,
    reference: DateTime<Utc>,
) -> RelativeOutput {
    let result = humane.relative(&instant, &reference);
    log::debug!(
        "delta {}s matched bucket < {}s (divisor {})",
        result.delta,
        result.magnitude.threshold,
        result.magnitude.divisor
    );

    RelativeOutput {
        instant,
        reference,
        direction: result.direction,
        delta_seconds: result.delta,
        scaled: result.scaled,
        template: result.magnitude.template.to_string(),
        phrase: result.to_string(),
    }
}

/// Describe `instant` relative to now
pub fn age(humane: &Humane, instant: &str) -> Result<RelativeOutput> {
    let instant = parse_instant(humane, instant)?;
    Ok(describe(humane, instant, humane.now()))
}

/// Describe `instant` relative to `reference` (now when omitted)
pub fn rel(humane: &Humane, instant: &str, reference: Option<&str>) -> Result<RelativeOutput> {
    let instant = parse_instant(humane, instant)?;
    let reference = match reference {
        Some(r) => parse_instant(humane, r)?,
        None => humane.now(),
    };
    Ok(describe(humane, instant, reference))
}

/// Handle the age command
pub fn handle_age(ctx: &AppContext, instant: &str, fmt: OutputFormat) {
    let humane = Humane::from_config(&ctx.config);
    finish(ctx, age(&humane, instant), fmt);
}

/// Handle the rel command
pub fn handle_rel(ctx: &AppContext, instant: &str, reference: Option<&str>, fmt: OutputFormat) {
    let humane = Humane::from_config(&ctx.config);
    finish(ctx, rel(&humane, instant, reference), fmt);
}

fn finish(ctx: &AppContext, result: Result<RelativeOutput>, fmt: OutputFormat) {
    match result {
        Ok(output) => format::emit(ctx, &output, fmt),
        Err(e) => {
            format::error(ctx, &e.to_string());
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
