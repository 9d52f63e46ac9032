use crate::context::AppContext;
use crate::format::{self, Formattable, OutputFormat};
use libhumane::comma;
use libhumane::times::{MAGNITUDES, Magnitude};
use serde::Serialize;
use tabled::Tabled;

/// One row of the magnitude table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct MagnitudeRow {
    /// Smallest delta covered by this bucket (seconds)
    #[tabled(rename = "FROM")]
    pub from_display: String,

    /// Exclusive upper bound (seconds); empty for the last bucket
    #[tabled(rename = "BELOW")]
    pub below_display: String,

    #[tabled(rename = "TEMPLATE")]
    pub template: String,

    #[tabled(rename = "DIVISOR")]
    pub divisor: i64,

    #[tabled(skip)]
    pub from: i64,

    #[tabled(skip)]
    pub below: i64,
}

impl MagnitudeRow {
    fn new(from: i64, magnitude: &Magnitude) -> Self {
        let below_display = if magnitude.threshold == i64::MAX {
            "∞".to_string()
        } else {
            comma(magnitude.threshold)
        };

        Self {
            from_display: comma(from),
            below_display,
            template: magnitude.template.to_string(),
            divisor: magnitude.divisor,
            from,
            below: magnitude.threshold,
        }
    }
}

/// The whole magnitude table in bucket order
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct MagnitudeTable(pub Vec<MagnitudeRow>);

impl Formattable for MagnitudeTable {
    fn format_pretty(&self) -> String {
        use tabled::{Table, settings::Style};
        Table::new(&self.0).with(Style::empty()).to_string()
    }
}

/// Build the table rows with each bucket's lower bound filled in
pub fn magnitude_table() -> MagnitudeTable {
    let mut from = 0;
    let rows = MAGNITUDES
        .iter()
        .map(|magnitude| {
            let row = MagnitudeRow::new(from, magnitude);
            from = magnitude.threshold;
            row
        })
        .collect();
    MagnitudeTable(rows)
}

/// Handle the table command
pub fn handle_table(ctx: &AppContext, fmt: OutputFormat) {
    format::emit(ctx, &magnitude_table(), fmt);
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
