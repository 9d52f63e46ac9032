//! humane - human-readable numbers and relative times
//!
//! Two small, independent formatters:
//!
//! - **Digit grouping**: `1234567` becomes `"1,234,567"`, for native,
//!   floating and arbitrary-precision integers alike.
//! - **Relative time**: the gap between two instants becomes a coarse phrase
//!   such as `"45s ago"` or `"3w from now"`.
//!
//! # Quick Start
//!
//! ```
//! use chrono::{Duration, Utc};
//! use libhumane::{age, comma};
//!
//! assert_eq!(comma(10_100_000), "10,100,000");
//! assert_eq!(age(Utc::now() - Duration::hours(2)), "2h ago");
//! ```
//!
//! # Main Types
//!
//! - [`Humane`] - Formatter bundling configured labels and a clock
//! - [`Grouped`] - Digit grouping for every numeric type
//! - [`Template`] - Parsed phrase template used by the magnitude table
//! - [`Config`] - Labels and output settings loaded from YAML
//!
//! All formatting functions are pure; the magnitude table is a `static` and
//! can be read from any number of threads.

#![warn(clippy::all)]

/// Returns the libhumane crate version.
///
/// # Examples
///
/// ```
/// let version = libhumane::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

mod humane;
pub use humane::{Humane, HumaneBuilder};

pub use comma::{Grouped, big_comma, comma, comma_f64};
pub use config::Config;
pub use error::{HumaneError, Result};
pub use times::{Clock, RelativeTime, Template, age, rel_time};

pub mod comma;
pub mod config;
pub mod error;
pub mod size;
pub mod times;
