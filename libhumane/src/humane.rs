//! High-level API for humane.
//!
//! [`Humane`] bundles the configured direction labels with a clock, so callers
//! that render many timestamps do not have to thread both through every call.
//! The free functions in [`crate::comma`] and [`crate::times`] remain the
//! building blocks.
//!
//! # Examples
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use libhumane::Humane;
//! use libhumane::times::FixedClock;
//!
//! let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let humane = Humane::builder()
//!     .labels("earlier", "later")
//!     .with_clock(FixedClock(now))
//!     .build();
//!
//! assert_eq!(humane.age(now - Duration::minutes(5)), "5m earlier");
//! assert_eq!(humane.comma(1_234_567), "1,234,567");
//! ```

use crate::comma::{self, Grouped};
use crate::config::{Config, Labels};
use crate::times::{self, Clock, RelativeTime, SystemClock};
use chrono::{DateTime, Utc};
use num_bigint::BigInt;

/// Formatter with resolved labels and a clock.
pub struct Humane {
    labels: Labels,
    clock: Box<dyn Clock + Send + Sync>,
}

impl Humane {
    /// Creates a formatter with default labels and the system clock.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a formatter using the labels from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::builder().with_config(config).build()
    }

    /// Returns a builder for a customised formatter.
    pub fn builder() -> HumaneBuilder {
        HumaneBuilder::new()
    }

    /// Returns the label used for instants before the reference.
    pub fn past_label(&self) -> &str {
        &self.labels.past
    }

    /// Returns the label used for instants after the reference.
    pub fn future_label(&self) -> &str {
        &self.labels.future
    }

    /// Returns the current instant according to the configured clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Groups the digits of a 64-bit integer.
    pub fn comma(&self, value: i64) -> String {
        comma::comma(value)
    }

    /// Groups the digits of an arbitrary-precision integer.
    pub fn big_comma(&self, value: &BigInt) -> String {
        comma::big_comma(value)
    }

    /// Groups the digits of any supported numeric type.
    pub fn group<N: Grouped + ?Sized>(&self, value: &N) -> String {
        value.to_grouped()
    }

    /// Describes `then` relative to the clock's current instant.
    pub fn age(&self, then: DateTime<Utc>) -> String {
        self.rel_time(then, self.clock.now())
    }

    /// Describes `a` relative to the reference `b` with the configured labels.
    pub fn rel_time(&self, a: DateTime<Utc>, b: DateTime<Utc>) -> String {
        self.relative(&a, &b).to_string()
    }

    /// Like [`Humane::rel_time`], returning the full comparison result.
    pub fn relative(&self, a: &DateTime<Utc>, b: &DateTime<Utc>) -> RelativeTime<'_> {
        times::relative(a, b, &self.labels.past, &self.labels.future)
    }
}

impl Default for Humane {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Humane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Humane")
            .field("labels", &self.labels)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Humane`].
pub struct HumaneBuilder {
    labels: Labels,
    clock: Option<Box<dyn Clock + Send + Sync>>,
}

impl HumaneBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            labels: Labels::default(),
            clock: None,
        }
    }

    /// Set both direction labels.
    pub fn labels(mut self, past: &str, future: &str) -> Self {
        self.labels = Labels {
            past: past.to_string(),
            future: future.to_string(),
        };
        self
    }

    /// Take the labels from a loaded configuration.
    pub fn with_config(mut self, config: &Config) -> Self {
        self.labels = config.labels.clone();
        self
    }

    /// Read "now" from `clock` instead of the system clock.
    pub fn with_clock<C: Clock + Send + Sync + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Build the `Humane` instance.
    pub fn build(self) -> Humane {
        Humane {
            labels: self.labels,
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
        }
    }
}

impl Default for HumaneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "humane_tests.rs"]
mod tests;
