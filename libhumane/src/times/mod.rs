//! Coarse relative time phrases.
//!
//! The distance between two instants, in whole seconds, is looked up in a
//! fixed table of magnitudes ordered by threshold. The first entry whose
//! threshold is strictly greater than the delta wins, and its template is
//! rendered with the scaled delta and a direction label:
//!
//! ```
//! use chrono::{Duration, Utc};
//! use libhumane::times::rel_time;
//!
//! let now = Utc::now();
//! assert_eq!(rel_time(now - Duration::seconds(45), now, "ago", "from now"), "45s ago");
//! assert_eq!(rel_time(now + Duration::days(3), now, "ago", "from now"), "3d from now");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

mod template;
pub use template::{ESCAPE, Piece, Template};

use template::Piece::{Label, Literal, Scaled};

#[cfg(test)]
mod tests;

/// Seconds in a minute.
pub const MINUTE: i64 = 60;
/// Seconds in an hour.
pub const HOUR: i64 = 60 * MINUTE;
/// Seconds in a day.
pub const DAY: i64 = 24 * HOUR;
/// Seconds in a week.
pub const WEEK: i64 = 7 * DAY;
/// Seconds in a (30 day) month.
pub const MONTH: i64 = 30 * DAY;
/// Seconds in a (12 month) year.
pub const YEAR: i64 = 12 * MONTH;
/// Past this, deltas are only reported as "a long time".
pub const LONG_TIME: i64 = 37 * YEAR;

/// Default label for instants before the reference.
pub const PAST_LABEL: &str = "ago";
/// Default label for instants after the reference.
pub const FUTURE_LABEL: &str = "from now";

/// One bucket of the magnitude table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Magnitude {
    /// Exclusive upper bound of the bucket, in seconds.
    pub threshold: i64,
    /// Phrase rendered for deltas in this bucket.
    pub template: Template<'static>,
    /// Seconds per unit for the `%d` placeholder.
    pub divisor: i64,
}

impl Magnitude {
    const fn new(threshold: i64, pieces: &'static [Piece<'static>], divisor: i64) -> Self {
        Self {
            threshold,
            template: Template::from_pieces(pieces),
            divisor,
        }
    }

    /// Renders this bucket's phrase for `delta` seconds.
    pub fn render(&self, delta: i64, label: &str) -> String {
        self.template.render(label, delta / self.divisor)
    }
}

/// Buckets in strictly ascending threshold order.
///
/// Each bucket covers `[previous threshold, threshold)`; the last one ends
/// at `i64::MAX` so every non-negative delta lands somewhere.
pub static MAGNITUDES: [Magnitude; 17] = [
    Magnitude::new(1, &[Literal("now")], 1),
    Magnitude::new(2, &[Literal("1s "), Label], 1),
    Magnitude::new(MINUTE, &[Scaled, Literal("s "), Label], 1),
    Magnitude::new(2 * MINUTE, &[Literal("1m "), Label], 1),
    Magnitude::new(HOUR, &[Scaled, Literal("m "), Label], MINUTE),
    Magnitude::new(2 * HOUR, &[Literal("1h "), Label], 1),
    Magnitude::new(DAY, &[Scaled, Literal("h "), Label], HOUR),
    Magnitude::new(2 * DAY, &[Literal("1d "), Label], 1),
    Magnitude::new(WEEK, &[Scaled, Literal("d "), Label], DAY),
    Magnitude::new(2 * WEEK, &[Literal("1w "), Label], 1),
    Magnitude::new(MONTH, &[Scaled, Literal("w "), Label], WEEK),
    Magnitude::new(2 * MONTH, &[Literal("1m "), Label], 1),
    Magnitude::new(YEAR, &[Scaled, Literal("m "), Label], MONTH),
    Magnitude::new(18 * MONTH, &[Literal("1y "), Label], 1),
    Magnitude::new(2 * YEAR, &[Literal("2y "), Label], 1),
    Magnitude::new(LONG_TIME, &[Scaled, Literal("y "), Label], YEAR),
    Magnitude::new(i64::MAX, &[Literal("~")], 1),
];

/// Returns the bucket for a delta of `delta` seconds.
///
/// Negative deltas fall into the first bucket.
///
/// # Examples
///
/// ```
/// use libhumane::times::{magnitude_for, HOUR};
///
/// assert_eq!(magnitude_for(90 * 60).threshold, 2 * HOUR);
/// ```
pub fn magnitude_for(delta: i64) -> &'static Magnitude {
    let idx = MAGNITUDES.partition_point(|m| m.threshold <= delta);
    &MAGNITUDES[idx.min(MAGNITUDES.len() - 1)]
}

/// Which side of the reference an instant lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// At or before the reference.
    Past,
    /// Strictly after the reference.
    Future,
}

/// The outcome of comparing two instants.
///
/// Rendering it with `Display` produces the phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeTime<'a> {
    pub direction: Direction,
    pub label: &'a str,
    /// Absolute distance in whole seconds.
    pub delta: i64,
    /// `delta` divided by the matched bucket's divisor.
    pub scaled: i64,
    pub magnitude: &'static Magnitude,
}

impl fmt::Display for RelativeTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.magnitude.template.write_to(f, self.label, self.scaled)
    }
}

/// Compares `a` against the reference `b`.
///
/// If `a` is strictly after `b` the result carries `future_label`,
/// otherwise `past_label`. The delta is taken between the whole-second
/// Unix timestamps of the two instants.
pub fn relative<'a>(
    a: &DateTime<Utc>,
    b: &DateTime<Utc>,
    past_label: &'a str,
    future_label: &'a str,
) -> RelativeTime<'a> {
    let (direction, label, delta) = if a > b {
        (Direction::Future, future_label, a.timestamp() - b.timestamp())
    } else {
        (Direction::Past, past_label, b.timestamp() - a.timestamp())
    };

    let magnitude = magnitude_for(delta);
    RelativeTime {
        direction,
        label,
        delta,
        scaled: delta / magnitude.divisor,
        magnitude,
    }
}

/// Formats the distance between `a` and the reference `b` as a phrase.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use libhumane::times::rel_time;
///
/// let then = Utc::now();
/// let later = then + Duration::weeks(3);
/// assert_eq!(rel_time(then, later, "earlier", "later"), "3w earlier");
/// assert_eq!(rel_time(later, then, "earlier", "later"), "3w later");
/// ```
pub fn rel_time(
    a: DateTime<Utc>,
    b: DateTime<Utc>,
    past_label: &str,
    future_label: &str,
) -> String {
    relative(&a, &b, past_label, future_label).to_string()
}

/// Source of the current instant.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Formats how long ago (or how far ahead) `then` is from now.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use libhumane::times::age;
///
/// let then = Utc::now() - Duration::days(3);
/// assert_eq!(age(then), "3d ago");
/// ```
pub fn age(then: DateTime<Utc>) -> String {
    age_with(&SystemClock, then)
}

/// Like [`age`], reading "now" from `clock`.
pub fn age_with<C: Clock + ?Sized>(clock: &C, then: DateTime<Utc>) -> String {
    rel_time(then, clock.now(), PAST_LABEL, FUTURE_LABEL)
}
