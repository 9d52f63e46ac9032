//! Byte counts as human-readable sizes.
//!
//! A leaf helper kept next to the grouping and relative time code; it shares
//! nothing with them.

use humansize::{BINARY, DECIMAL, format_size as format_size_human};


/// Formats a byte count using binary units (KiB, MiB).
///
/// # Examples
///
/// ```
/// use libhumane::size::format_size;
///
/// assert_eq!(format_size(1024 * 1024 * 5), "5 MiB");
/// assert_eq!(format_size(1024), "1 KiB");
/// ```
pub fn format_size(size_bytes: u64) -> String {
    format_size_human(size_bytes, BINARY)
}

/// Formats a byte count using decimal units (kB, MB).
///
/// # Examples
///
/// ```
/// use libhumane::size::format_size_decimal;
///
/// assert_eq!(format_size_decimal(1000 * 1000 * 5), "5 MB");
/// assert_eq!(format_size_decimal(1000), "1 kB");
/// ```
pub fn format_size_decimal(size_bytes: u64) -> String {
    format_size_human(size_bytes, DECIMAL)
}
