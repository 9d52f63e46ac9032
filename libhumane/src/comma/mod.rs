//! Thousands grouping for signed integers.
//!
//! Every variant reduces its input to a sign and the canonical decimal digits
//! of the magnitude, then hands both to a single grouping routine. That keeps
//! the native, floating and arbitrary-precision paths byte-for-byte identical
//! wherever their domains overlap.

use num_bigint::{BigInt, BigUint, Sign};


/// Separator placed between groups of three digits.
pub const SEPARATOR: char = ',';

/// Groups the digits of a 64-bit signed integer.
///
/// # Examples
///
/// ```
/// use libhumane::comma::comma;
///
/// assert_eq!(comma(1000), "1,000");
/// assert_eq!(comma(-10_100_000), "-10,100,000");
/// assert_eq!(comma(999), "999");
/// ```
pub fn comma(value: i64) -> String {
    group(value < 0, &value.unsigned_abs().to_string())
}

/// Groups the digits of a floating-point value.
///
/// The value is truncated toward zero first and the exact integer held by
/// the truncated float is grouped, so large magnitudes show the full decimal
/// expansion of the stored binary value rather than a rounded one.
/// `NaN`, `inf` and `-inf` are returned as-is.
///
/// # Examples
///
/// ```
/// use libhumane::comma::comma_f64;
///
/// assert_eq!(comma_f64(9.223372e18), "9,223,372,000,000,000,000");
/// assert_eq!(comma_f64(-1234.99), "-1,234");
/// assert_eq!(comma_f64(-0.5), "0");
/// ```
pub fn comma_f64(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    let truncated = value.trunc();
    // An integral f64 printed with zero decimals is its exact decimal value.
    group(truncated < 0.0, &format!("{:.0}", truncated.abs()))
}

/// Groups the digits of an arbitrary-precision integer.
///
/// # Examples
///
/// ```
/// use libhumane::comma::big_comma;
/// use num_bigint::BigInt;
///
/// let n: BigInt = "-84889279597249724975972597249849757294578485".parse().unwrap();
/// assert_eq!(
///     big_comma(&n),
///     "-84,889,279,597,249,724,975,972,597,249,849,757,294,578,485"
/// );
/// ```
pub fn big_comma(value: &BigInt) -> String {
    group(value.sign() == Sign::Minus, &value.magnitude().to_string())
}

/// Numeric types that can be rendered with grouped digits.
///
/// # Examples
///
/// ```
/// use libhumane::comma::Grouped;
///
/// assert_eq!(1_234_567u32.to_grouped(), "1,234,567");
/// assert_eq!(i128::MIN.to_grouped(), "-170,141,183,460,469,231,731,687,303,715,884,105,728");
/// ```
pub trait Grouped {
    /// Returns the value as a digit-grouped decimal string.
    fn to_grouped(&self) -> String;
}

macro_rules! impl_grouped_signed {
    ($($t:ty),*) => {
        $(
            impl Grouped for $t {
                fn to_grouped(&self) -> String {
                    group(*self < 0, &self.unsigned_abs().to_string())
                }
            }
        )*
    };
}

macro_rules! impl_grouped_unsigned {
    ($($t:ty),*) => {
        $(
            impl Grouped for $t {
                fn to_grouped(&self) -> String {
                    group(false, &self.to_string())
                }
            }
        )*
    };
}

impl_grouped_signed!(i8, i16, i32, i64, i128, isize);
impl_grouped_unsigned!(u8, u16, u32, u64, u128, usize);

impl Grouped for f32 {
    fn to_grouped(&self) -> String {
        comma_f64(f64::from(*self))
    }
}

impl Grouped for f64 {
    fn to_grouped(&self) -> String {
        comma_f64(*self)
    }
}

impl Grouped for BigInt {
    fn to_grouped(&self) -> String {
        big_comma(self)
    }
}

impl Grouped for BigUint {
    fn to_grouped(&self) -> String {
        group(false, &self.to_string())
    }
}

/// Joins `digits` in chunks of three from the right, most significant first.
///
/// `digits` must be the canonical magnitude: ASCII digits, no sign and no
/// leading zeros other than a lone `"0"`.
fn group(negative: bool, digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }

    let lead = match digits.len() % 3 {
        0 => 3.min(digits.len()),
        n => n,
    };
    let (head, tail) = digits.split_at(lead);
    out.push_str(head);

    for chunk in tail.as_bytes().chunks(3) {
        out.push(SEPARATOR);
        out.extend(chunk.iter().map(|&b| char::from(b)));
    }

    out
}
