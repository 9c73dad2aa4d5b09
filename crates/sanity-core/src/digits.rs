//! Digit extraction.
//!
//! Strips a raw value down to its ASCII digits, optionally keeping one
//! decimal point. A leading `-` on text input is carried over as a sign no
//! matter where the digits were found; numbers never get one.

use crate::scalar::RawScalar;
use crate::text::ascii_digits;

/// Extracts the digits of `value`.
///
/// With `keep_decimal` unset, every `0`-`9` character is kept in order and
/// everything else (including `.` and `-`) is dropped. With `keep_decimal`
/// set, the text is split on `.`: the digits of the first segment form the
/// integer part and the digits of the second segment, when non-empty, form
/// the fractional part. Segments past the second are discarded.
///
/// Decimal mode always yields a well-formed number or nothing: an empty
/// fractional part drops the point (`"19."` gives `"19"`) and an empty
/// integer part becomes `0` (`".5"` gives `"0.5"`).
///
/// The sign comes from the first character of text input only, so
/// `-3.14` as a float gives `"314"` while `"-3.14"` gives `"-314"`. It is
/// applied only when at least one digit survives; a bare `"-"` gives `""`.
///
/// # Examples
///
/// ```
/// use sanity_core::extract_digits;
///
/// assert_eq!(extract_digits("1a2b3c", false), "123");
/// assert_eq!(extract_digits("-3.14.25", true), "-3.14");
/// assert_eq!(extract_digits("-3.14.25", false), "-31425");
/// ```
pub fn extract_digits<'a>(value: impl Into<RawScalar<'a>>, keep_decimal: bool) -> String {
    let value = value.into();
    let text = value.to_text();
    let digits = if keep_decimal {
        decimal_digits(&text)
    } else {
        ascii_digits(&text)
    };
    if digits.is_empty() {
        return digits;
    }
    if matches!(value, RawScalar::Text(raw) if raw.starts_with('-')) {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Integer part and, when present, fractional part of the first two
/// `.`-delimited segments.
fn decimal_digits(text: &str) -> String {
    let mut segments = text.split('.');
    let whole = segments.next().map(ascii_digits).unwrap_or_default();
    let fraction = segments.next().map(ascii_digits).unwrap_or_default();

    match (whole.is_empty(), fraction.is_empty()) {
        (_, true) => whole,
        (true, false) => format!("0.{fraction}"),
        (false, false) => format!("{whole}.{fraction}"),
    }
}
