//! Price canonicalization.
//!
//! Canonical prices are `dollars.cents` with exactly two cent digits and an
//! optional leading `-`. Currency symbols, thousands separators, and any
//! other non-digit characters are dropped. Only `.` is recognized as a
//! decimal point; more than one makes the input invalid.

use std::fmt;

use tracing::trace;

use crate::text::ascii_digits;

/// A price split into sign, whole dollars, and two cent digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    negative: bool,
    dollars: String,
    cents: String,
}

impl Price {
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn dollars(&self) -> &str {
        &self.dollars
    }

    /// Always two digits.
    pub fn cents(&self) -> &str {
        &self.cents
    }

    /// Floating-point value of the canonical form.
    pub fn to_f64(&self) -> Option<f64> {
        self.to_string().parse().ok()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        write!(f, "{}.{}", self.dollars, self.cents)
    }
}

/// Parses a price-like string.
///
/// Returns `None` for blank input and for input with more than one `.`.
pub fn parse_price(value: &str) -> Option<Price> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut parts = trimmed.split('.');
    let dollars_part = parts.next().unwrap_or_default().trim();
    let cents_part = parts.next().map(str::trim);
    if parts.next().is_some() {
        trace!(len = value.len(), "price has more than one decimal point");
        return None;
    }

    let mut dollars = ascii_digits(dollars_part);
    if dollars.is_empty() {
        dollars.push('0');
    }
    let cents = normalize_cents(cents_part.map(ascii_digits).unwrap_or_default());

    Some(Price {
        negative: dollars_part.starts_with('-'),
        dollars,
        cents,
    })
}

/// Truncates or right-pads cent digits to exactly two.
fn normalize_cents(mut cents: String) -> String {
    match cents.len() {
        0 => "00".to_string(),
        1 => {
            cents.push('0');
            cents
        }
        2 => cents,
        _ => {
            cents.truncate(2);
            cents
        }
    }
}

/// Canonicalizes a price-like string to `dollars.cents`.
///
/// Returns an empty string when there is no canonical value.
///
/// # Examples
///
/// ```
/// use sanity_core::normalize_price;
///
/// assert_eq!(normalize_price("$19.95"), "19.95");
/// assert_eq!(normalize_price("19."), "19.00");
/// assert_eq!(normalize_price(".19"), "0.19");
/// assert_eq!(normalize_price("19.5.34"), "");
/// ```
pub fn normalize_price(value: &str) -> String {
    parse_price(value)
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// Canonicalizes a price-like string and converts it to a float.
///
/// Returns `None` whenever [`normalize_price`] yields no value.
pub fn normalize_price_value(value: &str) -> Option<f64> {
    parse_price(value)?.to_f64()
}
