//! US ZIP code canonicalization.
//!
//! Up to the first nine digits of the input are kept. Short codes are
//! left-padded with zeros to five digits, and anything between five and
//! nine digits is left-padded to nine and rendered as ZIP+4 (`12345-6789`).

use std::fmt;

use crate::scalar::RawScalar;
use crate::text::{ascii_digits, pad_left};

const ZIP_LEN: usize = 5;
const ZIP_PLUS4_LEN: usize = 9;

/// A canonical five-digit ZIP code with an optional four-digit extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode {
    base: String,
    plus4: Option<String>,
}

impl PostalCode {
    /// The five-digit code.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The four-digit extension, when present.
    pub fn plus4(&self) -> Option<&str> {
        self.plus4.as_deref()
    }

    pub fn is_zip_plus4(&self) -> bool {
        self.plus4.is_some()
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.plus4 {
            Some(plus4) => write!(f, "{}-{plus4}", self.base),
            None => f.write_str(&self.base),
        }
    }
}

/// Parses a raw value into a postal code.
///
/// Every non-digit, a leading `-` included, is punctuation here. Input
/// without any digits becomes `00000`.
pub fn parse_zip<'a>(value: impl Into<RawScalar<'a>>) -> PostalCode {
    let mut digits = ascii_digits(&value.into().to_text());
    digits.truncate(ZIP_PLUS4_LEN);

    let target = if digits.len() <= ZIP_LEN {
        ZIP_LEN
    } else {
        ZIP_PLUS4_LEN
    };
    let mut padded = pad_left(&digits, '0', target);

    if padded.len() == ZIP_PLUS4_LEN {
        let plus4 = padded.split_off(ZIP_LEN);
        PostalCode {
            base: padded,
            plus4: Some(plus4),
        }
    } else {
        PostalCode {
            base: padded,
            plus4: None,
        }
    }
}

/// Canonicalizes a raw value to `12345` or `12345-6789`.
///
/// # Examples
///
/// ```
/// use sanity_core::normalize_zip;
///
/// assert_eq!(normalize_zip("0210"), "00210");
/// assert_eq!(normalize_zip("9021012"), "00902-1012");
/// assert_eq!(normalize_zip("90210-12341234"), "90210-1234");
/// ```
pub fn normalize_zip<'a>(value: impl Into<RawScalar<'a>>) -> String {
    parse_zip(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_digits() {
        assert_eq!(normalize_zip(90210), "90210");
        assert_eq!(normalize_zip("90210"), "90210");
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(normalize_zip("90210  "), "90210");
        assert_eq!(normalize_zip("   90210"), "90210");
        assert_eq!(normalize_zip("   90210   "), "90210");
    }

    #[test]
    fn test_short_codes_are_padded() {
        assert_eq!(normalize_zip("0210"), "00210");
        assert_eq!(normalize_zip(210), "00210");
    }

    #[test]
    fn test_zip_plus4() {
        assert_eq!(normalize_zip("902101234"), "90210-1234");
        assert_eq!(normalize_zip("90210-1234"), "90210-1234");
        assert_eq!(normalize_zip("9021012"), "00902-1012");
    }

    #[test]
    fn test_excess_digits_truncated() {
        assert_eq!(normalize_zip("90210-12341234"), "90210-1234");
        assert_eq!(normalize_zip("9021012341234"), "90210-1234");
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(normalize_zip(RawScalar::Null), "00000");
        assert_eq!(normalize_zip("n/a"), "00000");
    }

    #[test]
    fn test_leading_dash_is_not_a_sign() {
        assert_eq!(normalize_zip("-90210"), "90210");
        assert_eq!(normalize_zip(-210), "00210");
    }

    #[test]
    fn test_parts() {
        let zip = parse_zip("90210-1234");
        assert_eq!(zip.base(), "90210");
        assert_eq!(zip.plus4(), Some("1234"));
        assert!(zip.is_zip_plus4());

        let zip = parse_zip(210);
        assert_eq!(zip.base(), "00210");
        assert_eq!(zip.plus4(), None);
    }
}
