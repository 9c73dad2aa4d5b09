//! Property-based tests for the normalizers.
//!
//! Every normalizer must return either a canonical value or its no-match
//! sentinel for arbitrary input, never panic, and be stable when fed its
//! own output.

use std::sync::LazyLock;

use chrono::{Datelike, Local};
use proptest::prelude::*;
use regex::Regex;

use sanity_core::{extract_digits, match_date, normalize_price, normalize_zip};

static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?\d*$").unwrap());
static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap());
static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?\d+\.\d{2}$").unwrap());

/// Free text biased toward the characters the normalizers care about.
fn messy_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Arbitrary text
        ".{0,30}",
        // Numbers with currency, separators, and stray dots
        "[-$0-9., ]{0,20}",
        // Mixed alphanumerics and punctuation
        "[-a-z0-9.@<> ]{0,20}",
    ]
}

proptest! {
    #[test]
    fn digits_are_pure(text in messy_text_strategy()) {
        let digits = extract_digits(text.as_str(), false);
        prop_assert!(DIGITS_RE.is_match(&digits), "{digits:?}");
        prop_assert_ne!(digits.as_str(), "-");
    }

    #[test]
    fn decimal_mode_is_well_formed(text in messy_text_strategy()) {
        let digits = extract_digits(text.as_str(), true);
        prop_assert!(digits.is_empty() || DECIMAL_RE.is_match(&digits), "{digits:?}");
    }

    #[test]
    fn digits_are_idempotent(text in messy_text_strategy()) {
        let once = extract_digits(text.as_str(), false);
        let twice = extract_digits(once.as_str(), false);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn float_digits_are_idempotent(value in any::<f64>()) {
        let once = extract_digits(value, false);
        prop_assert_eq!(extract_digits(once.as_str(), false), once.clone());
    }

    #[test]
    fn numeric_digits_are_unsigned(int in any::<i64>(), float in any::<f64>()) {
        prop_assert!(!extract_digits(int, false).starts_with('-'));
        prop_assert!(!extract_digits(float, true).starts_with('-'));
    }

    #[test]
    fn price_is_canonical(text in messy_text_strategy()) {
        let price = normalize_price(&text);
        prop_assert!(price.is_empty() || PRICE_RE.is_match(&price), "{price:?}");
    }

    #[test]
    fn price_round_trips(text in messy_text_strategy()) {
        let price = normalize_price(&text);
        if !price.is_empty() {
            prop_assert_eq!(normalize_price(&price), price);
        }
    }

    #[test]
    fn zip_has_canonical_length(text in messy_text_strategy()) {
        let zip = normalize_zip(text.as_str());
        prop_assert!(zip.len() == 5 || zip.len() == 10, "{zip:?}");
    }

    #[test]
    fn zip_from_integer_has_canonical_length(value in any::<i64>()) {
        let zip = normalize_zip(value);
        prop_assert!(zip.len() == 5 || zip.len() == 10, "{zip:?}");
    }

    #[test]
    fn missing_year_is_current_year(month in 1u32..=12, day in 1u32..=28, prefix in "[a-z]{0,8}") {
        let text = format!("{prefix} {month}/{day}");
        let date = match_date(&text, "%m/%d").unwrap();
        prop_assert_eq!(date.year(), Local::now().year());
        prop_assert_eq!(date.month(), month);
        prop_assert_eq!(date.day(), day);
    }
}
