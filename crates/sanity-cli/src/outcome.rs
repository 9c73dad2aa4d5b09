//! Normalizer results as printed by the CLI.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use sanity_core::{
    DatePattern, RawScalar, extract_digits, extract_email, normalize_price,
    normalize_price_value, normalize_zip,
};

/// Which normalizer produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizerKind {
    Digits,
    Decimal,
    Date,
    Email,
    Price,
    Zip,
}

impl NormalizerKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Digits => "Digits",
            Self::Decimal => "Decimal",
            Self::Date => "Date",
            Self::Email => "Email",
            Self::Price => "Price",
            Self::Zip => "ZIP",
        }
    }
}

impl fmt::Display for NormalizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A canonical value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutcomeValue {
    Text(String),
    Number(f64),
    Date {
        date: NaiveDate,
        #[serde(skip_serializing_if = "Option::is_none")]
        token: Option<String>,
    },
}

impl fmt::Display for OutcomeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
            Self::Date {
                date,
                token: Some(token),
            } => write!(f, "{date}\t{token}"),
            Self::Date { date, token: None } => write!(f, "{date}"),
        }
    }
}

/// One normalizer run: its input and the canonical value, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<'a> {
    pub kind: NormalizerKind,
    pub input: RawScalar<'a>,
    pub value: Option<OutcomeValue>,
}

impl Outcome<'_> {
    pub fn is_match(&self) -> bool {
        self.value.is_some()
    }

    /// The value as printed in text mode, `None` on no match.
    pub fn render_text(&self) -> Option<String> {
        self.value.as_ref().map(ToString::to_string)
    }
}

/// Maps the empty-string sentinel to no value.
fn non_empty(value: String) -> Option<OutcomeValue> {
    if value.is_empty() {
        None
    } else {
        Some(OutcomeValue::Text(value))
    }
}

pub fn digits(input: RawScalar<'_>, keep_decimal: bool) -> Outcome<'_> {
    Outcome {
        kind: if keep_decimal {
            NormalizerKind::Decimal
        } else {
            NormalizerKind::Digits
        },
        input,
        value: non_empty(extract_digits(input, keep_decimal)),
    }
}

/// Runs the date matcher; `year` pins the fallback year for year-less patterns.
pub fn date<'a>(
    text: &'a str,
    pattern: &DatePattern,
    show_token: bool,
    year: Option<i32>,
) -> Outcome<'a> {
    let found = match year {
        Some(year) => pattern.find_with_year(text, year),
        None => pattern.find(text),
    };
    Outcome {
        kind: NormalizerKind::Date,
        input: RawScalar::Text(text),
        value: found.map(|found| OutcomeValue::Date {
            date: found.date,
            token: show_token.then_some(found.token),
        }),
    }
}

pub fn email(text: &str) -> Outcome<'_> {
    Outcome {
        kind: NormalizerKind::Email,
        input: RawScalar::Text(text),
        value: extract_email(text).map(OutcomeValue::Text),
    }
}

pub fn price(text: &str, as_float: bool) -> Outcome<'_> {
    let value = if as_float {
        normalize_price_value(text).map(OutcomeValue::Number)
    } else {
        non_empty(normalize_price(text))
    };
    Outcome {
        kind: NormalizerKind::Price,
        input: RawScalar::Text(text),
        value,
    }
}

pub fn zip(input: RawScalar<'_>) -> Outcome<'_> {
    Outcome {
        kind: NormalizerKind::Zip,
        input,
        value: Some(OutcomeValue::Text(normalize_zip(input))),
    }
}

/// Runs every normalizer over `text`; the date normalizer only with a pattern.
pub fn scan<'a>(text: &'a str, pattern: Option<&DatePattern>) -> Vec<Outcome<'a>> {
    let input = RawScalar::Text(text);
    let mut outcomes = vec![digits(input, false), digits(input, true)];
    if let Some(pattern) = pattern {
        outcomes.push(date(text, pattern, true, None));
    }
    outcomes.push(email(text));
    outcomes.push(price(text, false));
    outcomes.push(zip(input));
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_empty_is_no_match() {
        assert!(!digits(RawScalar::Text("abc"), false).is_match());
        assert!(digits(RawScalar::Int(5), false).is_match());
    }

    #[test]
    fn test_date_token_display() {
        let pattern = DatePattern::new("%m/%d").unwrap();
        let outcome = date("due 4/20", &pattern, true, Some(2014));
        assert_eq!(outcome.render_text().as_deref(), Some("2014-04-20\t4/20"));
        let outcome = date("due 4/20", &pattern, false, Some(2014));
        assert_eq!(outcome.render_text().as_deref(), Some("2014-04-20"));
    }

    #[test]
    fn test_price_float() {
        let outcome = price("19.5", true);
        assert_eq!(outcome.value, Some(OutcomeValue::Number(19.5)));
        assert!(!price("1.2.3", true).is_match());
    }

    #[test]
    fn test_scan_skips_date_without_pattern() {
        let kinds: Vec<NormalizerKind> = scan("x", None).iter().map(|o| o.kind).collect();
        assert_eq!(
            kinds,
            vec![
                NormalizerKind::Digits,
                NormalizerKind::Decimal,
                NormalizerKind::Email,
                NormalizerKind::Price,
                NormalizerKind::Zip,
            ]
        );
    }
}
