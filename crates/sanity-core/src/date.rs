//! Date token matching.
//!
//! Scans the space-separated tokens of a string for the first one that
//! parses under a strftime-style pattern (`%m/%d/%Y`, `%m.%d`, ...). A
//! token must be consumed entirely by the pattern to count as a match.
//!
//! Patterns without a year field resolve to the current calendar year at
//! call time, so `"4/20"` under `%m/%d` is April 20th of this year. A
//! missing month or day is 1.

use std::fmt;
use std::str::FromStr;

use chrono::format::{self, Fixed, Item, Numeric, Parsed, StrftimeItems};
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{Result, SanityError};

/// A validated date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    pattern: String,
    fields: DateFields,
}

/// Which calendar fields a pattern supplies on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct DateFields {
    year: bool,
    month: bool,
    day: bool,
    /// Ordinal, week, or timestamp fields; month and day then come from them.
    derived: bool,
}

impl DateFields {
    fn record(&mut self, item: &Item<'_>) {
        match item {
            Item::Numeric(numeric, _) => match numeric {
                Numeric::Year
                | Numeric::YearDiv100
                | Numeric::YearMod100
                | Numeric::IsoYear
                | Numeric::IsoYearDiv100
                | Numeric::IsoYearMod100 => self.year = true,
                Numeric::Month => self.month = true,
                Numeric::Day => self.day = true,
                Numeric::Ordinal
                | Numeric::WeekFromSun
                | Numeric::WeekFromMon
                | Numeric::IsoWeek => self.derived = true,
                Numeric::Timestamp => {
                    self.year = true;
                    self.derived = true;
                }
                _ => {}
            },
            Item::Fixed(Fixed::ShortMonthName | Fixed::LongMonthName) => self.month = true,
            Item::Fixed(Fixed::RFC2822 | Fixed::RFC3339) => {
                self.year = true;
                self.month = true;
                self.day = true;
            }
            _ => {}
        }
    }
}

/// A date found in free text together with the token it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateMatch {
    pub date: NaiveDate,
    pub token: String,
}

impl DatePattern {
    /// Validates `pattern` and records which calendar fields it carries.
    ///
    /// # Errors
    ///
    /// Returns [`SanityError::InvalidDatePattern`] when the pattern contains
    /// an unknown or truncated specifier.
    pub fn new(pattern: &str) -> Result<Self> {
        let mut fields = DateFields::default();
        for item in StrftimeItems::new(pattern) {
            if let Item::Error = item {
                return Err(SanityError::InvalidDatePattern {
                    pattern: pattern.to_string(),
                    reason: "unsupported or incomplete format specifier".to_string(),
                });
            }
            fields.record(&item);
        }
        Ok(Self {
            pattern: pattern.to_string(),
            fields,
        })
    }

    /// The pattern text as supplied.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Whether the pattern supplies its own year.
    pub fn has_year(&self) -> bool {
        self.fields.year
    }

    /// Parses a single token, using `fallback_year` when the pattern has no
    /// year field. A missing month or day defaults to 1, so `%m/%Y` reads
    /// `"04/2014"` as April 1st. Returns `None` unless the whole token
    /// matches and forms a real calendar date.
    pub fn parse_token(&self, token: &str, fallback_year: i32) -> Option<NaiveDate> {
        let mut parsed = Parsed::new();
        format::parse(&mut parsed, token, StrftimeItems::new(&self.pattern)).ok()?;
        let fields = self.fields;
        if !fields.year {
            parsed.set_year(i64::from(fallback_year)).ok()?;
        }
        if !fields.derived {
            if !fields.month {
                parsed.set_month(1).ok()?;
            }
            if !fields.day {
                parsed.set_day(1).ok()?;
            }
        }
        parsed.to_naive_date().ok()
    }

    /// Finds the first token of `text` that parses, resolving a missing year
    /// to the current local calendar year.
    pub fn find(&self, text: &str) -> Option<DateMatch> {
        self.find_with_year(text, Local::now().year())
    }

    /// Finds the first token of `text` that parses, resolving a missing year
    /// to `fallback_year`.
    pub fn find_with_year(&self, text: &str, fallback_year: i32) -> Option<DateMatch> {
        for (token_index, token) in text.split(' ').enumerate() {
            match self.parse_token(token, fallback_year) {
                Some(date) => {
                    return Some(DateMatch {
                        date,
                        token: token.to_string(),
                    });
                }
                None => trace!(
                    pattern = %self.pattern,
                    token_index,
                    token_len = token.len(),
                    "token does not match date pattern"
                ),
            }
        }
        None
    }
}

impl FromStr for DatePattern {
    type Err = SanityError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Returns the date of the first token in `text` matching `pattern`.
///
/// An invalid pattern matches nothing.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use sanity_core::match_date;
///
/// assert_eq!(
///     match_date("due 4/20/2014 at noon", "%m/%d/%Y"),
///     NaiveDate::from_ymd_opt(2014, 4, 20)
/// );
/// assert_eq!(match_date("420", "%m/%d"), None);
/// ```
pub fn match_date(text: &str, pattern: &str) -> Option<NaiveDate> {
    match_date_token(text, pattern).map(|found| found.date)
}

/// Like [`match_date`], but also returns the token that matched.
///
/// When nothing matches there is no token either: the whole result is `None`.
pub fn match_date_token(text: &str, pattern: &str) -> Option<DateMatch> {
    match DatePattern::new(pattern) {
        Ok(pattern) => pattern.find(text),
        Err(error) => {
            debug!(%error, "skipping date match");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_full_date() {
        assert_eq!(match_date("4/20/2014", "%m/%d/%Y"), Some(ymd(2014, 4, 20)));
    }

    #[test]
    fn test_missing_year_uses_current_year() {
        let year = Local::now().year();
        assert_eq!(match_date("4/20", "%m/%d"), Some(ymd(year, 4, 20)));
        assert_eq!(match_date("4.20", "%m.%d"), Some(ymd(year, 4, 20)));
    }

    #[test]
    fn test_unparsable_token() {
        assert_eq!(match_date("420", "%m/%d"), None);
        assert_eq!(match_date("", "%m/%d"), None);
    }

    #[test]
    fn test_token_must_match_entirely() {
        assert_eq!(match_date("4/20/2014", "%m/%d"), None);
        assert_eq!(match_date("(4/20)", "%m/%d"), None);
    }

    #[test]
    fn test_first_matching_token_wins() {
        let pattern = DatePattern::new("%m/%d").unwrap();
        let found = pattern
            .find_with_year("from 1/2 until 3/4", 2020)
            .unwrap();
        assert_eq!(found.date, ymd(2020, 1, 2));
        assert_eq!(found.token, "1/2");
    }

    #[test]
    fn test_invalid_dates_are_skipped() {
        let pattern = DatePattern::new("%m/%d").unwrap();
        let found = pattern.find_with_year("13/40 2/30 2/28", 2021).unwrap();
        assert_eq!(found.token, "2/28");
    }

    #[test]
    fn test_leap_day_depends_on_fallback_year() {
        let pattern = DatePattern::new("%m/%d").unwrap();
        assert_eq!(pattern.parse_token("2/29", 2023), None);
        assert_eq!(pattern.parse_token("2/29", 2024), Some(ymd(2024, 2, 29)));
    }

    #[test]
    fn test_two_digit_year_counts_as_year() {
        let pattern = DatePattern::new("%m/%d/%y").unwrap();
        assert!(pattern.has_year());
        assert_eq!(pattern.parse_token("4/20/14", 1999), Some(ymd(2014, 4, 20)));
    }

    #[test]
    fn test_has_year() {
        assert!(DatePattern::new("%Y-%m-%d").unwrap().has_year());
        assert!(!DatePattern::new("%m/%d").unwrap().has_year());
    }

    #[test]
    fn test_invalid_pattern() {
        let err = DatePattern::new("%m/%").unwrap_err();
        assert!(matches!(err, SanityError::InvalidDatePattern { .. }));
        assert_eq!(match_date("4/20", "%m/%"), None);
    }

    #[test]
    fn test_match_date_token_no_match_has_no_token() {
        assert_eq!(match_date_token("nothing here", "%m/%d"), None);
    }

    #[test]
    fn test_match_date_token_returns_token() {
        let found = match_date_token("paid on 12/25/2013 by check", "%m/%d/%Y").unwrap();
        assert_eq!(found.token, "12/25/2013");
        assert_eq!(found.date, ymd(2013, 12, 25));
    }

    #[test]
    fn test_from_str() {
        let pattern: DatePattern = "%d.%m.%Y".parse().unwrap();
        assert_eq!(pattern.to_string(), "%d.%m.%Y");
        assert!("%Q".parse::<DatePattern>().is_err());
    }

    #[test]
    fn test_missing_day_defaults_to_first() {
        assert_eq!(match_date("exp 04/2014", "%m/%Y"), Some(ymd(2014, 4, 1)));
        assert_eq!(match_date("Apr-2014", "%b-%Y"), Some(ymd(2014, 4, 1)));
    }

    #[test]
    fn test_year_only_is_january_first() {
        assert_eq!(match_date("since 2014", "%Y"), Some(ymd(2014, 1, 1)));
    }

    #[test]
    fn test_day_only_uses_fallback_year_and_january() {
        let pattern = DatePattern::new("%d").unwrap();
        assert_eq!(pattern.parse_token("20", 2019), Some(ymd(2019, 1, 20)));
        assert_eq!(pattern.parse_token("32", 2019), None);
    }

    #[test]
    fn test_ordinal_date_is_not_defaulted() {
        assert_eq!(match_date("2014-110", "%Y-%j"), Some(ymd(2014, 4, 20)));
    }
}
