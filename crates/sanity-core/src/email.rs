//! Email address extraction.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// `local@domain`, both halves drawn from `[A-Za-z0-9_.-]`.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z0-9_.-]+)@([A-Za-z0-9_.-]+)").expect("Invalid email regex")
});

/// An email address split into its two halves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EmailAddress {
    local: String,
    domain: String,
}

impl EmailAddress {
    /// The part before `@`.
    pub fn local(&self) -> &str {
        &self.local
    }

    /// The part after `@`.
    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local, self.domain)
    }
}

/// Finds the first email-shaped substring of `text`.
///
/// Angle brackets are treated as whitespace, so `Name <a@b.com>` yields
/// `a@b.com`. No further validation is done on either half.
pub fn parse_email(text: &str) -> Option<EmailAddress> {
    let unbracketed = text.replace(['<', '>'], " ");
    let captures = EMAIL_REGEX.captures(&unbracketed)?;
    Some(EmailAddress {
        local: captures[1].to_string(),
        domain: captures[2].to_string(),
    })
}

/// Returns the first `local@domain` substring of `text`, if any.
///
/// # Examples
///
/// ```
/// use sanity_core::extract_email;
///
/// assert_eq!(
///     extract_email("Hi There <hi@there.com>").as_deref(),
///     Some("hi@there.com")
/// );
/// assert_eq!(extract_email("no address here"), None);
/// ```
pub fn extract_email(text: &str) -> Option<String> {
    parse_email(text).as_ref().map(ToString::to_string)
}
