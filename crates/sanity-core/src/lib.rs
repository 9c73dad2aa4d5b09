//! Best-effort extraction and canonicalization of structured tokens from
//! loosely formatted, human-entered text.
//!
//! # Overview
//!
//! Five independent normalizers, each taking a raw value and returning
//! either a canonical value or an explicit no-match sentinel:
//!
//! - **Digits**: [`extract_digits`] strips a value to its digits, optionally
//!   keeping the sign and one decimal point.
//! - **Dates**: [`match_date`] / [`match_date_token`] find the first
//!   space-separated token matching a strftime-style pattern.
//! - **Email**: [`extract_email`] finds the first `local@domain` substring.
//! - **Prices**: [`normalize_price`] / [`normalize_price_value`] produce
//!   `dollars.cents` strings or floats.
//! - **ZIP codes**: [`normalize_zip`] produces `12345` or `12345-6789`.
//!
//! # Example
//!
//! ```
//! use sanity_core::{extract_digits, extract_email, normalize_price, normalize_zip};
//!
//! assert_eq!(extract_digits("1,024", false), "1024");
//! assert_eq!(extract_email("Hi There <hi@there.com>").as_deref(), Some("hi@there.com"));
//! assert_eq!(normalize_price("19.5"), "19.50");
//! assert_eq!(normalize_zip(210), "00210");
//! ```
//!
//! # Design Principles
//!
//! - **Stateless functions**: no shared state, safe to call from any thread
//! - **No panics on bad input**: malformed values yield `None` or `""`
//! - **Explicit coercion**: every input goes through [`RawScalar::to_text`]

mod date;
mod digits;
mod email;
mod error;
mod price;
mod scalar;
mod text;
mod zip;

// === Error Types ===
pub use error::{Result, SanityError};

// === Input Coercion ===
pub use scalar::{RawScalar, format_float, to_text};
pub use text::{ascii_digits, pad_left};

// === Normalizers ===
pub use date::{DateMatch, DatePattern, match_date, match_date_token};
pub use digits::extract_digits;
pub use email::{EmailAddress, extract_email, parse_email};
pub use price::{Price, normalize_price, normalize_price_value, parse_price};
pub use zip::{PostalCode, normalize_zip, parse_zip};
