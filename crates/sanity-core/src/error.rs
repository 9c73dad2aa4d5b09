//! Error types for the normalizers.
//!
//! The extraction functions themselves never fail: a value that cannot be
//! normalized yields the no-match sentinel. Errors only surface from the
//! constructors that validate caller-supplied configuration up front.

use thiserror::Error;

/// Errors raised while preparing a normalizer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SanityError {
    /// The date pattern contains an unknown or malformed specifier.
    #[error("invalid date pattern '{pattern}': {reason}")]
    InvalidDatePattern { pattern: String, reason: String },
}

/// Result type for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, SanityError>;
