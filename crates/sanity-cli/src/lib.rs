//! CLI library components for the sanity normalizers.

pub mod logging;
pub mod outcome;
pub mod summary;
