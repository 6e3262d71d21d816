//! Error handling for the milestone screener.

use chrono::NaiveDate;

/// Errors that can occur during milestone screening
#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    /// Assessment date precedes the birth date
    #[error("assessment date {assessment} precedes birth date {birth}")]
    InvalidDateOrder {
        /// The child's date of birth
        birth: NaiveDate,
        /// The offending assessment date
        assessment: NaiveDate,
    },

    /// A decimal age value could not be parsed
    #[error("invalid age value: {0}")]
    InvalidAge(String),
}

/// Result type for milestone screening operations
pub type Result<T> = std::result::Result<T, ScreeningError>;
