//! Error types for minimoney-core
//!
//! The engine is total over well-formed input: empty snapshots, zero
//! totals, and unknown category keys all produce empty or zeroed results.
//! Only malformed caller input is surfaced as an error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Custom period with start after end
    InvalidRange,
    /// Month outside 1..=12
    InvalidMonth,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::InvalidRange => write!(f, "INVALID_RANGE"),
            ErrorCode::InvalidMonth => write!(f, "INVALID_MONTH"),
        }
    }
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            suggestions: vec![],
        }
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Main error type for minimoney-core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
}

impl StatsError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            StatsError::InvalidRange { .. } => ErrorCode::InvalidRange,
            StatsError::InvalidMonth { .. } => ErrorCode::InvalidMonth,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            StatsError::InvalidRange { .. } => {
                details = details.with_suggestion(
                    "Swap the custom period bounds so that start <= end.".to_string(),
                );
            }
            StatsError::InvalidMonth { month, .. } => {
                details = details.with_suggestion(format!(
                    "Month must be between 1 and 12, got {}.",
                    month
                ));
            }
        }

        details
    }
}

/// Result type with StatsError
pub type StatsResult<T> = Result<T, StatsError>;
