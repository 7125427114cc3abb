//! Error types for the contest timeline.

use thiserror::Error;

/// Errors that can occur while loading or laying out a schedule.
#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("Invalid month {0}. Expected 1-12")]
    InvalidMonth(u32),

    #[error("Invalid {field} '{value}'. Expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    #[error("Bar for '{id}' ends on day {end_day} before it starts on day {start_day}")]
    InvertedSpan {
        id: String,
        start_day: u32,
        end_day: u32,
    },

    #[error("Schedule format error: {0}")]
    Schema(String),

    #[error("Schedule parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for timeline operations.
pub type TimelineResult<T> = Result<T, TimelineError>;
