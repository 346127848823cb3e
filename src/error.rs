use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the hours editor
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Configuration error: {0}")]
    #[diagnostic(code(weekly_hours::config))]
    Config(String),

    #[error("Unknown day: {0}")]
    #[diagnostic(
        code(weekly_hours::invalid_day),
        help("use one of monday, tuesday, wednesday, thursday, friday, saturday, sunday")
    )]
    InvalidDay(String),

    #[error("Invalid time: {0}")]
    #[diagnostic(code(weekly_hours::invalid_time), help("times are 24-hour HH:MM"))]
    InvalidTime(String),

    #[error("Editor error: {0}")]
    #[diagnostic(code(weekly_hours::editor))]
    Editor(String),

    #[error(transparent)]
    #[diagnostic(code(weekly_hours::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(weekly_hours::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(weekly_hours::other))]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type HoursResult<T> = Result<T, Error>;

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create unknown-day errors
pub fn invalid_day(day: &str) -> Error {
    Error::InvalidDay(day.to_string())
}

/// Helper to create time validation errors
pub fn invalid_time(time: &str) -> Error {
    Error::InvalidTime(time.to_string())
}

/// Helper to create editor (actor mailbox) errors
pub fn editor_error(message: &str) -> Error {
    Error::Editor(message.to_string())
}

/// Helper to create other errors
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
