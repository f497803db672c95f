// errors.rs
use std::fmt;

/// Errors that end the run: bad configuration, unusable input or output
/// files, or an HTTP client that cannot be constructed. Everything that can
/// go wrong with a single listing is handled inline and never reaches this.
#[derive(Debug)]
pub enum AppError {
    Config(String),
    Io(String),
    Http(String),
    Parse(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration error: {msg}"),
            AppError::Io(msg) => write!(f, "I/O error: {msg}"),
            AppError::Http(msg) => write!(f, "HTTP client error: {msg}"),
            AppError::Parse(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}
