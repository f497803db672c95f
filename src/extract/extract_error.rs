use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ExtractError {
    Selector(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::Selector(msg) => write!(f, "Selector parse error: {msg}"),
        }
    }
}

impl Error for ExtractError {}
