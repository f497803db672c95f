use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeocodeError {
    Client(String),
    Network(String),
    Status(u16),
    Json(String),
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodeError::Client(msg) => write!(f, "Client setup error: {msg}"),
            GeocodeError::Network(msg) => write!(f, "Network error: {msg}"),
            GeocodeError::Status(code) => write!(f, "Geocoder returned status {code}"),
            GeocodeError::Json(msg) => write!(f, "JSON parse error: {msg}"),
        }
    }
}

impl Error for GeocodeError {}
