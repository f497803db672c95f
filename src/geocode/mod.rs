mod client;
mod geocode_error;
mod models;

pub use client::GeocodeClient;
pub use geocode_error::GeocodeError;
pub use models::{GeocodeResponse, GeocodeResult};
