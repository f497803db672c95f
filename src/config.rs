// config.rs
use crate::errors::AppError;
use std::env;

pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

const GEOAPIFY_ENDPOINT: &str = "https://api.geoapify.com/v1/geocode/search";

/// Everything the pipeline needs, resolved once at startup and passed down
/// explicitly instead of read from globals mid-run.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: String,
    pub output_path: String,
    pub api_key: String,
    pub geocode_endpoint: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = env::var("GEOAPIFY_API_KEY").map_err(|_| {
            AppError::Config("GEOAPIFY_API_KEY environment variable not set".into())
        })?;

        Ok(Self {
            input_path: "nurseries.xml".into(),
            output_path: "nurseries.csv".into(),
            api_key,
            geocode_endpoint: GEOAPIFY_ENDPOINT.into(),
        })
    }
}
