// url_check.rs
use crate::config::USER_AGENT;
use crate::errors::AppError;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of probing a listing's advertised URL. The reason is only ever
/// used for diagnostics; an unreachable URL clears the field and nothing
/// more.
#[derive(Debug, PartialEq)]
pub enum UrlStatus {
    Reachable,
    Unreachable(String),
}

pub struct UrlChecker {
    client: Client,
}

impl UrlChecker {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Http(e.to_string()))?;

        Ok(Self { client })
    }

    /// Issues a GET against the listing URL. Anything other than a clean
    /// 200 counts as unreachable, including URLs that don't parse at all.
    pub fn check(&self, url: &str) -> UrlStatus {
        if let Err(e) = Url::parse(url) {
            return UrlStatus::Unreachable(format!("invalid url: {e}"));
        }

        match self.client.get(url).send() {
            Ok(resp) if resp.status() == StatusCode::OK => UrlStatus::Reachable,
            Ok(resp) => UrlStatus::Unreachable(format!("status {}", resp.status())),
            Err(e) => UrlStatus::Unreachable(e.to_string()),
        }
    }
}
