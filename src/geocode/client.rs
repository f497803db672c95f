// client.rs
use crate::config::USER_AGENT;
use crate::geocode::models::{GeocodeResponse, GeocodeResult};
use crate::geocode::GeocodeError;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;

/// Thin client for the Geoapify forward-geocoding endpoint. One request
/// per address, no retries; the pipeline treats every failure here as
/// "this record has no coordinates".
pub struct GeocodeClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GeocodeClient {
    pub fn new(endpoint: &str, api_key: &str) -> Result<Self, GeocodeError> {
        // The URL checker is the only request with a deadline; a slow
        // geocoder just slows the run down.
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None)
            .build()
            .map_err(|e| GeocodeError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Looks up coordinates for a US street address. `Ok(None)` means the
    /// service answered but had no match for the address.
    pub fn lookup(
        &self,
        street_address: &str,
        city: &str,
        state: &str,
        zip: &str,
    ) -> Result<Option<GeocodeResult>, GeocodeError> {
        let query = format!("{street_address}, {city}, {state} {zip}, United States");
        println!("Geocoding: {query}");

        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("text", query.as_str()),
                ("apiKey", self.api_key.as_str()),
                ("format", "json"),
            ])
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(GeocodeError::Status(status.as_u16()));
        }

        let text = resp.text().map_err(|e| GeocodeError::Network(e.to_string()))?;
        let parsed: GeocodeResponse =
            serde_json::from_str(&text).map_err(|e| GeocodeError::Json(e.to_string()))?;

        Ok(parsed.results.into_iter().next())
    }
}
