// src/domain/listing.rs

use crate::address::NormalizedAddress;
use crate::extract::RawListing;

/// A validated nursery listing, ready to be enriched and written out.
/// This acts as the boundary between the raw scrape and the output file:
/// anything that gets this far has a complete, physical street address.
#[derive(Debug, PartialEq, Clone)]
pub struct Listing {
    pub name: String,
    pub url: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip: String,

    // Filled in by geocoding; empty when no lookup succeeded.
    pub latitude: String,
    pub longitude: String,
}

/// Street address fragments that mean there is nothing to drive to.
const EXCLUDED_ADDRESS_MARKERS: [&str; 3] = ["PO Box", "P.O. Box", "By Appointment Only"];

impl Listing {
    /// Builds a listing from the extracted block and its normalized
    /// address, validating that the required fields survived parsing.
    pub fn from_raw(raw: &RawListing, address: NormalizedAddress) -> Result<Self, String> {
        if raw.name.is_empty() {
            return Err("missing name".to_string());
        }
        if raw.street_address.is_empty() {
            return Err("missing street address".to_string());
        }
        if address.city.is_empty() {
            return Err("missing city".to_string());
        }
        if address.state.is_empty() {
            return Err("unrecognized state".to_string());
        }
        if let Some(marker) = EXCLUDED_ADDRESS_MARKERS
            .iter()
            .find(|marker| raw.street_address.contains(*marker))
        {
            return Err(format!("address is not a physical location ({marker})"));
        }

        Ok(Listing {
            name: raw.name.clone(),
            url: raw.url.clone(),
            street_address: raw.street_address.clone(),
            city: address.city,
            state: address.state,
            zip: address.zip,
            latitude: String::new(),
            longitude: String::new(),
        })
    }
}
