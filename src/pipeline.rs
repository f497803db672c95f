// pipeline.rs
use crate::address::{parse_city_state_zip, zip_override};
use crate::config::Config;
use crate::domain::Listing;
use crate::errors::AppError;
use crate::extract::extract_listings;
use crate::geocode::GeocodeClient;
use crate::output::ListingWriter;
use crate::url_check::{UrlChecker, UrlStatus};
use std::fs::{self, File};
use std::io::{BufWriter, Write};

/// Runs the whole extraction against the configured input and output
/// paths. Only startup problems surface as errors; per-record failures are
/// reported on stdout and skipped.
pub fn run(config: &Config) -> Result<(), AppError> {
    let html = fs::read_to_string(&config.input_path)
        .map_err(|e| AppError::Io(format!("Failed to read {}: {e}", config.input_path)))?;

    let out = File::create(&config.output_path)
        .map_err(|e| AppError::Io(format!("Failed to create {}: {e}", config.output_path)))?;
    let mut writer = ListingWriter::new(BufWriter::new(out));

    let checker = UrlChecker::new()?;
    let geocoder = GeocodeClient::new(&config.geocode_endpoint, &config.api_key)
        .map_err(|e| AppError::Http(e.to_string()))?;

    let written = process_document(&html, &checker, &geocoder, &mut writer)?;
    writer.finish().map_err(|e| AppError::Io(e.to_string()))?;

    println!("✅ Wrote {written} listings to {}", config.output_path);
    Ok(())
}

/// Extracts, enriches, and writes every listing in the document, in
/// document order. Records with unusable addresses are skipped whole; a
/// dead listing URL or a failed geocode lookup only degrades that one
/// field.
pub fn process_document<W: Write>(
    html: &str,
    checker: &UrlChecker,
    geocoder: &GeocodeClient,
    writer: &mut ListingWriter<W>,
) -> Result<usize, AppError> {
    writer
        .write_header()
        .map_err(|e| AppError::Io(e.to_string()))?;

    let records = extract_listings(html).map_err(|e| AppError::Parse(e.to_string()))?;

    let mut written = 0;
    for raw in records {
        println!("Street Address: {}", raw.street_address);

        let mut address = match parse_city_state_zip(&raw.city_state_zip) {
            Some(address) => address,
            None => {
                println!("Skipping: {}, missing city", raw.name);
                continue;
            }
        };

        if let Some(zip) = zip_override(&raw.street_address, &address.city, &address.state) {
            address.zip = zip.to_string();
        }

        println!("City: {}", address.city);
        println!("State: {}", address.state);
        println!("ZIP: {}", address.zip);

        let mut listing = match Listing::from_raw(&raw, address) {
            Ok(listing) => listing,
            Err(reason) => {
                println!("Skipping: {}, {reason}", raw.name);
                continue;
            }
        };

        // A missing url is fine; a dead one gets cleared rather than
        // published.
        if !listing.url.is_empty() {
            if let UrlStatus::Unreachable(reason) = checker.check(&listing.url) {
                println!("Invalid url: {} ({reason})", listing.url);
                listing.url.clear();
            }
        }

        // Coordinates stay empty unless this record's own lookup succeeds.
        match geocoder.lookup(&listing.street_address, &listing.city, &listing.state, &listing.zip)
        {
            Ok(Some(hit)) => {
                listing.latitude = hit.lat.to_string();
                listing.longitude = hit.lon.to_string();
            }
            Ok(None) => println!("No geocoder match for {}", listing.name),
            Err(e) => println!("Geocoder error: {e}"),
        }
        println!("Coordinates: {}, {}", listing.latitude, listing.longitude);
        println!();

        writer
            .write_listing(&listing)
            .map_err(|e| AppError::Io(e.to_string()))?;
        written += 1;
    }

    Ok(written)
}
