// output.rs
use crate::domain::Listing;
use std::io::{self, Write};

const HEADER: &str = r#""name", "url", "address", "city", "state", "zip", "latitude", "longitude""#;

/// Writes listings in the quoted, comma-separated layout the downstream
/// import expects. Values are quoted verbatim; no escaping is applied.
pub struct ListingWriter<W: Write> {
    out: W,
}

impl<W: Write> ListingWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "{HEADER}")
    }

    pub fn write_listing(&mut self, listing: &Listing) -> io::Result<()> {
        writeln!(
            self.out,
            "\"{}\", \"{}\", \"{}\", \"{}\", \"{}\", \"{}\", \"{}\", \"{}\"",
            listing.name,
            listing.url,
            listing.street_address,
            listing.city,
            listing.state,
            listing.zip,
            listing.latitude,
            listing.longitude
        )
    }

    /// Flushes and hands back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
