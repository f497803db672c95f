mod extract_error;
mod extractor;
mod models;

pub use extract_error::ExtractError;
pub use extractor::extract_listings;
pub use models::RawListing;
