// listing block
//  ├── <strong>
//  │    └── <a href=url>name</a>   (or bare text when there is no link)
//  ├── <br> street address
//  ├── <br> city, state zip
//  └── <br> phone / notes          (dropped)

/// One listing block as it appears in the source document, before any
/// address normalization or validation.
#[derive(Debug, PartialEq)]
pub struct RawListing {
    pub name: String,
    pub url: String,
    pub street_address: String,
    pub city_state_zip: String,
}
