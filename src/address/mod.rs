mod normalize;
mod states;

pub use normalize::{parse_city_state_zip, zip_override, NormalizedAddress};
