use serde::Deserialize;

// response
//  └── results
//       ├── [0]
//       │    ├── lat
//       │    └── lon
//       └── ...

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct GeocodeResult {
    pub lat: f64,
    pub lon: f64,
}
