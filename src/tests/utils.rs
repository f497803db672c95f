use crate::geocode::GeocodeClient;
use crate::output::ListingWriter;
use crate::pipeline::process_document;
use crate::url_check::UrlChecker;

/// Wraps listing paragraphs in enough page chrome to look like the real
/// document.
pub fn document_with(blocks: &[&str]) -> String {
    format!(
        "<html><body><div class=\"entry-content\">\n{}\n</div></body></html>",
        blocks.join("\n")
    )
}

/// A listing block whose name links out to a website.
pub fn linked_block(name: &str, url: &str, street: &str, city_state_zip: &str) -> String {
    format!(
        "<p class=\"has-text-align-center\"><strong><a href=\"{url}\">{name}</a></strong>\
         <br>{street}<br>{city_state_zip}</p>"
    )
}

/// A listing block with a bare name and no website.
pub fn bare_block(name: &str, street: &str, city_state_zip: &str) -> String {
    format!(
        "<p class=\"has-text-align-center\"><strong>{name}</strong>\
         <br>{street}<br>{city_state_zip}</p>"
    )
}

/// A geocoder response body with a single match.
pub fn geocode_hit(lat: f64, lon: f64) -> String {
    format!("{{\"results\":[{{\"lat\":{lat},\"lon\":{lon}}}]}}")
}

/// Runs the full pipeline over `html` against a mock geocoder endpoint and
/// returns the produced CSV.
pub fn run_to_string(html: &str, geocode_endpoint: &str) -> String {
    let checker = UrlChecker::new().expect("url checker should build");
    let geocoder =
        GeocodeClient::new(geocode_endpoint, "test-key").expect("geocode client should build");

    let mut writer = ListingWriter::new(Vec::new());
    process_document(html, &checker, &geocoder, &mut writer).expect("pipeline should run");

    String::from_utf8(writer.finish().expect("flush")).expect("output is utf8")
}
