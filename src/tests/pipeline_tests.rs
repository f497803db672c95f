// Pipeline tests: run the whole extract → normalize → validate → enrich →
// write chain against mock HTTP endpoints and check the produced CSV.

use crate::tests::utils::{bare_block, document_with, geocode_hit, linked_block, run_to_string};
use mockito::Matcher;

const HEADER: &str =
    "\"name\", \"url\", \"address\", \"city\", \"state\", \"zip\", \"latitude\", \"longitude\"\n";

#[test]
fn complete_listing_produces_the_expected_row() {
    let mut server = mockito::Server::new();
    let site_url = format!("{}/site", server.url());
    let geocode_endpoint = format!("{}/geocode", server.url());

    server.mock("GET", "/site").with_status(200).create();
    server
        .mock("GET", "/geocode")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(geocode_hit(39.8, -89.6))
        .create();

    let html = document_with(&[&linked_block(
        "Acme Nursery",
        &site_url,
        "123 Main St",
        "Springfield, Illinois 62701",
    )]);

    let output = run_to_string(&html, &geocode_endpoint);

    assert_eq!(
        output,
        format!(
            "{HEADER}\"Acme Nursery\", \"{site_url}\", \"123 Main St\", \"Springfield\", \
             \"IL\", \"62701\", \"39.8\", \"-89.6\"\n"
        )
    );
}

#[test]
fn dead_listing_url_is_cleared_but_the_record_survives() {
    let mut server = mockito::Server::new();
    let site_url = format!("{}/dead", server.url());
    let geocode_endpoint = format!("{}/geocode", server.url());

    server.mock("GET", "/dead").with_status(404).create();
    server
        .mock("GET", "/geocode")
        .with_status(200)
        .with_body(geocode_hit(39.8, -89.6))
        .create();

    let html = document_with(&[&linked_block(
        "Acme Nursery",
        &site_url,
        "123 Main St",
        "Springfield, Illinois 62701",
    )]);

    let output = run_to_string(&html, &geocode_endpoint);

    assert_eq!(
        output,
        format!(
            "{HEADER}\"Acme Nursery\", \"\", \"123 Main St\", \"Springfield\", \"IL\", \
             \"62701\", \"39.8\", \"-89.6\"\n"
        )
    );
}

#[test]
fn zero_geocoder_results_leave_coordinates_empty() {
    let mut server = mockito::Server::new();
    let geocode_endpoint = format!("{}/geocode", server.url());

    server
        .mock("GET", "/geocode")
        .with_status(200)
        .with_body(r#"{"results":[]}"#)
        .create();

    let html = document_with(&[&bare_block(
        "Hidden Hollow",
        "14 Fern Way",
        "Amery, Wisconsin 54001",
    )]);

    let output = run_to_string(&html, &geocode_endpoint);

    assert_eq!(
        output,
        format!(
            "{HEADER}\"Hidden Hollow\", \"\", \"14 Fern Way\", \"Amery\", \"WI\", \"54001\", \
             \"\", \"\"\n"
        )
    );
}

#[test]
fn po_box_and_appointment_only_listings_are_excluded() {
    let mut server = mockito::Server::new();
    let geocode_endpoint = format!("{}/geocode", server.url());

    server
        .mock("GET", "/geocode")
        .with_status(200)
        .with_body(geocode_hit(45.3, -92.4))
        .create();

    let html = document_with(&[
        &bare_block("Mailbox Plants", "PO Box 217", "Amery, Wisconsin 54001"),
        &bare_block("Dotted Mailbox", "P.O. Box 9", "Amery, Wisconsin 54001"),
        &bare_block(
            "Backyard Growers",
            "88 Hill Rd, By Appointment Only",
            "Amery, Wisconsin 54001",
        ),
        &bare_block("Real Place", "12 Barn Rd", "Amery, Wisconsin 54001"),
    ]);

    let output = run_to_string(&html, &geocode_endpoint);

    let rows: Vec<&str> = output.lines().skip(1).collect();
    assert_eq!(
        rows,
        vec!["\"Real Place\", \"\", \"12 Barn Rd\", \"Amery\", \"WI\", \"54001\", \"45.3\", \"-92.4\""]
    );
}

#[test]
fn records_with_unusable_addresses_are_excluded() {
    let mut server = mockito::Server::new();
    let geocode_endpoint = format!("{}/geocode", server.url());

    server
        .mock("GET", "/geocode")
        .with_status(200)
        .with_body(geocode_hit(45.3, -92.4))
        .create();

    let html = document_with(&[
        // No comma in the city line.
        &bare_block("No Comma", "3 Ash St", "Amery Wisconsin 54001"),
        // State name that is not in the table.
        &bare_block("Lost State", "4 Oak St", "Springfield, Atlantis 00001"),
        // Parenthetical note instead of an address.
        &bare_block("Note Only", "(vendor at farmers markets)", "Amery, Wisconsin 54001"),
        &bare_block("Real Place", "12 Barn Rd", "Amery, Wisconsin 54001"),
    ]);

    let output = run_to_string(&html, &geocode_endpoint);

    let rows: Vec<&str> = output.lines().skip(1).collect();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].starts_with("\"Real Place\""));
}

#[test]
fn hardcoded_zip_override_is_applied() {
    let mut server = mockito::Server::new();
    let geocode_endpoint = format!("{}/geocode", server.url());

    let mock = server
        .mock("GET", "/geocode")
        .match_query(Matcher::UrlEncoded(
            "text".into(),
            "2230 Valley Hwy, Charlotte, MI 48813, United States".into(),
        ))
        .with_status(200)
        .with_body(geocode_hit(42.5, -84.8))
        .create();

    // The document has no zip for this listing; the override supplies it.
    let html = document_with(&[&bare_block(
        "Valley Nursery",
        "2230 Valley Hwy",
        "Charlotte, Michigan",
    )]);

    let output = run_to_string(&html, &geocode_endpoint);

    mock.assert();
    assert_eq!(
        output,
        format!(
            "{HEADER}\"Valley Nursery\", \"\", \"2230 Valley Hwy\", \"Charlotte\", \"MI\", \
             \"48813\", \"42.5\", \"-84.8\"\n"
        )
    );
}

#[test]
fn geocoder_failure_does_not_inherit_previous_coordinates() {
    let mut server = mockito::Server::new();
    let geocode_endpoint = format!("{}/geocode", server.url());

    server
        .mock("GET", "/geocode")
        .match_query(Matcher::UrlEncoded(
            "text".into(),
            "123 Main St, Springfield, IL 62701, United States".into(),
        ))
        .with_status(200)
        .with_body(geocode_hit(39.8, -89.6))
        .create();
    server
        .mock("GET", "/geocode")
        .match_query(Matcher::UrlEncoded(
            "text".into(),
            "9 Oak St, Amery, WI 54001, United States".into(),
        ))
        .with_status(500)
        .create();

    let html = document_with(&[
        &bare_block("First Farm", "123 Main St", "Springfield, Illinois 62701"),
        &bare_block("Second Farm", "9 Oak St", "Amery, Wisconsin 54001"),
    ]);

    let output = run_to_string(&html, &geocode_endpoint);

    let rows: Vec<&str> = output.lines().skip(1).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].ends_with("\"39.8\", \"-89.6\""));
    // The second record must not pick up the first record's coordinates.
    assert!(rows[1].ends_with("\"\", \"\""));
}
