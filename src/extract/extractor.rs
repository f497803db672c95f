// extractor.rs
use crate::extract::models::RawListing;
use crate::extract::ExtractError;
use scraper::{ElementRef, Html, Node, Selector};

/// Pulls every listing block out of the document.
///
/// Each listing is a centered paragraph whose `<strong>` holds the business
/// name (linked or bare). The text after the `<strong>` carries the street
/// address and the city/state/zip line, separated by `<br>` tags. Blocks
/// whose "address" is a parenthetical note have nothing to drive to and are
/// skipped.
pub fn extract_listings(html: &str) -> Result<Vec<RawListing>, ExtractError> {
    let document = Html::parse_document(html);

    let paragraph = Selector::parse("p.has-text-align-center")
        .map_err(|e| ExtractError::Selector(e.to_string()))?;
    let strong = Selector::parse("strong").map_err(|e| ExtractError::Selector(e.to_string()))?;
    let anchor = Selector::parse("a").map_err(|e| ExtractError::Selector(e.to_string()))?;

    let mut listings = Vec::new();

    for block in document.select(&paragraph) {
        let strong_el = match block.select(&strong).next() {
            Some(el) => el,
            None => {
                println!("Skipping block with no business name");
                continue;
            }
        };

        let (name, url) = match strong_el.select(&anchor).next() {
            Some(a) => {
                let name = squish(&a.text().collect::<String>());
                // Some hrefs in the document have stray spaces in them.
                let url = a
                    .value()
                    .attr("href")
                    .unwrap_or("")
                    .replace(' ', "")
                    .replace("%20", "");
                (name, url)
            }
            None => (squish(&strong_el.text().collect::<String>()), String::new()),
        };

        println!("Name: {name}");
        println!("URL: {url}");

        let (street_address, city_state_zip) = bucket_siblings(strong_el);

        if street_address.starts_with('(') {
            println!("Skipping: {name}, missing address");
            continue;
        }

        listings.push(RawListing {
            name,
            url,
            street_address,
            city_state_zip,
        });
    }

    Ok(listings)
}

/// Which field the text between `<br>` tags belongs to.
#[derive(Clone, Copy)]
enum Bucket {
    Street,
    CityStateZip,
    Ignored,
}

impl Bucket {
    fn advance(self) -> Self {
        match self {
            Bucket::Street => Bucket::CityStateZip,
            Bucket::CityStateZip | Bucket::Ignored => Bucket::Ignored,
        }
    }
}

/// Splits the text following the business name into street and
/// city/state/zip fields. Each `<br>` moves to the next field; everything
/// after the second `<br>` (phone numbers, notes) is dropped. Nested markup
/// contributes no text to whichever field it appears in.
fn bucket_siblings(strong_el: ElementRef) -> (String, String) {
    let mut bucket = Bucket::Street;
    let mut street = String::new();
    let mut city_state_zip = String::new();

    for sibling in strong_el.next_siblings() {
        match sibling.value() {
            Node::Element(el) if el.name() == "br" => bucket = bucket.advance(),
            Node::Text(text) => {
                let fragment = squish(&text.text);
                match bucket {
                    Bucket::Street => street.push_str(&fragment),
                    Bucket::CityStateZip => city_state_zip.push_str(&fragment),
                    Bucket::Ignored => {}
                }
            }
            _ => {}
        }
    }

    (street, city_state_zip)
}

/// Collapses runs of whitespace (the document is full of newlines and
/// indentation inside text nodes) and trims the ends.
fn squish(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
