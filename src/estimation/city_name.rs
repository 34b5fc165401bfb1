// src/estimation/city_name.rs
//! Reduces a free-form address to the part most likely to be the city name.

use once_cell::sync::Lazy;
use regex::Regex;

const US_STATE_NAMES: &[&str] = &[
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "District of Columbia", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois",
    "Indiana", "Iowa", "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts",
    "Michigan", "Minnesota", "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada",
    "New Hampshire", "New Jersey", "New Mexico", "New York", "North Carolina", "North Dakota",
    "Ohio", "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island", "South Carolina",
    "South Dakota", "Tennessee", "Texas", "Utah", "Vermont", "Virginia", "Washington",
    "West Virginia", "Wisconsin", "Wyoming",
];

static UK_POSTCODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b[A-Z]{1,2}\d[A-Z\d]?\s*\d[A-Z]{2}\b").expect("valid UK postcode regex")
});

static US_ZIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{5}(?:-\d{4})?\b").expect("valid ZIP regex"));

static STANDALONE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+\b").expect("valid number regex"));

static STREET_AND_UNIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:street|st|avenue|ave|road|rd|boulevard|blvd|lane|ln|drive|dr|court|ct|plaza|plz|square|sq|highway|hwy|parkway|pkwy|apartment|apt|suite|ste|unit|floor|fl|room|rm)\b\.?",
    )
    .expect("valid street designator regex")
});

// Needs whitespace before the designator, so a lone "New York" is left alone.
static TRAILING_STATE_RE: Lazy<Regex> = Lazy::new(|| {
    let names = US_STATE_NAMES
        .iter()
        .map(|name| name.replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\s+(?:(?i:{})|[A-Z]{{2}})$", names)).expect("valid state suffix regex")
});

/// Best-guess city name for an address. Never fails; worst case it returns
/// the cleaned input, which may be empty.
///
/// Postal codes, house numbers, street and unit words and commas are removed,
/// then one trailing state name or two-letter region code is dropped.
pub fn extract_city_name(address: &str) -> String {
    let cleaned = clean_address(address);
    match TRAILING_STATE_RE.find(&cleaned) {
        Some(state) => cleaned[..state.start()].trim().to_string(),
        None => cleaned,
    }
}

fn clean_address(address: &str) -> String {
    let without_postcodes = UK_POSTCODE_RE.replace_all(address, " ");
    let without_zips = US_ZIP_RE.replace_all(&without_postcodes, " ");
    let without_numbers = STANDALONE_NUMBER_RE.replace_all(&without_zips, " ");
    let without_streets = STREET_AND_UNIT_RE.replace_all(&without_numbers, " ");
    without_streets
        .replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
