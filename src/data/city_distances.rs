// src/data/city_distances.rs
//! Hand-curated approximate driving distances between major cities.
//!
//! Rows are stored in one direction only; callers try the reverse order on a
//! miss. All keys are lowercase.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub type CityDistanceTable = HashMap<&'static str, HashMap<&'static str, u32>>;

const CITY_DISTANCE_ROWS: &[(&str, &str, u32)] = &[
    // North America
    ("new york", "boston", 215),
    ("new york", "philadelphia", 95),
    ("new york", "washington", 225),
    ("new york", "pittsburgh", 370),
    ("new york", "buffalo", 370),
    ("new york", "chicago", 790),
    ("new york", "atlanta", 870),
    ("new york", "miami", 1280),
    ("new york", "los angeles", 2790),
    ("boston", "philadelphia", 310),
    ("boston", "washington", 440),
    ("boston", "montreal", 310),
    ("boston", "chicago", 985),
    ("washington", "philadelphia", 140),
    ("washington", "baltimore", 40),
    ("washington", "charlotte", 400),
    ("chicago", "detroit", 285),
    ("chicago", "milwaukee", 90),
    ("chicago", "indianapolis", 185),
    ("chicago", "minneapolis", 410),
    ("chicago", "dallas", 925),
    ("chicago", "denver", 1000),
    ("los angeles", "san diego", 120),
    ("los angeles", "las vegas", 270),
    ("los angeles", "san francisco", 380),
    ("los angeles", "phoenix", 370),
    ("los angeles", "denver", 1015),
    ("los angeles", "seattle", 1135),
    ("san francisco", "sacramento", 90),
    ("san francisco", "las vegas", 570),
    ("san francisco", "portland", 635),
    ("san francisco", "seattle", 810),
    ("seattle", "vancouver", 140),
    ("seattle", "portland", 175),
    ("seattle", "spokane", 280),
    ("dallas", "austin", 195),
    ("dallas", "houston", 240),
    ("dallas", "san antonio", 275),
    ("houston", "austin", 165),
    ("houston", "san antonio", 200),
    ("houston", "new orleans", 350),
    ("atlanta", "charlotte", 245),
    ("atlanta", "nashville", 250),
    ("atlanta", "orlando", 440),
    ("atlanta", "miami", 660),
    ("miami", "orlando", 235),
    ("miami", "tampa", 280),
    ("denver", "salt lake city", 520),
    ("denver", "phoenix", 820),
    ("phoenix", "tucson", 115),
    ("phoenix", "las vegas", 300),
    ("toronto", "ottawa", 280),
    ("toronto", "detroit", 230),
    ("toronto", "montreal", 335),
    ("toronto", "new york", 490),
    // Europe
    ("paris", "london", 285),
    ("paris", "brussels", 165),
    ("paris", "lyon", 290),
    ("paris", "amsterdam", 310),
    ("paris", "berlin", 655),
    ("paris", "madrid", 790),
    ("london", "birmingham", 120),
    ("london", "manchester", 200),
    ("london", "amsterdam", 360),
    ("london", "edinburgh", 405),
    ("berlin", "hamburg", 180),
    ("berlin", "prague", 215),
    ("berlin", "munich", 365),
    ("berlin", "amsterdam", 410),
    ("munich", "zurich", 195),
    ("munich", "vienna", 270),
    ("amsterdam", "brussels", 130),
    ("madrid", "barcelona", 385),
    ("madrid", "lisbon", 390),
    ("rome", "naples", 140),
    ("rome", "florence", 170),
    ("rome", "milan", 355),
];

/// Process-wide city distance table, built on first use.
pub static CITY_DISTANCES: Lazy<CityDistanceTable> = Lazy::new(|| {
    let mut table: CityDistanceTable = HashMap::new();
    for &(from, to, miles) in CITY_DISTANCE_ROWS {
        table.entry(from).or_default().insert(to, miles);
    }
    table
});

/// Direct lookup in stored direction only.
pub fn lookup_distance(from: &str, to: &str) -> Option<u32> {
    CITY_DISTANCES.get(from)?.get(to).copied()
}

/// Cities that own a row in the table.
pub fn known_cities() -> impl Iterator<Item = &'static str> {
    CITY_DISTANCES.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_directional() {
        assert_eq!(lookup_distance("new york", "boston"), Some(215));
        assert_eq!(lookup_distance("boston", "new york"), None);
        assert_eq!(lookup_distance("paris", "london"), Some(285));
        assert_eq!(lookup_distance("atlantis", "paris"), None);
    }

    #[test]
    fn test_table_invariants() {
        for &(from, to, miles) in CITY_DISTANCE_ROWS {
            assert!(miles > 0, "{} -> {} must be positive", from, to);
            assert_eq!(from, from.to_lowercase());
            assert_eq!(to, to.to_lowercase());
            assert_ne!(from, to);
        }
    }

    #[test]
    fn test_known_cities_are_row_owners() {
        let cities: Vec<&str> = known_cities().collect();
        assert!(cities.contains(&"new york"));
        assert!(cities.contains(&"paris"));
        // Only appears as a destination
        assert!(!cities.contains(&"edinburgh"));
    }
}
