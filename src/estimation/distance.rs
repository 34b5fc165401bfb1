// src/estimation/distance.rs
//! Layered distance estimate between two free-text locations.
//!
//! Tiers, first hit wins:
//! 1. exact `table[start][destination]`
//! 2. reverse `table[destination][start]`
//! 3. mean over every known city pair whose names overlap the query
//! 4. a synthetic value derived from the query strings
//!
//! Every tier is deterministic and the last one always produces a value, so
//! estimation has no failure path.

use log::debug;

use crate::data::city_distances::{known_cities, lookup_distance};
use crate::data::distance_bands::DISTANCE_BANDS;
use crate::estimation::city_name::extract_city_name;
use crate::models::{DistanceEstimate, MatchTier};

/// Estimated miles between two raw location strings.
pub fn estimate_distance(start: &str, destination: &str) -> u32 {
    estimate_distance_detailed(start, destination).miles
}

/// Same as [`estimate_distance`], also reporting the normalized keys and the tier used.
pub fn estimate_distance_detailed(start: &str, destination: &str) -> DistanceEstimate {
    let start_city = city_key(start);
    let destination_city = city_key(destination);

    let (miles, tier) = resolve(&start_city, &destination_city);
    debug!(
        "Distance '{}' -> '{}': {} miles ({})",
        start_city, destination_city, miles, tier
    );

    DistanceEstimate {
        miles,
        tier,
        start_city,
        destination_city,
    }
}

fn city_key(raw: &str) -> String {
    extract_city_name(raw).to_lowercase().trim().to_string()
}

fn resolve(start_city: &str, destination_city: &str) -> (u32, MatchTier) {
    if let Some(miles) = lookup_distance(start_city, destination_city) {
        return (miles, MatchTier::Exact);
    }
    if let Some(miles) = lookup_distance(destination_city, start_city) {
        return (miles, MatchTier::Reverse);
    }
    if let Some((miles, hits)) = partial_match_average(start_city, destination_city) {
        return (miles, MatchTier::PartialMatch { hits });
    }
    (
        synthetic_distance(start_city, destination_city),
        MatchTier::Synthetic,
    )
}

/// Known cities that overlap `query` as a substring in either direction.
fn overlapping_cities(query: &str) -> Vec<&'static str> {
    // An empty query is a substring of every key.
    if query.is_empty() {
        return Vec::new();
    }
    known_cities()
        .filter(|city| query.contains(*city) || city.contains(query))
        .collect()
}

/// Mean distance over all overlapping city pairs, with the number of pairs found.
pub fn partial_match_average(start_city: &str, destination_city: &str) -> Option<(u32, usize)> {
    let start_matches = overlapping_cities(start_city);
    let destination_matches = overlapping_cities(destination_city);

    let mut total: u64 = 0;
    let mut hits: usize = 0;
    for from in &start_matches {
        for to in &destination_matches {
            if let Some(miles) = lookup_distance(from, to).or_else(|| lookup_distance(to, from)) {
                total += u64::from(miles);
                hits += 1;
            }
        }
    }

    if hits == 0 {
        return None;
    }
    let mean = (total as f64 / hits as f64).round() as u32;
    debug!(
        "Partial match: {:?} x {:?} -> {} pair(s), mean {} miles",
        start_matches, destination_matches, hits, mean
    );
    Some((mean, hits))
}

/// Last-resort estimate for cities the table knows nothing about.
///
/// The band comes from the first characters of both names, the position in the
/// band from their lengths. Characters and lengths are UTF-16 code units; an
/// empty name counts as starting with `'a'`.
pub fn synthetic_distance(start_city: &str, destination_city: &str) -> u32 {
    let first_unit = |s: &str| u32::from(s.encode_utf16().next().unwrap_or(u16::from(b'a')));
    let band_index =
        (first_unit(start_city) + first_unit(destination_city)) as usize % DISTANCE_BANDS.len();

    let start_len = start_city.encode_utf16().count() % 100;
    let destination_len = destination_city.encode_utf16().count() % 100;
    let seed = ((start_len * 13 + destination_len * 17) % 100) as f64 / 100.0;

    DISTANCE_BANDS[band_index].at(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_and_reverse_pairs() {
        assert_eq!(estimate_distance("New York", "Boston"), 215);
        assert_eq!(estimate_distance("Boston", "New York"), 215);
        assert_eq!(estimate_distance("Paris", "London"), 285);
        assert_eq!(estimate_distance("london", "paris"), 285);

        assert_eq!(estimate_distance_detailed("New York", "Boston").tier, MatchTier::Exact);
        assert_eq!(estimate_distance_detailed("Boston", "New York").tier, MatchTier::Reverse);
    }

    #[test]
    fn test_address_noise() {
        let estimate = estimate_distance_detailed(
            "123 Main St, New York, NY 10001",
            "456 Oak Ave, Boston, MA 02101",
        );
        assert_eq!(estimate.miles, 215);
        assert_eq!(estimate.start_city, "main new york");
        assert_eq!(estimate.destination_city, "oak boston");
        // The leftover street name keeps this off the exact tier
        assert_eq!(estimate.tier, MatchTier::PartialMatch { hits: 1 });
    }

    #[test]
    fn test_clean_addresses_hit_exact_tier() {
        let estimate = estimate_distance_detailed("Seattle, WA 98101", "Portland, OR");
        assert_eq!(estimate.miles, 175);
        assert_eq!(estimate.tier, MatchTier::Exact);
    }

    #[test]
    fn test_partial_match_single_hit() {
        let estimate = estimate_distance_detailed("Greater New York area", "Boston metro");
        assert_eq!(estimate.miles, 215);
        assert_eq!(estimate.tier, MatchTier::PartialMatch { hits: 1 });
    }

    #[test]
    fn test_partial_match_averages_hits() {
        // paris -> london 285, paris -> berlin 655
        let estimate = estimate_distance_detailed("Paris", "London Berlin");
        assert_eq!(estimate.miles, 470);
        assert_eq!(estimate.tier, MatchTier::PartialMatch { hits: 2 });
    }

    #[test]
    fn test_partial_match_rounds_mean() {
        // paris -> london 285 (reverse), london -> amsterdam 360, no london/berlin row
        assert_eq!(
            partial_match_average("london", "paris amsterdam berlin"),
            Some((323, 2))
        );
        assert_eq!(partial_match_average("", "paris"), None);
    }

    #[test]
    fn test_synthetic_fallback_formula() {
        // ('z' + 'q') % 6 = 1 -> [60, 120]; (5 * 13 + 6 * 17) % 100 = 67
        let estimate = estimate_distance_detailed("Zzyzx", "Qwerty");
        assert_eq!(estimate.tier, MatchTier::Synthetic);
        assert_eq!(estimate.miles, 60 + (0.67f64 * 60.0).round() as u32);
        assert_eq!(estimate.miles, 100);
    }

    #[test]
    fn test_synthetic_fallback_bounds() {
        let queries = [
            ("Zzyzx", "Qwerty"),
            ("Atlantis", "El Dorado"),
            ("Springfield", "Shelbyville"),
            ("Gotham", "Metropolis"),
            ("Xanadu", "Shangri-La"),
            ("", "Nowhere"),
        ];
        for (start, destination) in queries {
            let estimate = estimate_distance_detailed(start, destination);
            assert_eq!(estimate.tier, MatchTier::Synthetic, "{} -> {}", start, destination);
            assert!((20..=3000).contains(&estimate.miles));
            assert_eq!(
                estimate.miles,
                synthetic_distance(&estimate.start_city, &estimate.destination_city)
            );
        }
    }

    #[test]
    fn test_empty_inputs() {
        // ('a' + 'a') % 6 = 2 -> [120, 250]; seed 0
        let estimate = estimate_distance_detailed("", "");
        assert_eq!(estimate.tier, MatchTier::Synthetic);
        assert_eq!(estimate.miles, 120);
        assert_eq!(estimate_distance("   ", ", ,"), 120);
    }

    #[test]
    fn test_deterministic() {
        let inputs = [
            ("New York", "Boston"),
            ("Greater New York area", "Boston metro"),
            ("Zzyzx", "Qwerty"),
            ("", ""),
            ("Köln", "Zürich"),
        ];
        for (start, destination) in inputs {
            let first = estimate_distance(start, destination);
            for _ in 0..5 {
                assert_eq!(estimate_distance(start, destination), first);
            }
        }
    }
}
