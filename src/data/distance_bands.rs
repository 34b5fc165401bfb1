use crate::models::DistanceBand;

/// Fallback bands used when no city in the table matches, from very local to international.
pub const DISTANCE_BANDS: [DistanceBand; 6] = [
    DistanceBand::new(20, 60),
    DistanceBand::new(60, 120),
    DistanceBand::new(120, 250),
    DistanceBand::new(250, 500),
    DistanceBand::new(500, 1000),
    DistanceBand::new(1000, 3000),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_are_ordered_and_contiguous() {
        for pair in DISTANCE_BANDS.windows(2) {
            assert!(pair[0].min < pair[0].max);
            assert_eq!(pair[0].max, pair[1].min);
        }
        assert_eq!(DISTANCE_BANDS[0].min, 20);
        assert_eq!(DISTANCE_BANDS[5].max, 3000);
    }
}
