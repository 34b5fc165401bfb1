// src/estimation/estimator.rs
use crate::estimation::distance::{estimate_distance, estimate_distance_detailed};
use crate::models::DistanceEstimate;

/// Source of trip distances in miles.
///
/// Callers depend on this rather than on the static table so a routing
/// service can be dropped in later.
pub trait DistanceEstimator {
    fn estimate(&self, start: &str, destination: &str) -> u32;
}

/// Estimator backed by the embedded city distance table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTableEstimator;

impl StaticTableEstimator {
    pub fn estimate_detailed(&self, start: &str, destination: &str) -> DistanceEstimate {
        estimate_distance_detailed(start, destination)
    }
}

impl DistanceEstimator for StaticTableEstimator {
    fn estimate(&self, start: &str, destination: &str) -> u32 {
        estimate_distance(start, destination)
    }
}

impl<F> DistanceEstimator for F
where
    F: Fn(&str, &str) -> u32,
{
    fn estimate(&self, start: &str, destination: &str) -> u32 {
        self(start, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_round_trip(estimator: &dyn DistanceEstimator, a: &str, b: &str) -> u32 {
        estimator.estimate(a, b) + estimator.estimate(b, a)
    }

    #[test]
    fn test_static_table_estimator() {
        let estimator = StaticTableEstimator;
        assert_eq!(estimator.estimate("Paris", "London"), 285);
        assert_eq!(total_round_trip(&estimator, "New York", "Boston"), 430);
        assert_eq!(estimator.estimate_detailed("Paris", "London").miles, 285);
    }

    #[test]
    fn test_closure_can_stand_in() {
        let fixed = |_: &str, _: &str| 42u32;
        assert_eq!(total_round_trip(&fixed, "anywhere", "elsewhere"), 84);
    }
}
