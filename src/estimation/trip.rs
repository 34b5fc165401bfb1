// src/estimation/trip.rs
use crate::models::{TripAssessment, TripFeasibility};
use crate::utils::estimator_config::sanitize_range_ratio;

/// Compares a trip length with a vehicle's rated range.
///
/// Up to `comfortable_range_ratio` of the range is comfortable, up to the full
/// range is tight, anything longer needs charging. Stops are counted in legs
/// of `range * ratio` miles.
pub fn assess_trip(
    distance_miles: u32,
    range_miles: u32,
    comfortable_range_ratio: f64,
) -> TripAssessment {
    let ratio = sanitize_range_ratio(comfortable_range_ratio);
    let comfortable_limit = f64::from(range_miles) * ratio;
    let distance = f64::from(distance_miles);

    let (feasibility, charging_stops) = if distance <= comfortable_limit {
        (TripFeasibility::Comfortable, 0)
    } else if distance_miles <= range_miles {
        (TripFeasibility::Tight, 0)
    } else {
        let leg = comfortable_limit.max(1.0);
        let legs = (distance / leg).ceil() as u32;
        (TripFeasibility::RequiresCharging, legs.saturating_sub(1).max(1))
    };

    TripAssessment {
        distance_miles,
        range_miles,
        feasibility,
        range_margin_miles: i64::from(range_miles) - i64::from(distance_miles),
        charging_stops,
    }
}
