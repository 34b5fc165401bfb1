// src/models/trip.rs
use serde::Serialize;
use std::fmt;

use super::{DistanceEstimate, VehicleModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TripFeasibility {
    /// Fits inside the comfortable share of the rated range.
    Comfortable,
    /// Fits inside the rated range, but without the comfort margin.
    Tight,
    RequiresCharging,
}

impl fmt::Display for TripFeasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TripFeasibility::Comfortable => "comfortable",
            TripFeasibility::Tight => "tight",
            TripFeasibility::RequiresCharging => "requires charging",
        };
        write!(f, "{}", label)
    }
}

/// How a trip of a given length compares to a vehicle's range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TripAssessment {
    pub distance_miles: u32,
    pub range_miles: u32,
    pub feasibility: TripFeasibility,
    /// Rated range left at arrival; negative when the trip is longer than the range.
    pub range_margin_miles: i64,
    pub charging_stops: u32,
}

/// Everything the CLI reports for one query.
#[derive(Debug, Clone, Serialize)]
pub struct TripReport {
    pub estimate: DistanceEstimate,
    pub vehicle: Option<VehicleModel>,
    pub assessment: Option<TripAssessment>,
}
