// src/models/mod.rs
pub mod distance;
pub mod trip;
pub mod vehicle;

pub use distance::{DistanceBand, DistanceEstimate, MatchTier};
pub use trip::{TripAssessment, TripFeasibility, TripReport};
pub use vehicle::VehicleModel;
