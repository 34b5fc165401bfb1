pub mod data;
pub mod estimation;
pub mod models;
pub mod utils;

// Re-export the estimator surface for clean API
pub use data::vehicles::{find_vehicle, VEHICLE_MODELS};
pub use estimation::city_name::extract_city_name;
pub use estimation::distance::{estimate_distance, estimate_distance_detailed};
pub use estimation::estimator::{DistanceEstimator, StaticTableEstimator};
pub use estimation::trip::assess_trip;
