// src/utils/logging.rs - Logging helpers for estimation runs
use log::{debug, info, warn};
use std::time::Instant;

use crate::models::{DistanceEstimate, MatchTier, TripAssessment, TripFeasibility, VehicleModel};

#[derive(Clone)]
pub struct EstimationLogger {
    start_time: Instant,
}

impl Default for EstimationLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl EstimationLogger {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn log_start(&self, start: &str, destination: &str) {
        info!("[ESTIMATE] 🚀 Estimating distance: '{}' -> '{}'", start, destination);
    }

    pub fn log_estimate(&self, estimate: &DistanceEstimate) {
        debug!(
            "[ESTIMATE] 🔎 Normalized cities: '{}' -> '{}'",
            estimate.start_city, estimate.destination_city
        );
        match estimate.tier {
            MatchTier::Synthetic => warn!(
                "[ESTIMATE] ⚠️  No known city matched, using synthetic estimate of {} miles",
                estimate.miles
            ),
            tier => info!("[ESTIMATE] 📍 {} miles via {}", estimate.miles, tier),
        }
    }

    pub fn log_trip(&self, vehicle: &VehicleModel, assessment: &TripAssessment) {
        let emoji = match assessment.feasibility {
            TripFeasibility::Comfortable => "✅",
            TripFeasibility::Tight => "⚠️",
            TripFeasibility::RequiresCharging => "🔌",
        };
        info!(
            "[TRIP] {} {} ({} mi rated): {}{}",
            emoji,
            vehicle.full_name(),
            vehicle.range_miles,
            assessment.feasibility,
            if assessment.charging_stops > 0 {
                format!(", {} charging stop(s)", assessment.charging_stops)
            } else {
                String::new()
            }
        );
    }

    pub fn log_completion(&self) {
        debug!(
            "[ESTIMATE] ✅ Done in {:.1}ms",
            self.start_time.elapsed().as_secs_f64() * 1000.0
        );
    }
}
