// src/utils/estimator_config.rs

use log::info;
use std::env;

/// Share of rated range a trip may use and still count as comfortable.
pub const DEFAULT_COMFORTABLE_RANGE_RATIO: f64 = 0.8;

/// Configuration for trip estimation, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorConfig {
    /// Comfortable share of a vehicle's rated range, in `(0, 1]`
    pub comfortable_range_ratio: f64,
    /// Vehicle used when none is given on the command line
    pub default_vehicle: Option<String>,
    /// Whether to log which estimation tier resolved a query
    pub log_tiers: bool,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            comfortable_range_ratio: DEFAULT_COMFORTABLE_RANGE_RATIO,
            default_vehicle: None,
            log_tiers: true,
        }
    }
}

impl EstimatorConfig {
    /// Create estimator configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            comfortable_range_ratio: sanitize_range_ratio(
                env::var("EV_COMFORTABLE_RANGE_RATIO")
                    .unwrap_or_else(|_| DEFAULT_COMFORTABLE_RANGE_RATIO.to_string())
                    .parse()
                    .unwrap_or(DEFAULT_COMFORTABLE_RANGE_RATIO),
            ),
            default_vehicle: env::var("EV_DEFAULT_VEHICLE")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            log_tiers: env::var("EV_LOG_TIERS")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
        }
    }

    pub fn should_log_tiers(&self) -> bool {
        self.log_tiers
    }

    pub fn log_config(&self) {
        info!(
            "⚙️  Estimator config: comfortable ratio {:.2}, default vehicle {}, tier logging {}",
            self.comfortable_range_ratio,
            self.default_vehicle.as_deref().unwrap_or("none"),
            if self.log_tiers { "on" } else { "off" }
        );
    }
}

/// Clamps a ratio into `(0, 1]`; non-positive or NaN values fall back to the default.
pub fn sanitize_range_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() || ratio <= 0.0 {
        DEFAULT_COMFORTABLE_RANGE_RATIO
    } else {
        ratio.min(1.0)
    }
}

/// Environment variable configuration example
pub fn print_env_config_example() {
    println!("# EV Range Estimator Configuration");
    println!("# Set these environment variables (or put them in .env):");
    println!();
    println!("# Share of rated range considered comfortable (default: 0.8)");
    println!("export EV_COMFORTABLE_RANGE_RATIO=0.8");
    println!();
    println!("# Vehicle used when --vehicle is not given (default: unset)");
    println!("export EV_DEFAULT_VEHICLE=\"Tesla Model 3\"");
    println!();
    println!("# Log which estimation tier resolved each query (default: true)");
    println!("export EV_LOG_TIERS=true");
}
