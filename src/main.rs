use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;

use ev_range_lib::estimation::trip::assess_trip;
use ev_range_lib::models::{TripReport, VehicleModel};
use ev_range_lib::utils::env::load_env;
use ev_range_lib::utils::estimator_config::{print_env_config_example, EstimatorConfig};
use ev_range_lib::utils::logging::EstimationLogger;
use ev_range_lib::{find_vehicle, StaticTableEstimator, VEHICLE_MODELS};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct EstimateArgs {
    /// Starting location (city or full address)
    #[arg(long, required_unless_present_any = ["list_vehicles", "print_config"])]
    start: Option<String>,

    /// Destination (city or full address)
    #[arg(long, required_unless_present_any = ["list_vehicles", "print_config"])]
    destination: Option<String>,

    /// Vehicle model to check the trip against (falls back to EV_DEFAULT_VEHICLE)
    #[arg(long)]
    vehicle: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// List supported vehicles and exit
    #[arg(long)]
    list_vehicles: bool,

    /// Print the supported environment variables and exit
    #[arg(long)]
    print_config: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = EstimateArgs::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
    load_env();

    if args.print_config {
        print_env_config_example();
        return Ok(());
    }

    if args.list_vehicles {
        for vehicle in VEHICLE_MODELS {
            println!("{:<32} {:>4} mi", vehicle.full_name(), vehicle.range_miles);
        }
        return Ok(());
    }

    let config = EstimatorConfig::from_env();
    config.log_config();

    let start = args.start.context("--start is required")?;
    let destination = args.destination.context("--destination is required")?;

    let vehicle: Option<VehicleModel> = match args.vehicle.or_else(|| config.default_vehicle.clone()) {
        Some(query) => Some(*find_vehicle(&query).ok_or_else(|| {
            anyhow!(
                "Unknown vehicle model '{}'. Use --list-vehicles to see supported models",
                query
            )
        })?),
        None => None,
    };

    let logger = EstimationLogger::new();
    logger.log_start(&start, &destination);

    let estimator = StaticTableEstimator;
    let estimate = estimator.estimate_detailed(&start, &destination);
    if config.should_log_tiers() {
        logger.log_estimate(&estimate);
    }

    let assessment = vehicle.as_ref().map(|v| {
        let assessment = assess_trip(estimate.miles, v.range_miles, config.comfortable_range_ratio);
        logger.log_trip(v, &assessment);
        assessment
    });

    let report = TripReport {
        estimate,
        vehicle,
        assessment,
    };

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize trip report")?;
        println!("{}", json);
    } else {
        print_report(&report);
    }

    logger.log_completion();
    info!("Estimation finished");
    Ok(())
}

fn print_report(report: &TripReport) {
    let estimate = &report.estimate;
    println!(
        "Estimated distance: {} miles ({} -> {}, {})",
        estimate.miles,
        display_city(&estimate.start_city),
        display_city(&estimate.destination_city),
        estimate.tier
    );

    if let (Some(vehicle), Some(assessment)) = (&report.vehicle, &report.assessment) {
        println!("Vehicle: {} ({} mi rated)", vehicle.full_name(), vehicle.range_miles);
        if assessment.range_margin_miles >= 0 {
            println!(
                "Trip: {}, {} miles of range to spare",
                assessment.feasibility, assessment.range_margin_miles
            );
        } else {
            println!(
                "Trip: {}, {} stop(s) needed",
                assessment.feasibility, assessment.charging_stops
            );
        }
    }
}

fn display_city(city: &str) -> &str {
    if city.is_empty() {
        "unknown"
    } else {
        city
    }
}
