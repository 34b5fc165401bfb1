// src/utils/env.rs
use log::{debug, info, warn};
use std::path::Path;

/// Loads the first `.env` file found in the usual locations. Variables
/// already set in the process environment win.
pub fn load_env() {
    let env_paths = [".env", ".env.local", "../.env"];
    for path in env_paths.iter() {
        if Path::new(path).exists() {
            match dotenv::from_path(path) {
                Ok(()) => {
                    info!("Loaded environment variables from {}", path);
                    return;
                }
                Err(e) => warn!("Failed to load environment from {}: {}", path, e),
            }
        }
    }
    debug!("No .env file found, using process environment only");
}
