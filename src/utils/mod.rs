pub mod env;
pub mod estimator_config;
pub mod logging;
