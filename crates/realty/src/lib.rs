pub mod config;
pub mod error;
pub mod finance;
pub mod listings;
pub mod telemetry;
pub mod validation;
