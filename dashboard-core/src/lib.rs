//! Core library for the `dashboard` CLI.
//!
//! This crate defines:
//! - Configuration handling
//! - The JSON fetch helper and the travel data source abstraction
//! - The dashboard aggregator and its domain models
//!
//! It is used by `dashboard-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod fetch;
pub mod model;
pub mod source;

#[cfg(test)]
mod test_server;

pub use config::Config;
pub use dashboard::{get_dashboard_data, try_dashboard};
pub use error::DashboardError;
pub use model::{Airport, DashboardCity, Destination, Resource, Weather};
pub use source::{HttpTravelSource, TravelSource};
