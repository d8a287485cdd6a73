//! Core library for the `nowcast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com client and response validation
//! - The machine-location source used for the startup fetch
//! - Shared domain models (query targets, reports, errors)
//!
//! It is used by `nowcast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod location;
pub mod model;
pub mod provider;

pub use config::Config;
pub use location::{IpLocationSource, LocationSource};
pub use model::{EmptyCityName, FetchError, LocationError, QueryTarget, WeatherReport};
pub use provider::WeatherApiClient;
