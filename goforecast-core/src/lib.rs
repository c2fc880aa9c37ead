//! Core library for the `goforecast` CLI.
//!
//! This crate defines:
//! - Geocoding of a free-text address into coordinates
//! - API key resolution and the `.goforecast` state file
//! - The forecast provider abstraction and the forecast.io client
//! - Rendering of current conditions
//!
//! It is used by `goforecast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod geocode;
pub mod lookup;
pub mod model;
pub mod provider;
pub mod render;
pub mod state;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use error::{ForecastError, StateFileError};
pub use geocode::{GeocodeEndpoint, GeocodingClient, GeocodingQuery, GeocodingResponse, Location};
pub use lookup::LookupService;
pub use model::{DataPoint, Forecast, ForecastRequest, Units};
pub use provider::ForecastProvider;
pub use render::render_forecast;
pub use state::{KeyResolver, PersistedState, StateStore};
