use serde::Deserialize;

use crate::error::ForecastError;

/// Subset of a geocoding API reply.
///
/// `status` and `error_message` are set by the service on failures such as
/// `ZERO_RESULTS` or `REQUEST_DENIED`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Vec<GeocodingResult>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One match for the queried address.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeocodingResult {
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Geometry {
    #[serde(default)]
    pub location: Option<Location>,
}

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl GeocodingResponse {
    /// Location of the top match. Further matches are ignored.
    pub fn first_location(&self) -> Result<Location, ForecastError> {
        let first = self.results.first().ok_or_else(|| ForecastError::NoResults {
            status: self.status.clone(),
            message: self.error_message.clone(),
        })?;

        first
            .geometry
            .as_ref()
            .and_then(|geometry| geometry.location)
            .ok_or(ForecastError::MissingLocation)
    }
}
