use serde::{Deserialize, Deserializer, Serialize};

use crate::geocode::Location;

/// Time token asking for current conditions.
pub const TIME_NOW: &str = "now";

/// Unit systems understood by the forecast service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Us,
    Si,
    Ca,
    Uk2,
    Auto,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Us => "us",
            Units::Si => "si",
            Units::Ca => "ca",
            Units::Uk2 => "uk2",
            Units::Auto => "auto",
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the forecast service needs for one call.
///
/// Coordinates travel as strings with two decimals, so precision beyond
/// roughly a kilometre is dropped on purpose.
#[derive(Clone, PartialEq)]
pub struct ForecastRequest {
    pub api_key: String,
    pub latitude: String,
    pub longitude: String,
    pub time: String,
    pub units: Units,
}

impl ForecastRequest {
    /// Current conditions, US units, at `location`.
    pub fn current(api_key: String, location: Location) -> Self {
        Self {
            api_key,
            latitude: format!("{:.2}", location.lat),
            longitude: format!("{:.2}", location.lng),
            time: TIME_NOW.to_string(),
            units: Units::Us,
        }
    }
}

// Keeps the key out of logs.
impl std::fmt::Debug for ForecastRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastRequest")
            .field("api_key", &"<redacted>")
            .field("latitude", &self.latitude)
            .field("longitude", &self.longitude)
            .field("time", &self.time)
            .field("units", &self.units)
            .finish()
    }
}

/// Forecast reply. Only current conditions are modelled.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Forecast {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currently: DataPoint,
}

/// A single observation. Absent fields read as zero, like the service's own clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DataPoint {
    #[serde(deserialize_with = "null_as_default")]
    pub time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub temperature: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub pressure: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub wind_speed: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub precip_probability: f64,
}

/// JSON `null` reads as the zero value instead of failing the whole decode.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_request_rounds_to_two_decimals() {
        let request = ForecastRequest::current(
            "KEY".into(),
            Location {
                lat: 37.789_123,
                lng: -122.416_9,
            },
        );

        assert_eq!(request.latitude, "37.79");
        assert_eq!(request.longitude, "-122.42");
        assert_eq!(request.time, "now");
        assert_eq!(request.units, Units::Us);
    }

    #[test]
    fn debug_hides_api_key() {
        let request = ForecastRequest::current("SECRET".into(), Location { lat: 0.0, lng: 0.0 });
        let rendered = format!("{request:?}");

        assert!(!rendered.contains("SECRET"));
        assert!(rendered.contains("0.00"));
    }

    #[test]
    fn units_tokens() {
        assert_eq!(Units::Us.as_str(), "us");
        assert_eq!(Units::Uk2.to_string(), "uk2");
    }

    #[test]
    fn forecast_parses_camel_case_currently() {
        let body = r#"{
            "latitude": 37.79,
            "longitude": -122.42,
            "timezone": "America/Los_Angeles",
            "currently": {
                "time": 1700000000,
                "summary": "Clear",
                "temperature": 61.234,
                "pressure": 1016.5,
                "windSpeed": 4.1,
                "precipProbability": 0.05
            }
        }"#;

        let forecast: Forecast = serde_json::from_str(body).unwrap();

        assert_eq!(forecast.currently.summary, "Clear");
        assert_eq!(forecast.currently.wind_speed, 4.1);
        assert_eq!(forecast.currently.precip_probability, 0.05);
        assert_eq!(forecast.currently.icon, "");
        assert_eq!(forecast.timezone.as_deref(), Some("America/Los_Angeles"));
    }

    #[test]
    fn null_fields_read_as_zero_values() {
        let body = r#"{
            "currently": {
                "summary": null,
                "temperature": 55.5,
                "pressure": null,
                "windSpeed": null,
                "precipProbability": null
            }
        }"#;

        let forecast: Forecast = serde_json::from_str(body).unwrap();

        assert_eq!(forecast.currently.summary, "");
        assert_eq!(forecast.currently.temperature, 55.5);
        assert_eq!(forecast.currently.pressure, 0.0);
        assert_eq!(forecast.currently.precip_probability, 0.0);
    }
}
