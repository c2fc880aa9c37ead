//! Address to coordinates, via the Google geocoding JSON endpoint.

mod response;

use std::collections::BTreeMap;

use reqwest::{Client, StatusCode, Url, redirect::Policy};
use tracing::{debug, error, info};

use crate::error::ForecastError;

pub use response::{GeocodingResponse, GeocodingResult, Geometry, Location};

pub const GEOCODE_HOST: &str = "maps.googleapis.com";
pub const GEOCODE_PATH: &str = "/maps/api/geocode/json";
pub const DEFAULT_GEOCODE_SCHEME: &str = "http";

/// Query parameters for one geocoding request, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeocodingQuery {
    params: BTreeMap<String, Vec<String>>,
}

impl GeocodingQuery {
    /// Parameters asking the service to resolve `address`.
    pub fn for_address(address: &str) -> Self {
        [("address", address), ("sensor", "false")]
            .into_iter()
            .collect()
    }

    /// All values recorded for `name`, in insertion order.
    pub fn get(&self, name: &str) -> &[String] {
        self.params.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().flat_map(|(name, values)| {
            values
                .iter()
                .map(move |value| (name.as_str(), value.as_str()))
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for GeocodingQuery {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, value) in iter {
            params.entry(name.into()).or_default().push(value.into());
        }
        Self { params }
    }
}

/// Scheme and host the geocoding request goes to. The path is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeEndpoint {
    scheme: String,
    host: String,
}

impl Default for GeocodeEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_GEOCODE_SCHEME, GEOCODE_HOST)
    }
}

impl GeocodeEndpoint {
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
        }
    }

    /// Full request URL. An empty query produces no `?` at all.
    pub fn url(&self, query: &GeocodingQuery) -> Result<Url, ForecastError> {
        let raw = format!("{}://{}{}", self.scheme, self.host, GEOCODE_PATH);
        let mut url = Url::parse(&raw).map_err(|e| ForecastError::MalformedUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }

        Ok(url)
    }
}

/// Build a geocoding URL against the public endpoint.
pub fn build_geocoding_url(scheme: &str, query: &GeocodingQuery) -> Result<Url, ForecastError> {
    GeocodeEndpoint::new(scheme, GEOCODE_HOST).url(query)
}

/// HTTP client suited to geocoding: redirects are reported, not followed.
pub fn http_client() -> reqwest::Result<Client> {
    Client::builder().redirect(Policy::none()).build()
}

/// Only 200 and 201 count as success.
pub fn check_status(status: StatusCode) -> Result<(), ForecastError> {
    match status {
        StatusCode::OK | StatusCode::CREATED => Ok(()),
        other => Err(ForecastError::UnexpectedStatus {
            code: other.as_u16(),
        }),
    }
}

/// Parse a geocoding body, rejecting replies with no results.
pub fn decode_geocoding(body: &[u8]) -> Result<GeocodingResponse, ForecastError> {
    let parsed: GeocodingResponse = serde_json::from_slice(body).map_err(ForecastError::Decode)?;

    if parsed.results.is_empty() {
        return Err(ForecastError::NoResults {
            status: parsed.status,
            message: parsed.error_message,
        });
    }

    Ok(parsed)
}

#[derive(Debug, Clone)]
pub struct GeocodingClient {
    http: Client,
}

impl GeocodingClient {
    pub fn new(http: Client) -> Self {
        Self { http }
    }

    pub async fn lookup(&self, url: &Url) -> Result<GeocodingResponse, ForecastError> {
        info!("Fetching geocoding data: {}", url);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ForecastError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if let Err(err) = check_status(status) {
            error!("Geocoding request failed: {}", status);
            return Err(err);
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ForecastError::Transport {
                url: url.to_string(),
                source,
            })?;

        let parsed = decode_geocoding(&body)?;
        debug!(
            results = parsed.results.len(),
            top = ?parsed.results[0].formatted_address,
            "Geocoding data fetched"
        );
        Ok(parsed)
    }
}
