use tracing::info;

use crate::{
    Config,
    error::ForecastError,
    geocode::{self, GeocodeEndpoint, GeocodingClient, GeocodingQuery},
    model::{Forecast, ForecastRequest},
    provider::{ForecastProvider, provider_from_config},
    state::KeyResolver,
};

/// One address in, one forecast out: geocode, resolve the key, fetch.
#[derive(Debug)]
pub struct LookupService {
    endpoint: GeocodeEndpoint,
    geocoder: GeocodingClient,
    resolver: KeyResolver,
    provider: Box<dyn ForecastProvider>,
}

impl LookupService {
    pub fn new(
        endpoint: GeocodeEndpoint,
        geocoder: GeocodingClient,
        resolver: KeyResolver,
        provider: Box<dyn ForecastProvider>,
    ) -> Self {
        Self {
            endpoint,
            geocoder,
            resolver,
            provider,
        }
    }

    /// Wire up the real services from `config`.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let resolver = KeyResolver::new(config.state_dir()?).with_env_var(&config.api_key_env);

        Ok(Self::new(
            GeocodeEndpoint::new(&config.geocode_scheme, &config.geocode_host),
            GeocodingClient::new(geocode::http_client()?),
            resolver,
            provider_from_config(config)?,
        ))
    }

    /// Run a single lookup, stopping at the first failure.
    pub async fn lookup(&self, address: &str) -> Result<Forecast, ForecastError> {
        if address.trim().is_empty() {
            return Err(ForecastError::MissingArgument("address"));
        }

        let url = self.endpoint.url(&GeocodingQuery::for_address(address))?;
        let location = self.geocoder.lookup(&url).await?.first_location()?;
        info!("Resolved '{}' to {},{}", address, location.lat, location.lng);

        let api_key = self.resolver.resolve()?;
        let request = ForecastRequest::current(api_key, location);

        self.provider
            .get_forecast(&request)
            .await
            .map_err(ForecastError::ForecastFetch)
    }
}
