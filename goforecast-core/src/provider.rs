use crate::{
    Config,
    model::{Forecast, ForecastRequest},
    provider::darksky::DarkSkyProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod darksky;

/// Source of forecasts. Errors are passed to the caller untouched.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn get_forecast(&self, request: &ForecastRequest) -> anyhow::Result<Forecast>;
}

/// Construct the forecast provider described by `config`.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn ForecastProvider>> {
    let http = reqwest::Client::builder().build()?;
    Ok(Box::new(DarkSkyProvider::new(
        config.forecast_base_url.clone(),
        http,
    )))
}
