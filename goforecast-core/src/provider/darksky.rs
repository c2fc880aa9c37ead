use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, info};

use crate::model::{Forecast, ForecastRequest, TIME_NOW};

use super::ForecastProvider;

pub const DEFAULT_FORECAST_BASE_URL: &str = "https://api.forecast.io/forecast";

/// Client for forecast.io and API-compatible services.
#[derive(Debug, Clone)]
pub struct DarkSkyProvider {
    base_url: String,
    http: Client,
}

impl DarkSkyProvider {
    pub fn new(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// `<base>/<key>/<lat>,<lng>[,<time>]?units=<units>`
    fn request_url(&self, request: &ForecastRequest) -> String {
        let mut url = format!(
            "{}/{}/{},{}",
            self.base_url.trim_end_matches('/'),
            request.api_key,
            request.latitude,
            request.longitude
        );
        if request.time != TIME_NOW {
            url.push(',');
            url.push_str(&request.time);
        }
        url.push_str("?units=");
        url.push_str(request.units.as_str());
        url
    }
}

#[async_trait]
impl ForecastProvider for DarkSkyProvider {
    async fn get_forecast(&self, request: &ForecastRequest) -> Result<Forecast> {
        info!(
            "Fetching forecast for {},{} ({})",
            request.latitude, request.longitude, request.units
        );

        let res = self
            .http
            .get(self.request_url(request))
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to send request to the forecast service")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read forecast response body")?;

        if !status.is_success() {
            error!("Failed to fetch forecast: {}", status);
            return Err(anyhow!(
                "forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: Forecast =
            serde_json::from_str(&body).context("Failed to parse forecast JSON")?;
        debug!(summary = %parsed.currently.summary, "Forecast fetched");

        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
