use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config::{Endpoints, Location},
    format::icon_url,
    source::{WeatherSource, truncate_body},
};

/// Only the `current` block is used.
const EXCLUDE: &str = "hourly,minutely,alerts,daily";
const UNITS: &str = "imperial";

/// Client for the OpenWeather One Call endpoint and its icon host.
#[derive(Debug, Clone)]
pub struct OneCallClient {
    api_key: String,
    endpoints: Endpoints,
    http: Client,
}

impl OneCallClient {
    pub fn new(api_key: String, endpoints: Endpoints) -> Self {
        Self {
            api_key,
            endpoints,
            http: Client::new(),
        }
    }

    async fn get(&self, what: &str, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let res = request
            .send()
            .await
            .with_context(|| format!("Failed to send {what} request to OpenWeather"))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(anyhow!(
                "OpenWeather {what} request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        Ok(res)
    }
}

#[async_trait]
impl WeatherSource for OneCallClient {
    async fn fetch_current(&self, location: &Location) -> Result<String> {
        let lat = location.latitude.to_string();
        let lon = location.longitude.to_string();

        tracing::debug!(
            url = %self.endpoints.onecall_url,
            %lat,
            %lon,
            "fetching current conditions"
        );

        let request = self.http.get(&self.endpoints.onecall_url).query(&[
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("exclude", EXCLUDE),
            ("units", UNITS),
            ("appid", self.api_key.as_str()),
        ]);

        let body = self
            .get("current conditions", request)
            .await?
            .text()
            .await
            .context("Failed to read OpenWeather response body")?;

        tracing::info!(bytes = body.len(), "received current conditions");
        Ok(body)
    }

    async fn fetch_icon(&self, icon: &str) -> Result<Vec<u8>> {
        let url = icon_url(&self.endpoints.icon_base_url, icon);
        tracing::debug!(%url, "fetching icon");

        let bytes = self
            .get("icon", self.http.get(&url))
            .await?
            .bytes()
            .await
            .with_context(|| format!("Failed to read icon body from {url}"))?;

        tracing::info!(icon, bytes = bytes.len(), "received icon");
        Ok(bytes.to_vec())
    }
}
