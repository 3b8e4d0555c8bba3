use crate::app_config::HttpPositioning;
use crate::domain::GeoPoint;
use crate::positioning::{LocationUnavailableError, PositionSource};
use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::{Client, StatusCode, header};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

/// Reads the current position from an HTTP endpoint returning `{"latitude": .., "longitude": ..}`.
#[derive(Debug)]
pub struct HttpPositionSource {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpPositionSource {
    pub fn new(config: &HttpPositioning) -> Result<Self, PositionClientError> {
        Ok(HttpPositionSource {
            client: new_client(config)?,
            url: config.url.clone(),
            timeout: config.timeout,
        })
    }

    async fn fetch(&self) -> Result<GeoPoint, LocationUnavailableError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LocationUnavailableError::Unavailable(e.to_string()))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => return Err(LocationUnavailableError::PermissionDenied),
            StatusCode::NOT_FOUND | StatusCode::NOT_IMPLEMENTED => return Err(LocationUnavailableError::Unsupported),
            status if !status.is_success() => {
                return Err(LocationUnavailableError::Unavailable(format!("unexpected status {}", status)));
            }
            _ => {}
        }

        let position = response
            .json::<PositionResponse>()
            .await
            .map_err(|e| LocationUnavailableError::Unavailable(e.to_string()))?;

        Ok(GeoPoint {
            latitude: position.latitude,
            longitude: position.longitude,
        })
    }
}

#[async_trait]
impl PositionSource for HttpPositionSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn current_position(&self) -> Result<GeoPoint, LocationUnavailableError> {
        debug!("📡 Requesting current position...");

        let position = timeout(self.timeout, self.fetch())
            .await
            .map_err(|_| LocationUnavailableError::Timeout(self.timeout))
            .and_then(|position| position);

        match &position {
            Ok(point) => debug!("📡 Requesting current position... OK, {}", point),
            Err(e) => warn!("📡 Requesting current position... failed, {}", e),
        }
        position
    }
}

#[derive(Debug, Deserialize)]
struct PositionResponse {
    latitude: f64,
    longitude: f64,
}

fn new_client(config: &HttpPositioning) -> Result<Client, PositionClientError> {
    let mut headers = header::HeaderMap::new();
    if let Some(api_key) = &config.api_key {
        let mut api_key_value = HeaderValue::from_str(api_key)?;
        api_key_value.set_sensitive(true);
        headers.insert("x-api-key", api_key_value);
    }

    let client = Client::builder().default_headers(headers).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum PositionClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("position client set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
}
