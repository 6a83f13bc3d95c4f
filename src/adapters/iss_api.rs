use crate::domain::model::{IssPosition, Location};
use crate::domain::ports::IssLocator;
use crate::utils::error::{NotifierError, Result};
use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct IssNowResponse {
    iss_position: IssPositionPayload,
    timestamp: Option<i64>,
}

// open-notify sends the coordinates as strings
#[derive(Debug, Deserialize)]
struct IssPositionPayload {
    latitude: String,
    longitude: String,
}

/// Client for the open-notify `iss-now` endpoint.
#[derive(Debug, Clone)]
pub struct OpenNotifyLocator {
    client: Client,
    endpoint: String,
}

impl OpenNotifyLocator {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    async fn fetch(&self) -> Result<IssPosition> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let body = response.error_for_status()?.text().await?;
        parse_iss_now(&body)
    }
}

fn parse_iss_now(body: &str) -> Result<IssPosition> {
    let payload: IssNowResponse = serde_json::from_str(body)?;

    let latitude = parse_coordinate("latitude", &payload.iss_position.latitude)?;
    let longitude = parse_coordinate("longitude", &payload.iss_position.longitude)?;
    let timestamp = payload
        .timestamp
        .and_then(|secs| DateTime::from_timestamp(secs, 0));

    Ok(IssPosition {
        location: Location::new(latitude, longitude),
        timestamp,
    })
}

fn parse_coordinate(field: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| NotifierError::ResponseError {
            source_name: "iss-now".to_string(),
            message: format!("{} is not a number: {:?}", field, raw),
        })
}

#[async_trait]
impl IssLocator for OpenNotifyLocator {
    async fn current_position(&self) -> Result<IssPosition> {
        self.fetch().await.map_err(|e| {
            tracing::error!("Error fetching ISS position: {}", e);
            e
        })
    }
}
