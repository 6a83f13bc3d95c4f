use crate::core::time::format_time;
use crate::domain::model::{Location, SunTimes};
use crate::domain::ports::SunTimesOracle;
use crate::utils::error::{NotifierError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SunriseSunsetResponse {
    #[serde(default)]
    results: serde_json::Value,
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SunResults {
    sunrise: String,
    sunset: String,
}

/// Client for api.sunrise-sunset.org, always asking for unformatted
/// (ISO 8601) timestamps.
#[derive(Debug, Clone)]
pub struct SunriseSunsetOracle {
    client: Client,
    endpoint: String,
}

impl SunriseSunsetOracle {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    async fn fetch(&self, location: Location) -> Result<SunTimes> {
        let parameters = [
            ("lat", location.latitude.to_string()),
            ("lng", location.longitude.to_string()),
            ("formatted", "0".to_string()),
        ];

        tracing::debug!(
            "Making API request to: {} (lat={}, lng={})",
            self.endpoint,
            location.latitude,
            location.longitude
        );
        let response = self
            .client
            .get(&self.endpoint)
            .query(&parameters)
            .send()
            .await?;
        tracing::debug!("API response status: {}", response.status());

        let body = response.error_for_status()?.text().await?;
        parse_sun_times(&body)
    }
}

fn parse_sun_times(body: &str) -> Result<SunTimes> {
    let payload: SunriseSunsetResponse = serde_json::from_str(body)?;

    // 舊版 API 不一定帶 status
    if let Some(status) = payload.status.as_deref() {
        if status != "OK" {
            return Err(NotifierError::ResponseError {
                source_name: "sunrise-sunset".to_string(),
                message: format!("status {}", status),
            });
        }
    }

    let results: SunResults = serde_json::from_value(payload.results)?;
    Ok(SunTimes {
        sunrise: format_time(&results.sunrise)?,
        sunset: format_time(&results.sunset)?,
    })
}

#[async_trait]
impl SunTimesOracle for SunriseSunsetOracle {
    async fn sun_times(&self, location: Location) -> Result<SunTimes> {
        self.fetch(location).await.map_err(|e| {
            tracing::error!("Error fetching sunrise and sunset times: {}", e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use httpmock::prelude::*;

    #[test]
    fn test_parse_returns_sunrise_then_sunset() {
        let times = parse_sun_times(
            r#"{"results":{"sunrise":"2025-08-20T03:56:11+00:00","sunset":"2025-08-20T18:26:40+00:00","day_length":52229},"status":"OK"}"#,
        )
        .unwrap();

        assert_eq!(
            times.as_list(),
            [
                Utc.with_ymd_and_hms(2025, 8, 20, 3, 56, 11).unwrap(),
                Utc.with_ymd_and_hms(2025, 8, 20, 18, 26, 40).unwrap(),
            ]
        );
    }

    #[test]
    fn test_parse_normalises_offsets() {
        let times = parse_sun_times(
            r#"{"results":{"sunrise":"2025-08-20T05:56:11+02:00","sunset":"2025-08-20T20:26:40+02:00"}}"#,
        )
        .unwrap();

        assert_eq!(times.sunrise, Utc.with_ymd_and_hms(2025, 8, 20, 3, 56, 11).unwrap());
        assert_eq!(times.sunset, Utc.with_ymd_and_hms(2025, 8, 20, 18, 26, 40).unwrap());
    }

    #[test]
    fn test_parse_rejects_invalid_request_status() {
        let result = parse_sun_times(r#"{"results":"","status":"INVALID_REQUEST"}"#);
        assert!(matches!(result, Err(NotifierError::ResponseError { .. })));
    }

    #[test]
    fn test_parse_rejects_formatted_times() {
        let result = parse_sun_times(
            r#"{"results":{"sunrise":"3:56:11 AM","sunset":"6:26:40 PM"},"status":"OK"}"#,
        );
        assert!(matches!(result, Err(NotifierError::TimeParseError(_))));
    }

    #[tokio::test]
    async fn test_sun_times_from_mock_server() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/json")
                .query_param_exists("lat")
                .query_param_exists("lng")
                .query_param("formatted", "0");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "results": {
                        "sunrise": "2025-08-21T03:57:40+00:00",
                        "sunset": "2025-08-20T18:26:40+00:00"
                    },
                    "status": "OK"
                }));
        });

        let oracle = SunriseSunsetOracle::new(Client::new(), server.url("/json"));
        let times = oracle
            .sun_times(Location::new(52.51641820726436, 13.377693368816862))
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(times.sunrise, Utc.with_ymd_and_hms(2025, 8, 21, 3, 57, 40).unwrap());
        assert_eq!(times.sunset, Utc.with_ymd_and_hms(2025, 8, 20, 18, 26, 40).unwrap());
    }
}
