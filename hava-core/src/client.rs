use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::model::WeatherSnapshot;

const BASE_URL: &str = "https://api.weatherapi.com/v1/current.json";

/// Condition texts are requested in Turkish.
const LANG: &str = "tr";

/// Why a lookup failed. Callers present all variants identically; the split
/// only matters for logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach the weather service")]
    Http(#[from] reqwest::Error),

    #[error("weather service returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to parse weather service response")]
    Parse(#[from] serde_json::Error),
}

/// Anything that can resolve a city name to current conditions.
#[async_trait]
pub trait WeatherSource: Send + Sync + std::fmt::Debug {
    /// `city` must be non-blank; blank input is rejected upstream before a
    /// request is ever built.
    async fn current(&self, city: &str) -> Result<WeatherSnapshot, FetchError>;
}

/// [`WeatherSource`] backed by weatherapi.com's `current.json` endpoint.
///
/// One GET per lookup, no retry, no timeout beyond the client default, no
/// cancellation of an earlier request still in flight.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    api_key: String,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(api_key: String) -> Self {
        Self { api_key, http: Client::new() }
    }
}

#[async_trait]
impl WeatherSource for WeatherApiClient {
    async fn current(&self, city: &str) -> Result<WeatherSnapshot, FetchError> {
        debug!(%city, "requesting current conditions");

        let res = self
            .http
            .get(BASE_URL)
            .query(&[("key", self.api_key.as_str()), ("q", city), ("lang", LANG)])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        let parsed: WaResponse = serde_json::from_str(&body)?;

        Ok(parsed.into())
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    feelslike_c: f64,
    humidity: u8,
    wind_kph: f64,
    vis_km: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

impl From<WaResponse> for WeatherSnapshot {
    fn from(parsed: WaResponse) -> Self {
        WeatherSnapshot {
            city: parsed.location.name,
            country: parsed.location.country,
            temp_c: parsed.current.temp_c,
            condition: parsed.current.condition.text,
            wind_kph: parsed.current.wind_kph,
            humidity: parsed.current.humidity,
            vis_km: parsed.current.vis_km,
            feelslike_c: parsed.current.feelslike_c,
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "location": { "name": "Istanbul", "country": "Turkey",
                      "region": "Istanbul", "localtime": "2024-03-02 14:30" },
        "current": {
            "temp_c": 11.0,
            "feelslike_c": 9.4,
            "humidity": 71,
            "wind_kph": 24.1,
            "vis_km": 10.0,
            "condition": { "text": "Parçalı bulutlu", "code": 1003 }
        }
    }"#;

    #[test]
    fn response_body_maps_to_snapshot() {
        let parsed: WaResponse = serde_json::from_str(FIXTURE).expect("fixture parses");
        let snapshot = WeatherSnapshot::from(parsed);

        assert_eq!(snapshot.city, "Istanbul");
        assert_eq!(snapshot.country, "Turkey");
        assert_eq!(snapshot.temp_c, 11.0);
        assert_eq!(snapshot.condition, "Parçalı bulutlu");
        assert_eq!(snapshot.wind_kph, 24.1);
        assert_eq!(snapshot.humidity, 71);
        assert_eq!(snapshot.vis_km, 10.0);
        assert_eq!(snapshot.feelslike_c, 9.4);
        assert_eq!(snapshot.display_name(), "Istanbul, Turkey");
    }

    #[test]
    fn missing_fields_fail_the_parse() {
        let err = serde_json::from_str::<WaResponse>(r#"{"location":{}}"#).unwrap_err();
        let _: FetchError = err.into();
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "x".repeat(500);
        let truncated = truncate_body(&body);

        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));
    }
}
