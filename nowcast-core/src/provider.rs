use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::model::{FetchError, QueryTarget, WeatherReport};

const WEATHER_API_BASE: &str = "https://api.weatherapi.com/v1";

/// Client for WeatherAPI.com's `current.json` endpoint.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, WEATHER_API_BASE.to_string())
    }

    /// Client pointed at an alternate endpoint, used by tests to target a
    /// mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    /// Fetch current conditions for one query target.
    ///
    /// A single attempt, no retries: any failure is terminal for this call
    /// and maps onto one of the `FetchError` banner messages.
    pub async fn current(&self, target: &QueryTarget) -> Result<WeatherReport, FetchError> {
        let url = format!("{}/current.json", self.base_url);
        let query = target.query_value();

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", query.as_str())])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            debug!(%status, q = %query, "weatherapi returned non-success status");
            return Err(FetchError::BadStatus);
        }

        let body = res.text().await?;
        let parsed: ApiReply = serde_json::from_str(&body)?;

        let reply = match parsed {
            ApiReply::Current(reply) => reply,
            ApiReply::Error(err) => return Err(FetchError::Api { message: err.error.message }),
        };

        // A by-name query must come back naming the city that was asked for;
        // coordinate queries accept whatever the provider reverse-geocoded.
        if let Some(requested) = target.requested_city() {
            if reply.location.name.to_lowercase() != requested.to_lowercase() {
                return Err(FetchError::LocationMismatch);
            }
        }

        Ok(WeatherReport {
            location_name: reply.location.name,
            country: reply.location.country,
            condition: reply.current.condition.text,
            icon_url: reply.current.condition.icon,
            temperature_c: reply.current.temp_c,
        })
    }
}

/// Either shape the provider answers with on a 2xx: the payload, or an
/// error object carried in the body.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiReply {
    Current(CurrentReply),
    Error(ErrorReply),
}

#[derive(Debug, Deserialize)]
struct CurrentReply {
    location: ApiLocation,
    current: ApiCurrent,
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct ApiCurrent {
    temp_c: f64,
    condition: ApiCondition,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    text: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct ErrorReply {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_parses_payload_shape() {
        let body = r#"{
            "location": { "name": "Paris", "country": "France" },
            "current": {
                "temp_c": 18.5,
                "condition": {
                    "text": "Partly cloudy",
                    "icon": "//cdn.weatherapi.com/weather/64x64/day/116.png"
                }
            }
        }"#;

        let parsed: ApiReply = serde_json::from_str(body).expect("payload shape parses");
        match parsed {
            ApiReply::Current(reply) => {
                assert_eq!(reply.location.name, "Paris");
                assert_eq!(reply.location.country, "France");
                assert_eq!(reply.current.temp_c, 18.5);
                assert_eq!(reply.current.condition.text, "Partly cloudy");
            }
            ApiReply::Error(_) => panic!("payload body must not parse as an error reply"),
        }
    }

    #[test]
    fn reply_parses_error_shape() {
        let body = r#"{ "error": { "code": 1006, "message": "No matching location found." } }"#;

        let parsed: ApiReply = serde_json::from_str(body).expect("error shape parses");
        match parsed {
            ApiReply::Error(err) => {
                assert_eq!(err.error.message, "No matching location found.");
            }
            ApiReply::Current(_) => panic!("error body must not parse as a payload reply"),
        }
    }
}
