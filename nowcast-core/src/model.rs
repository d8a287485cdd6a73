use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The resolved input driving one fetch: a user-entered city name or a
/// coordinate pair from the location source.
#[derive(Debug, Clone)]
pub enum QueryTarget {
    City(String),
    Coordinates { latitude: f64, longitude: f64 },
}

impl QueryTarget {
    /// Build a city target from raw prompt input.
    ///
    /// The input is trimmed; empty or whitespace-only input is rejected
    /// before any network activity happens.
    pub fn from_city_input(input: &str) -> Result<Self, EmptyCityName> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(EmptyCityName);
        }
        Ok(QueryTarget::City(trimmed.to_string()))
    }

    /// The provider `q` parameter: the city name verbatim, or `"{lat},{lon}"`.
    /// URL-encoding is left to the HTTP layer.
    pub fn query_value(&self) -> String {
        match self {
            QueryTarget::City(name) => name.clone(),
            QueryTarget::Coordinates { latitude, longitude } => {
                format!("{latitude},{longitude}")
            }
        }
    }

    /// The city name the user asked for, if this was a by-name query.
    /// Coordinate targets return `None` and skip response-name validation.
    pub fn requested_city(&self) -> Option<&str> {
        match self {
            QueryTarget::City(name) => Some(name),
            QueryTarget::Coordinates { .. } => None,
        }
    }
}

/// Current conditions as shown to the user. Replaced wholesale by the
/// next fetch; never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location_name: String,
    pub country: String,
    pub condition: String,
    pub icon_url: String,
    pub temperature_c: f64,
}

/// A fetch failure. The `Display` strings are the user-facing banner
/// contract; callers and tests match on message content.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Error fetching weather data: Network response was not ok")]
    BadStatus,

    #[error("Error fetching weather data: {message}")]
    Api { message: String },

    #[error("Error fetching weather data: Location does not match the input")]
    LocationMismatch,

    #[error("Error fetching weather data: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Error fetching weather data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejected form input: the submitted city name was empty after trimming.
#[derive(Debug, Error)]
#[error("Please enter a city name")]
pub struct EmptyCityName;

/// Why the startup location lookup failed. Logged in detail; the banner
/// shows the fixed string "Error fetching location" regardless of variant.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("location service unavailable: {0}")]
    Service(String),

    #[error("location reply had malformed coordinates")]
    MalformedReply,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_input_is_trimmed() {
        let target = QueryTarget::from_city_input("  Paris  ").expect("non-empty input");
        assert_eq!(target.query_value(), "Paris");
        assert_eq!(target.requested_city(), Some("Paris"));
    }

    #[test]
    fn empty_city_input_is_rejected() {
        let err = QueryTarget::from_city_input("   ").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a city name");

        let err = QueryTarget::from_city_input("").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a city name");
    }

    #[test]
    fn coordinate_query_value_is_lat_comma_lon() {
        let target = QueryTarget::Coordinates { latitude: 48.8566, longitude: 2.3522 };
        assert_eq!(target.query_value(), "48.8566,2.3522");
        assert_eq!(target.requested_city(), None);
    }

    #[test]
    fn fetch_error_banner_strings() {
        assert_eq!(
            FetchError::BadStatus.to_string(),
            "Error fetching weather data: Network response was not ok"
        );
        assert_eq!(
            FetchError::Api { message: "No matching location found.".into() }.to_string(),
            "Error fetching weather data: No matching location found."
        );
        assert_eq!(
            FetchError::LocationMismatch.to_string(),
            "Error fetching weather data: Location does not match the input"
        );
    }
}
