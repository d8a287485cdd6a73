//! Machine-location lookup for the startup fetch.
//!
//! The CLI has no browser geolocation to lean on, so the position comes
//! from a single IP-geolocation request. One attempt per application
//! lifetime, no retry, no timeout beyond the service client's defaults.

use async_trait::async_trait;
use ipgeolocate::{Locator, Service};
use std::fmt::Debug;
use tracing::debug;

use crate::model::LocationError;

#[async_trait]
pub trait LocationSource: Send + Sync + Debug {
    /// Resolve the caller's current position as `(latitude, longitude)`
    /// in decimal degrees.
    async fn current_position(&self) -> Result<(f64, f64), LocationError>;
}

/// IP-based location via the ip-api service, auto-detecting the caller's
/// own address.
#[derive(Debug, Default)]
pub struct IpLocationSource;

#[async_trait]
impl LocationSource for IpLocationSource {
    async fn current_position(&self) -> Result<(f64, f64), LocationError> {
        let loc = Locator::get("", Service::IpApi)
            .await
            .map_err(|e| LocationError::Service(e.to_string()))?;

        // The service reports coordinates as strings.
        let latitude: f64 = loc.latitude.parse().map_err(|_| LocationError::MalformedReply)?;
        let longitude: f64 = loc.longitude.parse().map_err(|_| LocationError::MalformedReply)?;

        debug!(latitude, longitude, city = %loc.city, "resolved position from ip lookup");

        Ok((latitude, longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Run with: cargo test -p nowcast-core -- --ignored
    async fn live_ip_lookup_returns_coordinates() {
        let (latitude, longitude) =
            IpLocationSource.current_position().await.expect("lookup must succeed online");

        assert!((-90.0..=90.0).contains(&latitude));
        assert!((-180.0..=180.0).contains(&longitude));
    }
}
