// libs/location-cell/src/services/provider.rs
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use shared_config::AppConfig;

use crate::models::GeoLocation;

/// Source of the current user's position.
///
/// Implementations must not fail: anything that goes wrong during lookup is
/// logged and reported as `None`, and the caller degrades to the full
/// doctor directory.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn request_location(&self) -> Option<GeoLocation>;
}

/// Provider with a fixed position, used for demo deployments and tests.
pub struct StaticLocationProvider {
    location: Option<GeoLocation>,
}

impl StaticLocationProvider {
    pub fn new(location: Option<GeoLocation>) -> Self {
        Self { location }
    }

    /// A provider that never resolves a position.
    pub fn unavailable() -> Self {
        Self { location: None }
    }
}

#[async_trait]
impl LocationProvider for StaticLocationProvider {
    async fn request_location(&self) -> Option<GeoLocation> {
        if self.location.is_none() {
            debug!("No static location configured");
        }
        self.location.clone()
    }
}

/// Resolves a position from an ip-api.com style geolocation endpoint.
pub struct GeoIpLocationProvider {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct GeoIpResponse {
    status: String,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
    city: Option<String>,
    #[serde(rename = "regionName")]
    region_name: Option<String>,
}

impl GeoIpLocationProvider {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    async fn fetch(&self) -> Result<GeoLocation> {
        debug!("Requesting position from geo-IP endpoint: {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;

        let body: GeoIpResponse = response.json().await?;

        if body.status != "success" {
            anyhow::bail!("geo-IP service answered with status {:?}", body.status);
        }

        let address = match (body.city, body.region_name) {
            (Some(city), Some(region)) => format!("{}, {}", city, region),
            (Some(city), None) => city,
            _ => "Current Location".to_string(),
        };

        Ok(GeoLocation {
            latitude: body.lat,
            longitude: body.lon,
            address,
        })
    }
}

#[async_trait]
impl LocationProvider for GeoIpLocationProvider {
    async fn request_location(&self) -> Option<GeoLocation> {
        match self.fetch().await {
            Ok(location) => {
                info!("Resolved user position near {}", location.address);
                Some(location)
            }
            Err(error) => {
                warn!("Geo-IP lookup failed, continuing without a position: {}", error);
                None
            }
        }
    }
}

/// Pick the position source for this deployment. Fixed demo coordinates win
/// over a geo-IP endpoint; with neither configured every lookup answers `None`.
pub fn provider_from_config(config: &AppConfig) -> Arc<dyn LocationProvider> {
    if let (Some(latitude), Some(longitude)) = (config.demo_latitude, config.demo_longitude) {
        info!("Using fixed demo location ({}, {})", latitude, longitude);
        return Arc::new(StaticLocationProvider::new(Some(GeoLocation {
            latitude,
            longitude,
            address: config.demo_address.clone(),
        })));
    }

    if config.is_geoip_configured() {
        info!("Using geo-IP location lookup via {}", config.geoip_endpoint);
        return Arc::new(GeoIpLocationProvider::new(config.geoip_endpoint.clone()));
    }

    Arc::new(StaticLocationProvider::unavailable())
}
