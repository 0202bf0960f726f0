// libs/location-cell/src/services/mod.rs
pub mod provider;

pub use provider::{
    provider_from_config, GeoIpLocationProvider, LocationProvider, StaticLocationProvider,
};
