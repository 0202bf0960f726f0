// libs/location-cell/src/lib.rs
//! # Location Cell
//!
//! Resolves an approximate position for the current user so the chat flow
//! can offer nearby doctors. Position sources are pluggable behind the
//! [`LocationProvider`] trait: fixed demo coordinates, a geo-IP web service,
//! or nothing at all. Lookup failures are never surfaced to callers; the
//! provider answers `None` and the conversation falls back to the full
//! doctor directory.

pub mod models;
pub mod services;

// Re-export commonly used types
pub use models::GeoLocation;
pub use services::{
    provider_from_config, GeoIpLocationProvider, LocationProvider, StaticLocationProvider,
};
