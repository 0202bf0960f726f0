// libs/location-cell/src/models.rs
use serde::{Deserialize, Serialize};

/// A resolved user position in decimal degrees, with a human-readable label
/// for display in the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}
