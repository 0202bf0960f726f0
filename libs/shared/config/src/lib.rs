use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub geoip_endpoint: String,
    pub demo_latitude: Option<f64>,
    pub demo_longitude: Option<f64>,
    pub demo_address: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|port| {
                    port.parse().map_err(|_| {
                        warn!("SERVER_PORT is not a valid port number, using default");
                    }).ok()
                })
                .unwrap_or(3000),
            geoip_endpoint: env::var("GEOIP_ENDPOINT")
                .unwrap_or_else(|_| {
                    warn!("GEOIP_ENDPOINT not set, geo-IP location lookup disabled");
                    String::new()
                }),
            demo_latitude: parse_coordinate("DEMO_LATITUDE"),
            demo_longitude: parse_coordinate("DEMO_LONGITUDE"),
            demo_address: env::var("DEMO_ADDRESS")
                .unwrap_or_else(|_| "Current Location".to_string()),
        };

        if !config.has_demo_location() && !config.is_geoip_configured() {
            warn!("No location source configured - doctor search will fall back to the full directory");
        }

        config
    }

    /// Fixed demo coordinates take precedence over any geo-IP lookup.
    pub fn has_demo_location(&self) -> bool {
        self.demo_latitude.is_some() && self.demo_longitude.is_some()
    }

    pub fn is_geoip_configured(&self) -> bool {
        !self.geoip_endpoint.is_empty()
    }
}

fn parse_coordinate(var: &str) -> Option<f64> {
    match env::var(var) {
        Ok(value) => match value.parse() {
            Ok(coordinate) => Some(coordinate),
            Err(_) => {
                warn!("{} is not a valid coordinate, ignoring", var);
                None
            }
        },
        Err(_) => None,
    }
}
