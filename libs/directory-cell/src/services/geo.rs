// libs/directory-cell/src/services/geo.rs

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates using the haversine formula.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance_identical_points() {
        assert_eq!(haversine_km(37.7749, -122.4194, 37.7749, -122.4194), 0.0);
    }

    #[test]
    fn test_san_francisco_to_los_angeles() {
        // Roughly 559 km between the two city centers.
        let distance = haversine_km(37.7749, -122.4194, 34.0522, -118.2437);
        assert!((distance - 559.0).abs() < 5.0, "got {} km", distance);
    }

    #[test]
    fn test_distance_symmetry() {
        let forward = haversine_km(37.7749, -122.4194, 37.7833, -122.4167);
        let backward = haversine_km(37.7833, -122.4167, 37.7749, -122.4194);
        assert!((forward - backward).abs() < 1e-9);
    }
}
