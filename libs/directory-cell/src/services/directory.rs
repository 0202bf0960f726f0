// libs/directory-cell/src/services/directory.rs
use tracing::debug;
use uuid::Uuid;

use crate::models::Doctor;
use crate::seed;
use crate::services::geo::haversine_km;

/// Search radius applied when the caller does not ask for one.
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 5.0;

/// In-memory doctor roster with proximity search.
pub struct DoctorDirectoryService {
    doctors: Vec<Doctor>,
}

impl DoctorDirectoryService {
    pub fn new() -> Self {
        Self::with_doctors(seed::demo_doctors())
    }

    pub fn with_doctors(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    /// Every doctor in the directory, in roster order.
    pub fn list_doctors(&self) -> Vec<Doctor> {
        self.doctors.clone()
    }

    pub fn get_doctor(&self, doctor_id: Uuid) -> Option<Doctor> {
        self.doctors
            .iter()
            .find(|doctor| doctor.id == doctor_id)
            .cloned()
    }

    /// Doctors whose practice lies within `radius_km` of the given point.
    pub fn find_nearby(&self, latitude: f64, longitude: f64, radius_km: f64) -> Vec<Doctor> {
        let nearby: Vec<Doctor> = self
            .doctors
            .iter()
            .filter(|doctor| {
                let distance = haversine_km(
                    latitude,
                    longitude,
                    doctor.location.latitude,
                    doctor.location.longitude,
                );
                distance <= radius_km
            })
            .cloned()
            .collect();

        debug!(
            "Found {} of {} doctors within {} km of ({}, {})",
            nearby.len(),
            self.doctors.len(),
            radius_km,
            latitude,
            longitude
        );

        nearby
    }
}

impl Default for DoctorDirectoryService {
    fn default() -> Self {
        Self::new()
    }
}
