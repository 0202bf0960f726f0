pub mod directory;
pub mod geo;
pub mod records;

pub use directory::{DoctorDirectoryService, DEFAULT_NEARBY_RADIUS_KM};
pub use geo::haversine_km;
pub use records::MedicalRecordsService;
