// libs/directory-cell/src/lib.rs
//! # Directory Cell
//!
//! In-memory doctor directory and medical records for the chat assistant:
//! doctor profiles with open slots and coordinates, past consultations, and
//! the prescriptions attached to them. The dialogue engine drives all its
//! lookups (nearby search, history by phone, prescriptions by phone and
//! date) through the services here; `router.rs` additionally exposes the
//! same data as read-only browse endpoints.

pub mod handlers;
pub mod models;
pub mod router;
pub mod seed;
pub mod services;

// Re-export commonly used types
pub use models::{
    AvailabilitySlot, Consultation, ConsultationMode, ConsultationStatus, Doctor, Prescription,
    PrescriptionFormat,
};

pub use services::{
    haversine_km, DoctorDirectoryService, MedicalRecordsService, DEFAULT_NEARBY_RADIUS_KM,
};

pub use router::directory_routes;
