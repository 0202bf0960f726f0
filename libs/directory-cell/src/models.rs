// libs/directory-cell/src/models.rs
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use location_cell::GeoLocation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub name: String,
    pub photo_url: String,
    pub specialization: String,
    pub experience: i32, // years of practice
    pub available_slots: Vec<AvailabilitySlot>,
    pub location: GeoLocation,
    pub supported_modes: Vec<ConsultationMode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub date: NaiveDate,
    pub time: String, // display form, e.g. "09:00 AM"
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsultationMode {
    Video,
    Audio,
    Chat,
}

impl ConsultationMode {
    /// Capitalized form for option labels ("Video Call").
    pub fn display_name(&self) -> &'static str {
        match self {
            ConsultationMode::Video => "Video",
            ConsultationMode::Audio => "Audio",
            ConsultationMode::Chat => "Chat",
        }
    }
}

impl std::fmt::Display for ConsultationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsultationMode::Video => write!(f, "video"),
            ConsultationMode::Audio => write!(f, "audio"),
            ConsultationMode::Chat => write!(f, "chat"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consultation {
    pub id: Uuid,
    pub patient_name: String,
    pub patient_phone: String,
    pub doctor_id: Uuid,
    pub doctor_name: String,
    pub consultation_date: NaiveDateTime,
    pub consultation_mode: ConsultationMode,
    pub symptoms: String,
    pub status: ConsultationStatus,
    pub prescription: Option<Prescription>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsultationStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl std::fmt::Display for ConsultationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsultationStatus::Scheduled => write!(f, "scheduled"),
            ConsultationStatus::InProgress => write!(f, "in-progress"),
            ConsultationStatus::Completed => write!(f, "completed"),
            ConsultationStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: Uuid,
    pub text: String,
    pub date: NaiveDate,
    pub format: PrescriptionFormat,
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrescriptionFormat {
    Text,
    Pdf,
}
