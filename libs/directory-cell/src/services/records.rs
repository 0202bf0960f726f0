// libs/directory-cell/src/services/records.rs
use chrono::NaiveDate;
use tracing::debug;

use crate::models::{Consultation, Prescription};
use crate::seed;

/// In-memory consultation history, looked up by the exact phone number the
/// patient gave at booking time.
pub struct MedicalRecordsService {
    consultations: Vec<Consultation>,
}

impl MedicalRecordsService {
    pub fn new() -> Self {
        Self::with_consultations(seed::demo_consultations())
    }

    pub fn with_consultations(consultations: Vec<Consultation>) -> Self {
        Self { consultations }
    }

    /// All consultations recorded under the given phone number. The match is
    /// an exact string comparison; no normalization is applied.
    pub fn consultations_by_phone(&self, phone: &str) -> Vec<Consultation> {
        let matches: Vec<Consultation> = self
            .consultations
            .iter()
            .filter(|consultation| consultation.patient_phone == phone)
            .cloned()
            .collect();

        debug!("Found {} consultations for phone {}", matches.len(), phone);

        matches
    }

    /// Prescriptions attached to the patient's consultations, optionally
    /// restricted to consultations on one calendar day. Consultations without
    /// a prescription are dropped.
    pub fn prescriptions_by_phone(&self, phone: &str, date: Option<NaiveDate>) -> Vec<Prescription> {
        self.consultations_by_phone(phone)
            .into_iter()
            .filter(|consultation| match date {
                Some(date) => consultation.consultation_date.date() == date,
                None => true,
            })
            .filter_map(|consultation| consultation.prescription)
            .collect()
    }
}

impl Default for MedicalRecordsService {
    fn default() -> Self {
        Self::new()
    }
}
