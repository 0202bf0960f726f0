// libs/directory-cell/src/seed.rs
use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use uuid::{uuid, Uuid};

use location_cell::GeoLocation;

use crate::models::{
    AvailabilitySlot, Consultation, ConsultationMode, ConsultationStatus, Doctor, Prescription,
    PrescriptionFormat,
};

// Fixed ids so consultations can reference doctors across restarts.
pub const DR_SARAH_JOHNSON: Uuid = uuid!("6f9d2b5a-4c1e-4f7a-9b3d-8e2a51c0f4d7");
pub const DR_MICHAEL_CHEN: Uuid = uuid!("b4e8a1c6-7d2f-4b9e-8a5c-3f1d90e7b2a4");
pub const DR_EMILY_RODRIGUEZ: Uuid = uuid!("2c7f5e9b-1a84-4d63-b7f0-5a9c28d4e1b6");
pub const DR_JAMES_WILSON: Uuid = uuid!("e1a6c3d8-9f52-4e07-a4b8-7c3e61f9d205");
pub const DR_PRIYA_PATEL: Uuid = uuid!("93b7d0f2-6e4a-4c58-b1e9-0d7a42c8f6e3");

/// Demo doctor roster clustered around downtown San Francisco. Slot dates are
/// relative to today so the booking flow always has upcoming availability.
pub fn demo_doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: DR_SARAH_JOHNSON,
            name: "Dr. Sarah Johnson".to_string(),
            photo_url: "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&h=300&q=80".to_string(),
            specialization: "Neurologist".to_string(),
            experience: 10,
            available_slots: vec![
                slot(1, "09:00 AM"),
                slot(1, "11:00 AM"),
                slot(2, "02:00 PM"),
            ],
            location: GeoLocation {
                latitude: 37.7749,
                longitude: -122.4194,
                address: "123 Health St, San Francisco, CA".to_string(),
            },
            supported_modes: vec![
                ConsultationMode::Video,
                ConsultationMode::Audio,
                ConsultationMode::Chat,
            ],
        },
        Doctor {
            id: DR_MICHAEL_CHEN,
            name: "Dr. Michael Chen".to_string(),
            photo_url: "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&h=300&q=80".to_string(),
            specialization: "Cardiologist".to_string(),
            experience: 15,
            available_slots: vec![slot(0, "04:00 PM"), slot(3, "10:00 AM")],
            location: GeoLocation {
                latitude: 37.7833,
                longitude: -122.4167,
                address: "456 Medical Ave, San Francisco, CA".to_string(),
            },
            supported_modes: vec![ConsultationMode::Video, ConsultationMode::Chat],
        },
        Doctor {
            id: DR_EMILY_RODRIGUEZ,
            name: "Dr. Emily Rodriguez".to_string(),
            photo_url: "https://images.unsplash.com/photo-1594824476967-48c8b964273f?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&h=300&q=80".to_string(),
            specialization: "General Practitioner".to_string(),
            experience: 8,
            available_slots: vec![
                slot(0, "01:00 PM"),
                slot(0, "03:00 PM"),
                slot(1, "11:00 AM"),
            ],
            location: GeoLocation {
                latitude: 37.7855,
                longitude: -122.4001,
                address: "789 Care Blvd, San Francisco, CA".to_string(),
            },
            supported_modes: vec![
                ConsultationMode::Video,
                ConsultationMode::Audio,
                ConsultationMode::Chat,
            ],
        },
        Doctor {
            id: DR_JAMES_WILSON,
            name: "Dr. James Wilson".to_string(),
            photo_url: "https://images.unsplash.com/photo-1537368910025-700350fe46c7?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&h=300&q=80".to_string(),
            specialization: "Dermatologist".to_string(),
            experience: 12,
            available_slots: vec![slot(2, "09:00 AM"), slot(2, "10:00 AM")],
            location: GeoLocation {
                latitude: 37.7879,
                longitude: -122.4074,
                address: "101 Skin Care Way, San Francisco, CA".to_string(),
            },
            supported_modes: vec![ConsultationMode::Video, ConsultationMode::Chat],
        },
        Doctor {
            id: DR_PRIYA_PATEL,
            name: "Dr. Priya Patel".to_string(),
            photo_url: "https://images.unsplash.com/photo-1551836022-d5d88e9218df?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&h=300&q=80".to_string(),
            specialization: "Psychiatrist".to_string(),
            experience: 9,
            available_slots: vec![slot(1, "02:00 PM"), slot(3, "03:00 PM")],
            location: GeoLocation {
                latitude: 37.7834,
                longitude: -122.4252,
                address: "202 Mental Health Dr, San Francisco, CA".to_string(),
            },
            supported_modes: vec![ConsultationMode::Video, ConsultationMode::Audio],
        },
    ]
}

/// Past consultations on fixed dates, keyed by the patient phone numbers the
/// chat flows look up.
pub fn demo_consultations() -> Vec<Consultation> {
    vec![
        Consultation {
            id: uuid!("7e4a9c21-3b6f-4d85-9c0e-1f8b57a3d642"),
            patient_name: "John Doe".to_string(),
            patient_phone: "555-123-4567".to_string(),
            doctor_id: DR_SARAH_JOHNSON,
            doctor_name: "Dr. Sarah Johnson".to_string(),
            consultation_date: datetime(2023, 4, 15, 9),
            consultation_mode: ConsultationMode::Video,
            symptoms: "Headache and dizziness".to_string(),
            status: ConsultationStatus::Completed,
            prescription: Some(Prescription {
                id: uuid!("c9f2a647-8d1b-4a39-9e72-4c8f05b6d1a9"),
                text: "Take Ibuprofen 400mg twice daily for 3 days. Stay hydrated and get adequate rest.".to_string(),
                date: date(2023, 4, 15),
                format: PrescriptionFormat::Text,
                file_url: None,
            }),
        },
        Consultation {
            id: uuid!("a2d86f40-5c9b-4e17-8f3a-6b0d94e2c758"),
            patient_name: "Jane Smith".to_string(),
            patient_phone: "555-987-6543".to_string(),
            doctor_id: DR_EMILY_RODRIGUEZ,
            doctor_name: "Dr. Emily Rodriguez".to_string(),
            consultation_date: datetime(2023, 5, 20, 13),
            consultation_mode: ConsultationMode::Audio,
            symptoms: "Sore throat and fever".to_string(),
            status: ConsultationStatus::Completed,
            prescription: Some(Prescription {
                id: uuid!("1b85d3e0-7f4c-49a6-a051-3d9e82c7f5b4"),
                text: "Amoxicillin 500mg three times daily for 5 days. Paracetamol for fever as needed.".to_string(),
                date: date(2023, 5, 20),
                format: PrescriptionFormat::Text,
                file_url: None,
            }),
        },
        Consultation {
            id: uuid!("58c1e7b9-0a3d-4f62-b8c4-9e5f21a7d083"),
            patient_name: "Michael Brown".to_string(),
            patient_phone: "555-456-7890".to_string(),
            doctor_id: DR_MICHAEL_CHEN,
            doctor_name: "Dr. Michael Chen".to_string(),
            consultation_date: datetime(2023, 6, 10, 10),
            consultation_mode: ConsultationMode::Chat,
            symptoms: "Chest pain and shortness of breath".to_string(),
            status: ConsultationStatus::Completed,
            prescription: Some(Prescription {
                id: uuid!("d647b2a9-3e85-4c10-92f7-8a1c56e9d4b0"),
                text: "Prescribed aspirin 75mg daily. Referred for ECG and blood tests.".to_string(),
                date: date(2023, 6, 10),
                format: PrescriptionFormat::Text,
                file_url: None,
            }),
        },
    ]
}

fn slot(days_ahead: i64, time: &str) -> AvailabilitySlot {
    AvailabilitySlot {
        date: Utc::now().date_naive() + Duration::days(days_ahead),
        time: time.to_string(),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn datetime(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, 0, 0)
        .expect("valid seed time")
}
