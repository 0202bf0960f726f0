// libs/directory-cell/src/handlers.rs
use axum::{
    extract::{Path, Query},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::services::{DoctorDirectoryService, MedicalRecordsService, DEFAULT_NEARBY_RADIUS_KM};

// Query parameters for different endpoints
#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct RecordsQuery {
    pub phone: String,
    pub date: Option<NaiveDate>,
}

#[axum::debug_handler]
pub async fn list_doctors() -> Result<Json<Value>, AppError> {
    let directory = DoctorDirectoryService::new();
    let doctors = directory.list_doctors();

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

#[axum::debug_handler]
pub async fn get_doctor(Path(doctor_id): Path<Uuid>) -> Result<Json<Value>, AppError> {
    let directory = DoctorDirectoryService::new();
    let doctor = directory
        .get_doctor(doctor_id)
        .ok_or_else(|| AppError::NotFound(format!("Doctor {} not found", doctor_id)))?;

    Ok(Json(json!({
        "doctor": doctor
    })))
}

#[axum::debug_handler]
pub async fn find_nearby_doctors(
    Query(query): Query<NearbyQuery>,
) -> Result<Json<Value>, AppError> {
    let radius_km = query.radius_km.unwrap_or(DEFAULT_NEARBY_RADIUS_KM);
    if radius_km < 0.0 {
        return Err(AppError::ValidationError(
            "radius_km must not be negative".to_string(),
        ));
    }

    let directory = DoctorDirectoryService::new();
    let doctors = directory.find_nearby(query.latitude, query.longitude, radius_km);

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len(),
        "radius_km": radius_km
    })))
}

#[axum::debug_handler]
pub async fn list_consultations(
    Query(query): Query<RecordsQuery>,
) -> Result<Json<Value>, AppError> {
    let records = MedicalRecordsService::new();
    let consultations = records.consultations_by_phone(&query.phone);

    Ok(Json(json!({
        "consultations": consultations,
        "total": consultations.len()
    })))
}

#[axum::debug_handler]
pub async fn list_prescriptions(
    Query(query): Query<RecordsQuery>,
) -> Result<Json<Value>, AppError> {
    let records = MedicalRecordsService::new();
    let prescriptions = records.prescriptions_by_phone(&query.phone, query.date);

    Ok(Json(json!({
        "prescriptions": prescriptions,
        "total": prescriptions.len()
    })))
}
