// libs/directory-cell/src/router.rs
use axum::{routing::get, Router};

use crate::handlers;

/// Read-only browse endpoints over the seeded directory. The chat flows use
/// the services directly; these routes exist for clients that want the raw
/// data.
pub fn directory_routes() -> Router {
    Router::new()
        .route("/doctors", get(handlers::list_doctors))
        .route("/doctors/nearby", get(handlers::find_nearby_doctors))
        .route("/doctors/{doctor_id}", get(handlers::get_doctor))
        .route("/consultations", get(handlers::list_consultations))
        .route("/prescriptions", get(handlers::list_prescriptions))
}
