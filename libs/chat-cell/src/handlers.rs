use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use location_cell::LocationProvider;
use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{OptionAction, SubmitOptionRequest, SubmitTextRequest};
use crate::services::DialogueEngine;
use crate::session::SessionRegistry;

/// Shared state for the chat surface: one engine, many sessions.
pub struct ChatState {
    pub engine: DialogueEngine,
    pub sessions: SessionRegistry,
}

impl ChatState {
    pub fn new(location: Arc<dyn LocationProvider>) -> Self {
        Self {
            engine: DialogueEngine::new(location),
            sessions: SessionRegistry::new(),
        }
    }

    /// Wire the engine against whichever location source the deployment
    /// configures.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(location_cell::provider_from_config(config))
    }
}

#[axum::debug_handler]
pub async fn create_session(State(state): State<Arc<ChatState>>) -> Result<Json<Value>, AppError> {
    let session = state.sessions.create().await;
    let store = session.lock().await;

    Ok(Json(json!({
        "session_id": session.id,
        "created_at": session.created_at,
        "messages": store.messages(),
        "current_step": store.context().current_step
    })))
}

#[axum::debug_handler]
pub async fn get_messages(
    State(state): State<Arc<ChatState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let session = state.sessions.get(session_id).await?;
    let store = session.lock().await;

    Ok(Json(json!({
        "session_id": session.id,
        "messages": store.messages(),
        "current_step": store.context().current_step
    })))
}

#[axum::debug_handler]
pub async fn submit_text(
    State(state): State<Arc<ChatState>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SubmitTextRequest>,
) -> Result<Json<Value>, AppError> {
    let session = state.sessions.get(session_id).await?;
    let mut store = session.lock().await;

    let seen = store.message_count();
    state.engine.process_text(&mut store, &request.text).await;

    Ok(Json(json!({
        "session_id": session.id,
        "messages": store.messages_since(seen),
        "current_step": store.context().current_step
    })))
}

#[axum::debug_handler]
pub async fn submit_option(
    State(state): State<Arc<ChatState>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SubmitOptionRequest>,
) -> Result<Json<Value>, AppError> {
    let session = state.sessions.get(session_id).await?;
    let mut store = session.lock().await;

    let seen = store.message_count();
    match OptionAction::decode(&request.action, request.data) {
        Some(action) => state.engine.process_option(&mut store, action).await,
        None => state.engine.handle_unknown_action(&mut store, &request.action),
    }

    Ok(Json(json!({
        "session_id": session.id,
        "messages": store.messages_since(seen),
        "current_step": store.context().current_step
    })))
}

#[axum::debug_handler]
pub async fn reset_session(
    State(state): State<Arc<ChatState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let session = state.sessions.get(session_id).await?;
    let mut store = session.lock().await;

    store.reset();
    info!("Reset chat session {}", session_id);

    Ok(Json(json!({
        "session_id": session.id,
        "messages": store.messages(),
        "current_step": store.context().current_step
    })))
}

#[axum::debug_handler]
pub async fn delete_session(
    State(state): State<Arc<ChatState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    state.sessions.remove(session_id).await?;

    Ok(Json(json!({
        "success": true
    })))
}
