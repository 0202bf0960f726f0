use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{self, ChatState};

/// Routes for the chat surface, nested under `/chat` by the app router.
pub fn chat_routes(state: Arc<ChatState>) -> Router {
    Router::new()
        .route("/sessions", post(handlers::create_session))
        .route("/sessions/{session_id}", delete(handlers::delete_session))
        .route("/sessions/{session_id}/messages", get(handlers::get_messages))
        .route("/sessions/{session_id}/messages", post(handlers::submit_text))
        .route("/sessions/{session_id}/options", post(handlers::submit_option))
        .route("/sessions/{session_id}/reset", post(handlers::reset_session))
        .with_state(state)
}
