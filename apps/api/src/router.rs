use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use chat_cell::router::chat_routes;
use chat_cell::ChatState;
use directory_cell::router::directory_routes;

pub fn create_router(chat_state: Arc<ChatState>) -> Router {
    Router::new()
        .route("/", get(|| async { "CareChat API is running!" }))
        .nest("/chat", chat_routes(chat_state))
        .nest("/directory", directory_routes())
}
