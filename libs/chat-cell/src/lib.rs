//! # Chat Cell
//!
//! The conversational core of the assistant: a deterministic dialogue state
//! machine that walks patients through finding a doctor, booking an
//! appointment, and looking up consultation history and prescriptions.
//!
//! Every conversation lives in a [`session::ChatSession`], which owns an
//! append-only message log plus the accumulated dialogue context. Free-text
//! input is routed by the current [`models::ChatStep`]; clicked options are
//! routed by their [`models::OptionAction`] alone, so an option stays
//! clickable even after the conversation has moved on. The engine never
//! leaves an input unanswered: anything it cannot make sense of gets the
//! containment reply and a fresh set of entry points.

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod session;
pub mod store;

pub use error::ChatError;
pub use handlers::ChatState;
pub use models::{ChatMessage, ChatOption, ChatStep, OptionAction};
pub use router::chat_routes;
pub use services::DialogueEngine;
pub use session::{ChatSession, SessionRegistry};
pub use store::ConversationStore;
