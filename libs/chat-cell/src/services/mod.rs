pub mod engine;
pub mod intents;

pub use engine::DialogueEngine;
pub use intents::Intent;
