use crate::models::{top_level_options, ChatContext, ChatMessage, ChatOption, ContextUpdate};

const WELCOME_TEXT: &str =
    "Hi there! I'm your virtual healthcare assistant. How can I help you today?";

/// Append-only message log plus the dialogue context, owned by one session.
/// A fresh store is already seeded with the welcome message and the
/// top-level options, so a session is usable the moment it is created.
#[derive(Debug)]
pub struct ConversationStore {
    messages: Vec<ChatMessage>,
    context: ChatContext,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::bot(WELCOME_TEXT, top_level_options())],
            context: ChatContext::default(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Entries appended after the first `n`, for building per-event replies.
    pub fn messages_since(&self, n: usize) -> &[ChatMessage] {
        &self.messages[n.min(self.messages.len())..]
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn context(&self) -> &ChatContext {
        &self.context
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::user(text));
    }

    pub fn push_bot(&mut self, text: impl Into<String>, options: Vec<ChatOption>) {
        self.messages.push(ChatMessage::bot(text, options));
    }

    /// Shallow-merge a partial update into the context.
    pub fn apply(&mut self, update: ContextUpdate) {
        update.apply_to(&mut self.context);
    }

    /// Drop everything back to the freshly seeded state. Resetting twice
    /// leaves the same state as resetting once.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChatStep, MessageSender};

    #[test]
    fn test_new_store_seeds_welcome_message() {
        let store = ConversationStore::new();

        assert_eq!(store.message_count(), 1);
        assert_eq!(store.messages()[0].sender, MessageSender::Bot);
        assert_eq!(store.messages()[0].options.len(), 3);
        assert_eq!(store.context().current_step, ChatStep::Initial);
    }

    #[test]
    fn test_messages_keep_arrival_order() {
        let mut store = ConversationStore::new();
        store.push_user("hello");
        store.push_bot("hi", Vec::new());
        store.push_user("bye");

        let texts: Vec<&str> = store.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts[1..], ["hello", "hi", "bye"]);
    }

    #[test]
    fn test_messages_since_returns_tail() {
        let mut store = ConversationStore::new();
        let seen = store.message_count();
        store.push_user("hello");
        store.push_bot("hi", Vec::new());

        let tail = store.messages_since(seen);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].text, "hello");

        // An out-of-range cursor clamps instead of panicking.
        assert!(store.messages_since(100).is_empty());
    }

    #[test]
    fn test_reset_restores_seeded_state() {
        let mut store = ConversationStore::new();
        store.push_user("i need a doctor");
        store.apply(ContextUpdate {
            current_step: Some(ChatStep::AskSymptoms),
            user_query: Some("headache".to_string()),
            ..Default::default()
        });

        store.reset();
        assert_eq!(store.message_count(), 1);
        assert_eq!(store.context().current_step, ChatStep::Initial);
        assert!(store.context().user_query.is_none());

        store.reset();
        assert_eq!(store.message_count(), 1);
        assert_eq!(store.context().current_step, ChatStep::Initial);
    }
}
