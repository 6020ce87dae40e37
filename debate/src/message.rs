//! Chat messages sent to a generator.
//!
//! Roles: System (first in the list) and User. A generator request is one
//! system instruction followed by one user message per input text.

/// A single message in a generator request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Message {
    /// System instruction; placed first.
    System(String),
    /// One input text.
    User(String),
}

impl Message {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::System(content.into())
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::User(content.into())
    }

    /// System instruction first, then each user turn as its own user message, in order.
    pub fn prompt(system_instruction: &str, user_turns: &[String]) -> Vec<Message> {
        let mut messages = Vec::with_capacity(user_turns.len() + 1);
        messages.push(Message::system(system_instruction));
        messages.extend(user_turns.iter().map(|t| Message::user(t.as_str())));
        messages
    }
}
