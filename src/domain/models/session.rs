#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use super::Analysis;
use super::Message;
use super::Reply;
use super::Role;

pub const WELCOME_MESSAGE: &str = "Welcome! I am your AI Career Strategist. Tell me: What are you currently doing, and what is your biggest career frustration or dream?";

/// In-memory state for one user's conversation. Nothing here is ever written
/// to disk.
pub struct Session {
    pub messages: Vec<Message>,
    pub analysis: Analysis,
    credential: String,
}

impl Session {
    pub fn new(credential: &str) -> Session {
        return Session {
            messages: vec![Session::welcome()],
            analysis: Analysis::default(),
            credential: credential.trim().to_string(),
        };
    }

    pub fn welcome() -> Message {
        return Message::new(Role::Assistant, WELCOME_MESSAGE);
    }

    pub fn credential(&self) -> &str {
        return &self.credential;
    }

    pub fn has_credential(&self) -> bool {
        return !self.credential.is_empty();
    }

    pub fn set_credential(&mut self, credential: &str) {
        self.credential = credential.trim().to_string();
    }

    pub fn push_user_message(&mut self, text: &str) {
        self.messages.push(Message::new(Role::User, text));
    }

    /// Stores the conversational part of the reply, and swaps in the new
    /// analysis only when the payload decoded.
    pub fn apply_reply(&mut self, reply: Reply) {
        self.messages
            .push(Message::new(Role::Assistant, reply.conversation()));

        if let Reply::Structured { analysis, .. } = reply {
            self.analysis = analysis;
        }
    }

    /// Drops everything but the welcome message. The dashboard keeps its last
    /// analysis.
    pub fn clear_history(&mut self) {
        self.messages.truncate(1);
        if self.messages.is_empty() {
            self.messages.push(Session::welcome());
        }
    }
}
