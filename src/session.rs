//! Conversation state for a chat session.
//!
//! History is an explicit owned object created at session start and mutated
//! only by appending turns. [`handle_turn`] records the user and assistant
//! turns only after the provider replies, so a failed request leaves the
//! history exactly as it was.

use anyhow::Result;

use crate::chunking::Chunk;
use crate::llm::{ChatProvider, Turn};

/// Greeting that opens every session.
pub const GREETING: &str = "How can I help you?";

/// Ordered conversation history, oldest turn first.
#[derive(Debug, Clone)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// Start a fresh conversation, opened by the assistant greeting.
    pub fn new() -> Self {
        Self {
            turns: vec![Turn::assistant(GREETING)],
        }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::user(text));
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::assistant(text));
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one chat turn: send the message with the current history and the
/// grounding chunks, then record both sides of the exchange.
pub async fn handle_turn(
    provider: &dyn ChatProvider,
    conversation: &mut Conversation,
    documents: &[Chunk],
    message: &str,
) -> Result<String> {
    let reply = provider
        .chat(message, conversation.turns(), documents)
        .await?;

    conversation.push_user(message);
    conversation.push_assistant(reply.clone());

    Ok(reply)
}
