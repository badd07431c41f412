//! The provider abstraction.
//!
//! Any chat backend that can answer a message grounded on document chunks
//! implements this trait. Transport, authentication, and prompt truncation
//! are the provider's concern; callers see only the reply text.

use anyhow::Result;
use async_trait::async_trait;

use super::types::Turn;
use crate::chunking::Chunk;

/// The core trait for grounded chat.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Model identifier, for display.
    fn model(&self) -> &str;

    /// Send one chat turn: the current message, the prior history, and the
    /// grounding chunks. Returns the reply text.
    async fn chat(&self, message: &str, history: &[Turn], documents: &[Chunk]) -> Result<String>;
}
