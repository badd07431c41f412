//! pagetalk: chat with a PDF from the terminal.
//!
//! A configured PDF is extracted to per-page text, each page is split into
//! fixed-size titled chunks, and every chat turn sends the user's message,
//! the conversation history, and the chunks to the Cohere chat API as
//! grounding documents. Chunks live only for the current document
//! selection; nothing is persisted between runs except the config.

pub mod chunking;
pub mod config;
pub mod error;
pub mod extract;
pub mod llm;
pub mod repl;
pub mod session;

pub use chunking::{chunk_page, chunk_pages, Chunk, DEFAULT_CHUNK_SIZE};
pub use config::Config;
pub use error::Error;
pub use extract::extract_pages;
pub use llm::{ChatProvider, CohereProvider, Role, Turn};
pub use repl::ChatRepl;
pub use session::{handle_turn, Conversation};

use std::path::Path;

/// Resolve a document name against the library, extract its pages, and
/// chunk them with the configured chunk size.
pub fn load_document(config: &Config, name: &str) -> error::Result<Vec<Chunk>> {
    let path = config.resolve(name)?;
    let pages = extract_pages(Path::new(path))?;
    chunk_pages(&pages, config.chunk_size)
}
