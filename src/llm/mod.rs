//! LLM layer.
//!
//! Provider abstraction for grounded chat plus the Cohere backend.

pub mod cohere;
pub mod provider;
pub mod types;

// Re-export key types
pub use cohere::CohereProvider;
pub use provider::ChatProvider;
pub use types::{Role, Turn};
