//! Error types for pagetalk.
//!
//! The library core reports failures through this enum; binary-level glue
//! wraps them with `anyhow` context instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the library core.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input handed to the chunker (e.g. a zero chunk size).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A document name that is not present in the configured library.
    /// Unknown names are an explicit error, never a fallback document.
    #[error("no document named '{name}' in the library (known: {})", known.join(", "))]
    InvalidSelection { name: String, known: Vec<String> },

    /// The document file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The PDF extractor could not produce text for a file. The extractor's
    /// error is carried as a message (it is not Send + Sync).
    #[error("failed to extract text from {}: {message}", path.display())]
    Extraction { path: PathBuf, message: String },

    /// Configuration is missing or inconsistent.
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
