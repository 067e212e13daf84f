//! Error types for merkle-vectors

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while hashing, encoding or persisting test vectors
#[derive(Error, Debug)]
pub enum Error {
    /// Base64 decoding error
    #[error("Base64 decoding error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded digest has the wrong length
    #[error("invalid hash size: {0}")]
    InvalidHashSize(usize),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File could not be created, written or read
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output path was empty
    #[error("output path is empty")]
    EmptyPath,

    /// Invalid proof format
    #[error("Invalid proof: {0}")]
    InvalidProof(String),

    /// Proof verification failed
    #[error("Proof verification failed: {0}")]
    VerificationFailed(String),

    /// Invalid tree size
    #[error("Invalid tree size: {0}")]
    InvalidTreeSize(String),

    /// Invalid leaf index
    #[error("Invalid leaf index: {0}")]
    InvalidLeafIndex(String),

    /// Hash mismatch
    #[error("Hash mismatch: expected {expected}, got {actual}")]
    HashMismatch { expected: String, actual: String },
}

/// Result type for merkle-vectors operations
pub type Result<T> = std::result::Result<T, Error>;
