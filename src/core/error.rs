//! Error types for merkle audit operations

use crate::core::types::Hash;
use thiserror::Error;

/// Main error type for tree construction, proof generation and configuration
///
/// A rejected proof is not an error: verification returns `false`.
#[derive(Error, Debug)]
pub enum MerkleError {
    /// Tree construction errors
    #[error("Cannot build a merkle tree from zero chunks")]
    EmptyInput,

    /// Proof generation errors
    #[error("No leaf matches hash: {hash}")]
    NotFound { hash: Hash },

    #[error("Leaf index {index} out of range for tree with {leaf_count} leaves")]
    LeafIndexOutOfRange { index: usize, leaf_count: usize },

    /// Chunking errors
    #[error("Invalid chunk size: {size}")]
    InvalidChunkSize { size: usize },

    /// Hex decoding errors
    #[error("Invalid hash: {0}")]
    InvalidHash(#[from] hex::FromHexError),

    /// Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigurationError { reason: String },

    #[error("Home directory not found")]
    HomeDirectoryNotFound,

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MerkleError {
    /// Create a new not found error
    pub fn not_found(hash: Hash) -> Self {
        Self::NotFound { hash }
    }

    /// Create a new configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::ConfigurationError {
            reason: reason.into(),
        }
    }
}

/// Result type alias for merkle audit operations
pub type Result<T> = std::result::Result<T, MerkleError>;
