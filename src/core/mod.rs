//! Core types and utilities
//!
//! This module contains the digest type, error handling,
//! and the hashing primitives used throughout the tree.

pub mod error;
pub mod hash;
pub mod types;

// Re-export commonly used items
pub use error::{MerkleError, Result};
pub use hash::{hash_pair, hash_string, sha256};
pub use types::{Chunk, ChunkHash, Hash, PairEncoding, RootHash};
