//! merkle_audit - Binary merkle trees with audit-trail inclusion proofs
//!
//! A tree is built once from an ordered sequence of chunks. Its root hash is a
//! tamper-evident summary of all of them, and an audit trail lets anyone who
//! trusts that root check that a single chunk belongs to the set without
//! seeing the rest of the data.
//!
//! # Core Features
//!
//! - **Deterministic Construction**: SHA-256 leaves, pairwise parents, and an
//!   unpaired trailing node hashed with itself at every odd level
//! - **Audit Trails**: Sibling hashes with left/right markers from leaf to root
//! - **Hardened Verification**: Trails are checked against a root the caller
//!   already trusts, not only the root the trail claims
//! - **Fixed-Size Chunking**: Split raw input before building a tree
//!
//! # Example Usage
//!
//! ```rust
//! use merkle_audit::{core::hash::hash_string, MerkleTree};
//!
//! let tree = MerkleTree::from_chunks(["aa", "bb", "cc", "dd"])?;
//! let root = tree.root();
//!
//! let trail = tree.audit_trail(&hash_string("bb"))?;
//! assert!(trail.verify(&hash_string("bb"), &root));
//! # Ok::<(), merkle_audit::MerkleError>(())
//! ```

pub mod chunk;
pub mod cli;
pub mod config;
pub mod core;
pub mod proofs;

// Re-export commonly used types
pub use crate::core::{
    error::{MerkleError, Result},
    types::{Chunk, Hash, PairEncoding},
};

pub use crate::chunk::{ChunkConfig, ChunkingEngine};

pub use crate::config::AuditConfig;

pub use crate::proofs::{
    merkle::{MerkleNode, MerkleTree},
    proof::{verify_audit_trail, AuditTrail, ProofElement, ProofGenerator, ProofPosition},
};

/// Current version of merkle_audit
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
