//! Merkle proof system
//!
//! This module builds the tree over chunk hashes and provides generation and
//! verification of audit trails for individual leaves.

pub mod merkle;
pub mod proof;

// Re-export commonly used items
pub use merkle::{MerkleNode, MerkleTree, NodeId};
pub use proof::{
    verify_audit_trail, AuditTrail, ProofElement, ProofGenerator, ProofPosition, TRAIL_VERSION,
};
