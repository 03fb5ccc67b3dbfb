//! Audit trail generation and verification

use crate::core::{
    error::{MerkleError, Result},
    hash::{hash_pair, sha256},
    types::{Hash, PairEncoding, RootHash},
};
use crate::proofs::merkle::{MerkleNode, MerkleTree, NodeId};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Current audit trail format version
pub const TRAIL_VERSION: &str = "1.0";

/// Position of a sibling in a merkle proof
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProofPosition {
    Left,
    Right,
}

/// A single element in a merkle proof path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofElement {
    /// Hash of the sibling node
    pub hash: Hash,
    /// Whether the sibling is on the left or right
    pub position: ProofPosition,
}

impl ProofElement {
    pub fn new(hash: Hash, position: ProofPosition) -> Self {
        Self { hash, position }
    }

    /// True when the sibling is its parent's left child
    pub fn is_left(&self) -> bool {
        self.position == ProofPosition::Left
    }
}

/// Inclusion proof for one leaf: sibling path from the leaf up, then the root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrail {
    /// Version of the trail format
    pub version: String,
    /// Pair encoding of the tree the trail was taken from
    #[serde(default)]
    pub encoding: PairEncoding,
    /// Sibling hashes ordered from the leaf end toward the root
    pub path: Vec<ProofElement>,
    /// Root claimed by the tree that produced the trail
    pub root: RootHash,
}

impl AuditTrail {
    pub fn new(path: Vec<ProofElement>, root: RootHash, encoding: PairEncoding) -> Self {
        Self {
            version: TRAIL_VERSION.to_string(),
            encoding,
            path,
            root,
        }
    }

    /// Number of sibling steps
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Replay the path starting from `leaf` and return the resulting root
    pub fn compute_root(&self, leaf: &Hash) -> Hash {
        let mut running = *leaf;
        for (step, element) in self.path.iter().enumerate() {
            running = if element.is_left() {
                hash_pair(&element.hash, &running, self.encoding)
            } else {
                hash_pair(&running, &element.hash, self.encoding)
            };
            trace!(
                step,
                sibling = %element.hash,
                position = ?element.position,
                running = %running,
                "replayed audit step"
            );
        }
        running
    }

    /// Verify `leaf` against a root the caller already trusts
    ///
    /// Both the replayed root and the trail's own terminal root must equal
    /// `trusted_root`.
    pub fn verify(&self, leaf: &Hash, trusted_root: &RootHash) -> bool {
        if self.root != *trusted_root {
            debug!(
                embedded = %self.root,
                trusted = %trusted_root,
                "audit trail root differs from trusted root"
            );
            return false;
        }
        self.compute_root(leaf) == *trusted_root
    }

    /// Verify `leaf` against the root embedded in the trail
    ///
    /// Only meaningful when the trail itself comes from a trusted source.
    pub fn verify_embedded(&self, leaf: &Hash) -> bool {
        self.compute_root(leaf) == self.root
    }

    /// Verify raw chunk bytes against a trusted root
    pub fn verify_chunk(&self, chunk: &[u8], trusted_root: &RootHash) -> bool {
        self.verify(&sha256(chunk), trusted_root)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Hardened verification: `leaf` must lead to `trusted_root` through `trail`
pub fn verify_audit_trail(leaf: &Hash, trail: &AuditTrail, trusted_root: &RootHash) -> bool {
    trail.verify(leaf, trusted_root)
}

/// Generates audit trails from a built tree
pub struct ProofGenerator<'a> {
    tree: &'a MerkleTree,
}

impl<'a> ProofGenerator<'a> {
    pub fn new(tree: &'a MerkleTree) -> Self {
        Self { tree }
    }

    /// Trail for the first leaf whose hash equals `hash`
    pub fn prove_hash(&self, hash: &Hash) -> Result<AuditTrail> {
        let index = self
            .tree
            .position(hash)
            .ok_or_else(|| MerkleError::not_found(*hash))?;
        self.prove_index(index)
    }

    /// Trail for the leaf holding `chunk`
    pub fn prove_chunk(&self, chunk: &[u8]) -> Result<AuditTrail> {
        self.prove_hash(&sha256(chunk))
    }

    /// Trail for the leaf at `index`
    pub fn prove_index(&self, index: usize) -> Result<AuditTrail> {
        let leaf = self
            .tree
            .leaf_id(index)
            .ok_or(MerkleError::LeafIndexOutOfRange {
                index,
                leaf_count: self.tree.leaf_count(),
            })?;

        let path = self.sibling_path(leaf);
        debug!(index, steps = path.len(), "generated audit trail");

        Ok(AuditTrail::new(path, self.tree.root(), self.tree.encoding()))
    }

    /// Walk from `leaf` to the root collecting siblings.
    ///
    /// A self-paired parent has the same node on both sides; the comparison
    /// on the left id makes the current node its left child, so the recorded
    /// sibling is the node itself, on the right.
    fn sibling_path(&self, leaf: NodeId) -> Vec<ProofElement> {
        let mut path = Vec::with_capacity(self.tree.depth());
        let mut current = leaf;

        while current != self.tree.root_id() {
            let Some(parent_id) = self.node(current).parent() else {
                break;
            };
            let parent = self.node(parent_id);

            let element = if parent.left() == Some(current) {
                let sibling = parent.right().unwrap_or(current);
                ProofElement::new(self.node(sibling).hash(), ProofPosition::Right)
            } else {
                let sibling = parent.left().unwrap_or(current);
                ProofElement::new(self.node(sibling).hash(), ProofPosition::Left)
            };

            path.push(element);
            current = parent_id;
        }

        path
    }

    fn node(&self, id: NodeId) -> &MerkleNode {
        // Ids handed out by the tree always index into its arena
        self.tree
            .node(id)
            .unwrap_or_else(|| unreachable!("node {id} missing from arena"))
    }
}
