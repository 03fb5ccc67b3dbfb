//! Merkle tree implementation
//!
//! Nodes live in an arena owned by the tree. Children are referenced by
//! [`NodeId`] and every non-root node keeps the id of its parent, so the
//! structure can be walked in both directions without reference cycles.

use crate::core::{
    error::{MerkleError, Result},
    hash::{hash_pair, sha256},
    types::{Hash, PairEncoding, RootHash},
};
use crate::proofs::proof::{AuditTrail, ProofGenerator};
use tracing::debug;

/// Index of a node inside a [`MerkleTree`] arena
pub type NodeId = usize;

/// A single node of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleNode {
    hash: Hash,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
}

impl MerkleNode {
    fn leaf(hash: Hash) -> Self {
        Self {
            hash,
            left: None,
            right: None,
            parent: None,
        }
    }

    /// Digest stored in this node
    pub fn hash(&self) -> Hash {
        self.hash
    }

    /// Left child, `None` for leaves
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Right child, `None` for leaves.
    ///
    /// Equal to [`left`](Self::left) when the node was built from an
    /// unpaired trailing node.
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Parent node, `None` for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none()
    }

    /// Whether both children are the same node
    pub fn is_self_paired(&self) -> bool {
        self.left.is_some() && self.left == self.right
    }
}

/// Merkle tree built once from an ordered chunk sequence
#[derive(Debug, Clone)]
pub struct MerkleTree {
    /// Node arena, leaves first in chunk order
    nodes: Vec<MerkleNode>,
    /// Ids of the leaves (insertion order = chunk order)
    leaves: Vec<NodeId>,
    /// Id of the root node
    root: NodeId,
    /// Layout used when hashing child pairs
    encoding: PairEncoding,
    /// Number of hashing levels above the leaves
    depth: usize,
}

impl MerkleTree {
    /// Build a tree from raw chunks using [`PairEncoding::Raw`]
    pub fn from_chunks<I, C>(chunks: I) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[u8]>,
    {
        Self::from_chunks_with_encoding(chunks, PairEncoding::Raw)
    }

    /// Build a tree from raw chunks with an explicit pair encoding
    pub fn from_chunks_with_encoding<I, C>(chunks: I, encoding: PairEncoding) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[u8]>,
    {
        let hashes: Vec<Hash> = chunks
            .into_iter()
            .map(|chunk| sha256(chunk.as_ref()))
            .collect();
        Self::from_hashes(&hashes, encoding)
    }

    /// Build a tree from precomputed leaf hashes
    ///
    /// Each level is reduced left-to-right in pairs; a trailing unpaired node
    /// becomes both children of its parent. A single leaf is the root.
    pub fn from_hashes(hashes: &[Hash], encoding: PairEncoding) -> Result<Self> {
        if hashes.is_empty() {
            return Err(MerkleError::EmptyInput);
        }

        // A full binary tree over n leaves has fewer than 2n nodes
        let mut nodes: Vec<MerkleNode> = Vec::with_capacity(hashes.len() * 2);
        nodes.extend(hashes.iter().copied().map(MerkleNode::leaf));

        let leaves: Vec<NodeId> = (0..hashes.len()).collect();
        let mut level = leaves.clone();
        let mut depth = 0;

        while level.len() > 1 {
            let mut parents = Vec::with_capacity((level.len() + 1) / 2);

            for pair in level.chunks(2) {
                let left = pair[0];
                let right = pair.get(1).copied().unwrap_or(left);

                let id = nodes.len();
                let hash = hash_pair(&nodes[left].hash, &nodes[right].hash, encoding);
                nodes.push(MerkleNode {
                    hash,
                    left: Some(left),
                    right: Some(right),
                    parent: None,
                });
                nodes[left].parent = Some(id);
                nodes[right].parent = Some(id);

                parents.push(id);
            }

            level = parents;
            depth += 1;
        }

        let root = level[0];

        debug!(
            leaves = leaves.len(),
            depth,
            root = %nodes[root].hash,
            %encoding,
            "built merkle tree"
        );

        Ok(Self {
            nodes,
            leaves,
            root,
            encoding,
            depth,
        })
    }

    /// Root hash of the tree
    pub fn root(&self) -> RootHash {
        self.nodes[self.root].hash
    }

    /// Id of the root node
    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// Number of leaves
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Number of hashing levels above the leaves (0 for a single leaf)
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn encoding(&self) -> PairEncoding {
        self.encoding
    }

    /// Hash of the leaf at `index`
    pub fn leaf(&self, index: usize) -> Option<Hash> {
        self.leaves.get(index).map(|&id| self.nodes[id].hash)
    }

    /// Leaf hashes in chunk order
    pub fn leaves(&self) -> impl Iterator<Item = Hash> + '_ {
        self.leaves.iter().map(move |&id| self.nodes[id].hash)
    }

    /// Arena id of the leaf at `index`
    pub fn leaf_id(&self, index: usize) -> Option<NodeId> {
        self.leaves.get(index).copied()
    }

    pub fn node(&self, id: NodeId) -> Option<&MerkleNode> {
        self.nodes.get(id)
    }

    /// Index of the first leaf whose hash equals `hash`
    pub fn position(&self, hash: &Hash) -> Option<usize> {
        self.leaves.iter().position(|&id| self.nodes[id].hash == *hash)
    }

    /// Audit trail for the leaf with the given hash
    pub fn audit_trail(&self, hash: &Hash) -> Result<AuditTrail> {
        ProofGenerator::new(self).prove_hash(hash)
    }
}
