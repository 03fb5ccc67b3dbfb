//! Fixed-size chunking of input data

use crate::core::{
    error::{MerkleError, Result},
    hash::sha256,
    types::{Chunk, PairEncoding},
};
use crate::proofs::merkle::MerkleTree;
use tracing::debug;

/// Default chunk size in bytes
pub const DEFAULT_CHUNK_SIZE: usize = 20;

/// Chunking configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkConfig {
    /// Size of every chunk except possibly the last, in bytes
    pub chunk_size: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Splits data into consecutive fixed-size chunks
#[derive(Debug, Clone, Default)]
pub struct ChunkingEngine {
    config: ChunkConfig,
}

impl ChunkingEngine {
    /// Create a new chunking engine with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new chunking engine with custom configuration
    pub fn with_config(config: ChunkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Chunk data; the last chunk may be shorter than the configured size
    pub fn chunk_data(&self, data: &[u8]) -> Result<Vec<Chunk>> {
        let size = self.config.chunk_size;
        if size == 0 || u32::try_from(size).is_err() {
            return Err(MerkleError::InvalidChunkSize { size });
        }

        let chunks: Vec<Chunk> = data
            .chunks(size)
            .enumerate()
            .map(|(i, piece)| Chunk {
                hash: sha256(piece),
                offset: (i * size) as u64,
                size: piece.len() as u32,
                data: piece.to_vec(),
            })
            .collect();

        debug!(
            bytes = data.len(),
            chunk_size = size,
            chunks = chunks.len(),
            "chunked input"
        );
        Ok(chunks)
    }

    /// Chunk data and build a merkle tree over the chunks
    pub fn build_tree(&self, data: &[u8], encoding: PairEncoding) -> Result<MerkleTree> {
        let chunks = self.chunk_data(data)?;
        let hashes: Vec<_> = chunks.iter().map(|c| c.hash).collect();
        MerkleTree::from_hashes(&hashes, encoding)
    }
}
