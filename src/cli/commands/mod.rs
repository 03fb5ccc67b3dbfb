//! CLI command implementations

pub mod demo;
pub mod prove;
pub mod root;
pub mod verify;

// Common utilities for commands
use crate::chunk::ChunkingEngine;
use crate::cli::context::CliContext;
use crate::core::{error::MerkleError, types::Hash};
use crate::proofs::MerkleTree;
use anyhow::{Context, Result};
use std::path::Path;

/// Read a file, chunk it with the configured chunk size and build its tree
pub fn load_tree(path: &Path) -> Result<MerkleTree> {
    let data =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let config = CliContext::config();
    let engine = ChunkingEngine::with_config(config.chunk_config());
    let tree = engine
        .build_tree(&data, config.encoding)
        .with_context(|| format!("Failed to build merkle tree for {}", path.display()))?;

    Ok(tree)
}

/// Parse a hex hash given on the command line
pub fn parse_hash(value: &str) -> Result<Hash> {
    let hash = value.parse::<Hash>().map_err(MerkleError::from)?;
    Ok(hash)
}
