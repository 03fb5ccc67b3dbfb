//! Demo command implementation
//!
//! A server chunks a random genomic strand and publishes the merkle root. A
//! client that fetched one chunk from an untrusted peer asks the server for
//! the audit trail and checks the chunk against the published root.

use crate::chunk::ChunkingEngine;
use crate::cli::context::CliContext;
use crate::core::error::MerkleError;
use crate::proofs::{verify_audit_trail, MerkleTree};
use anyhow::Result;
use colored::Colorize;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;

const DNA_BASES: [u8; 4] = *b"AGCT";

/// Random strand of `length` bases drawn uniformly from A, G, C and T
pub fn genomic_sequence<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| DNA_BASES[rng.gen_range(0..DNA_BASES.len())] as char)
        .collect()
}

/// Execute the demo command
pub fn execute(length: usize, index: usize, seed: Option<u64>) -> Result<()> {
    let config = CliContext::config();
    let quiet = CliContext::is_quiet();

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let strand = genomic_sequence(&mut rng, length);
    if !quiet {
        println!("{}: {}", "File sequence".bold(), strand);
        println!();
        println!("Chunking sequence...");
    }

    let engine = ChunkingEngine::with_config(config.chunk_config());
    let chunks = engine.chunk_data(strand.as_bytes())?;
    let hashes: Vec<_> = chunks.iter().map(|c| c.hash).collect();

    let tree = MerkleTree::from_hashes(&hashes, config.encoding)?;
    info!(chunks = chunks.len(), root = %tree.root(), "server stored merkle root");

    let chunk = chunks.get(index).ok_or(MerkleError::LeafIndexOutOfRange {
        index,
        leaf_count: chunks.len(),
    })?;
    let published_root = tree.root();

    if !quiet {
        println!(
            "Server stored the merkle root of {} chunks as {}",
            chunks.len(),
            published_root.to_hex().cyan()
        );
        println!();
        println!(
            "Unknown client downloading chunk {} from a p2p network.",
            chunk.hash
        );
        println!("Client requesting audit trail for downloaded chunk from server...");
    }

    let trail = tree.audit_trail(&chunk.hash)?;
    if !quiet {
        println!();
        println!("{}", "Server response with audit trail:".bold());
        for element in &trail.path {
            println!("  ({}, {:?})", element.hash, element.position);
        }
        println!("  {}", trail.root);
        println!();
        println!("Client check on chunk status...");
    }

    let accepted = verify_audit_trail(&chunk.hash, &trail, &published_root);
    info!(index, accepted, "client verified chunk");

    if accepted {
        println!("{} Chunk {} belongs to the published root", "✓".green(), index);
    } else {
        println!("{} Chunk {} was rejected", "✗".red(), index);
        anyhow::bail!("Proof verification failed");
    }

    Ok(())
}
