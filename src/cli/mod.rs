//! Command-line interface for merkle-audit

use crate::core::types::PairEncoding;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
pub mod context;

pub use context::CliContext;

/// merkle-audit - Merkle roots and audit trails for chunked files
#[derive(Parser)]
#[command(
    name = "merkle-audit",
    version,
    about = "Build merkle roots over chunked data and prove chunk membership",
    long_about = "merkle-audit splits input into fixed-size chunks, summarizes them with a binary merkle tree, and produces audit trails that let anyone holding a trusted root verify a single chunk."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file (default: ~/.merkle-audit/config.toml)
    #[arg(long, global = true, env = "MERKLE_AUDIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Chunk size in bytes (overrides configuration)
    #[arg(long, global = true)]
    pub chunk_size: Option<usize>,

    /// How child hashes are concatenated (overrides configuration)
    #[arg(long, global = true, value_enum)]
    pub encoding: Option<PairEncoding>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the merkle root of a file
    Root {
        /// File to chunk and summarize
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate an audit trail for one chunk of a file
    Prove {
        /// File the tree is built from
        file: PathBuf,

        /// Index of the chunk to prove
        #[arg(long, conflicts_with = "chunk_hash", required_unless_present = "chunk_hash")]
        index: Option<usize>,

        /// Hash of the chunk to prove (hex)
        #[arg(long)]
        chunk_hash: Option<String>,

        /// Write the trail to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Verify an audit trail for a chunk
    Verify {
        /// Audit trail JSON file
        proof: PathBuf,

        /// Hash of the claimed chunk (hex)
        #[arg(long, conflicts_with = "chunk_file", required_unless_present = "chunk_file")]
        chunk_hash: Option<String>,

        /// File holding the claimed chunk bytes
        #[arg(long)]
        chunk_file: Option<PathBuf>,

        /// Trusted root hash (hex); without it the trail's own root is used
        #[arg(long)]
        root: Option<String>,
    },

    /// Walk through chunking, proving and verifying a random genomic strand
    Demo {
        /// Length of the generated strand
        #[arg(long, default_value = "1000")]
        length: usize,

        /// Index of the chunk to prove
        #[arg(long, default_value = "33")]
        index: usize,

        /// Seed for reproducible strands
        #[arg(long)]
        seed: Option<u64>,
    },
}
