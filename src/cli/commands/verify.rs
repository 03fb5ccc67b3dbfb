//! Verify command implementation

use crate::cli::{commands::parse_hash, context::CliContext};
use crate::core::hash::sha256;
use crate::proofs::AuditTrail;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Execute the verify command
///
/// Fails when the trail does not lead from the chunk to the root.
pub fn execute(
    proof: &Path,
    chunk_hash: Option<String>,
    chunk_file: Option<PathBuf>,
    root: Option<String>,
) -> Result<()> {
    let json = std::fs::read_to_string(proof)
        .with_context(|| format!("Failed to read proof {}", proof.display()))?;
    let trail = AuditTrail::from_json(&json)?;

    let leaf = match (chunk_hash, chunk_file) {
        (Some(hash), _) => parse_hash(&hash)?,
        (None, Some(path)) => sha256(&std::fs::read(&path)?),
        (None, None) => anyhow::bail!("Either --chunk-hash or --chunk-file is required"),
    };

    let accepted = match root {
        Some(root) => trail.verify(&leaf, &parse_hash(&root)?),
        None => {
            if !CliContext::is_quiet() {
                eprintln!(
                    "{} No trusted root given, checking against the root embedded in the trail",
                    "warning:".yellow().bold()
                );
            }
            trail.verify_embedded(&leaf)
        }
    };

    if !accepted {
        anyhow::bail!("Proof verification failed");
    }

    if !CliContext::is_quiet() {
        println!("{} Proof verified successfully!", "✓".green());
        println!("  {}: {}", "Chunk".bold(), leaf.to_hex());
        println!("  {}: {}", "Root".bold(), trail.root.to_hex().cyan());
        if CliContext::is_verbose() {
            println!("  {}: {}", "Steps".bold(), trail.len());
        }
    }

    Ok(())
}
