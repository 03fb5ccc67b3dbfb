//! Prove command implementation

use crate::cli::{
    commands::{load_tree, parse_hash},
    context::CliContext,
};
use crate::proofs::ProofGenerator;
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Execute the prove command
pub fn execute(
    file: &Path,
    index: Option<usize>,
    chunk_hash: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let tree = load_tree(file)?;
    let generator = ProofGenerator::new(&tree);

    let trail = match (index, chunk_hash) {
        (_, Some(hash)) => generator.prove_hash(&parse_hash(&hash)?)?,
        (Some(index), None) => generator.prove_index(index)?,
        (None, None) => anyhow::bail!("Either --index or --chunk-hash is required"),
    };

    let json = trail.to_json()?;
    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            if !CliContext::is_quiet() {
                println!(
                    "{} Audit trail with {} steps written to {}",
                    "✓".green(),
                    trail.len(),
                    path.display()
                );
                println!("  {}: {}", "Root".bold(), trail.root.to_hex().cyan());
            }
        }
        None => println!("{}", json),
    }

    Ok(())
}
