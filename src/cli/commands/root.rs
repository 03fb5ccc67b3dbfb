//! Root command implementation

use crate::cli::{commands::load_tree, context::CliContext};
use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use std::path::Path;

/// Execute the root command
pub fn execute(file: &Path, json: bool) -> Result<()> {
    let tree = load_tree(file)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "root": tree.root(),
                "leaves": tree.leaf_count(),
                "depth": tree.depth(),
                "encoding": tree.encoding(),
            }))?
        );
    } else if CliContext::is_quiet() {
        println!("{}", tree.root());
    } else {
        println!("{}: {}", "Root Hash".bold(), tree.root().to_hex().cyan());
        println!("{}: {}", "Leaves".bold(), tree.leaf_count());
        println!("{}: {}", "Depth".bold(), tree.depth());
        if CliContext::is_verbose() {
            println!("{}: {}", "Encoding".bold(), tree.encoding());
        }
    }

    Ok(())
}
