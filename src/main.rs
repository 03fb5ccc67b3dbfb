//! merkle-audit CLI
//!
//! Command-line interface for building merkle roots and audit trails over chunked files.

use anyhow::Result;
use clap::Parser;
use merkle_audit::cli::{commands, Cli, CliContext, Commands};
use merkle_audit::config::AuditConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    let mut config = AuditConfig::load(cli.config.as_deref())?;
    if let Some(chunk_size) = cli.chunk_size {
        config.chunk_size = chunk_size;
    }
    if let Some(encoding) = cli.encoding {
        config.encoding = encoding;
    }

    // Initialize logging; diagnostics go to stderr so stdout stays parseable
    let default_filter = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_filter.clone().unwrap_or_else(|| "warn".to_string())
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    CliContext::set(CliContext {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config,
    });

    // Execute the command
    match cli.command {
        Commands::Root { file, json } => commands::root::execute(&file, json),
        Commands::Prove {
            file,
            index,
            chunk_hash,
            output,
        } => commands::prove::execute(&file, index, chunk_hash, output),
        Commands::Verify {
            proof,
            chunk_hash,
            chunk_file,
            root,
        } => commands::verify::execute(&proof, chunk_hash, chunk_file, root),
        Commands::Demo {
            length,
            index,
            seed,
        } => commands::demo::execute(length, index, seed),
    }
}
