//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod seed;
pub mod serve;

/// Orgnet - Employee Graph Service
#[derive(Parser)]
#[command(name = "orgnet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(serve::ServeArgs),

    /// Wipe the graph and re-ingest the CSV relationship files
    Seed(seed::SeedArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Seed(args) => seed::execute(args).await,
        }
    }
}
