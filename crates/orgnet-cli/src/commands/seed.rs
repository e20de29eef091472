//! One-shot CSV seeding command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use orgnet_graph::{ingest, GraphClient, GraphConfig, SeedPaths};

#[derive(Args)]
pub struct SeedArgs {
    /// Directory holding the two relationship CSV files
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

pub async fn execute(args: SeedArgs) -> Result<()> {
    let config = GraphConfig::from_env();
    let client = GraphClient::connect(&config).await?;

    let paths = match &args.data_dir {
        Some(dir) => SeedPaths::in_dir(dir),
        None => SeedPaths::from_env(),
    };

    let count = ingest::seed_sample_data(&client, &paths).await?;
    println!("{} {} employees loaded", "Seeded".green().bold(), count);

    Ok(())
}
