//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use orgnet_graph::{schema, GraphClient, GraphConfig, SeedPaths};

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = GraphConfig::from_env();

    let client = GraphClient::connect(&config).await?;
    schema::ensure_unique_constraints(&client).await;

    println!();
    println!("  {} {}", "Orgnet".cyan().bold(), "Employee Graph API".bold());
    println!();
    println!("  {}     http://{}:{}", "API".green(), args.host, args.port);
    println!("  {}   {}", "Neo4j".green(), client.uri());
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    orgnet_web::run_server(client, SeedPaths::from_env(), &args.host, args.port).await?;

    Ok(())
}
