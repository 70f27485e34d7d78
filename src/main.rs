mod cli;

use agent_field_guide::{config, server};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "agent-field-guide",
    version,
    about = "Curated agent patterns and mistakes, served over MCP"
)]
struct Cli {
    /// Config file (defaults to ~/.agent-field-guide/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the MCP server (stdio transport)
    Serve,
    /// Search patterns by keyword
    Search {
        query: String,
        #[arg(long)]
        limit: Option<i64>,
    },
    /// Show the patterns in one category
    Category {
        name: String,
        #[arg(long)]
        limit: Option<i64>,
    },
    /// Show documented mistakes
    Mistakes {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        limit: Option<i64>,
    },
    /// List categories with counts
    Categories,
    /// Show field guide statistics
    Stats,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::FieldGuideConfig::load_from(path)?,
        None => config::FieldGuideConfig::load()?,
    };

    // Log to stderr so stdout stays clean for MCP JSON-RPC.
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => server::serve_stdio(config).await?,
        Command::Search { query, limit } => cli::search::search(&config, &query, limit)?,
        Command::Category { name, limit } => cli::search::category(&config, &name, limit)?,
        Command::Mistakes { category, limit } => {
            cli::search::mistakes(&config, category.as_deref(), limit)?
        }
        Command::Categories => cli::stats::categories(&config)?,
        Command::Stats => cli::stats::stats(&config)?,
    }

    Ok(())
}
