use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use newsdesk::config::Config;
use newsdesk::server::{self, AppState};
use newsdesk::storage::Database;

/// Config file looked up when --config is not given. A missing file is
/// fine — defaults apply.
const DEFAULT_CONFIG_PATH: &str = "newsdesk.toml";

#[derive(Parser, Debug)]
#[command(name = "newsdesk", about = "Headline scraper and annotation service")]
struct Args {
    /// Path to a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Bind address (overrides the config file)
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,

    /// SQLite database path (overrides the config file)
    #[arg(long, value_name = "FILE")]
    database: Option<String>,

    /// Homepage URL to scrape (overrides the config file)
    #[arg(long, value_name = "URL")]
    source: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Request lines from tower-http land at debug, so enable them by
    // default alongside our own info-level events. RUST_LOG overrides.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newsdesk=info,tower_http=debug".into()),
        )
        .init();

    let args = Args::parse();

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let mut config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(database) = args.database {
        config.database_path = database;
    }
    if let Some(source) = args.source {
        config.source_url = source;
    }
    config.validate().context("Invalid configuration")?;

    let db = Database::open(&config.database_path)
        .await
        .with_context(|| format!("Failed to open database at {}", config.database_path))?;

    let state = Arc::new(AppState::new(db, config.source_url.clone()));
    server::serve(&config.bind_addr, state).await
}
