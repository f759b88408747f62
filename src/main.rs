//! User registry HTTP service.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --listen 127.0.0.1:8080 --log-format json
//! ```
//!
//! Flags override the matching environment variables (see
//! [`user_registry::config`]).

use anyhow::Result;
use clap::Parser;
use user_registry::{config, logging, server};

/// User records REST service.
#[derive(Parser)]
#[command(name = "user-registry")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides `LISTEN`
    #[arg(short, long)]
    listen: Option<String>,

    /// Log output format (`text` or `json`), overrides `LOG_FORMAT`
    #[arg(long)]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::Config::from_env()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if let Some(log_format) = cli.log_format {
        config.log_format = log_format;
    }
    config.validate()?;

    logging::init(&config.log_level, &config.log_format)?;
    config.print_summary();

    server::run(config).await
}
