//! Infowar - command-line tooling for the Infowar rules engine.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use infowar::{InfowarConfig, commands};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = InfowarConfig::load(cli.config.as_deref())?.with_format(cli.format);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "Configuration resolved");

    let output = match cli.command {
        Command::Replay { file } => commands::replay(&file, &config)?,
        Command::Propose { file, entry } => commands::propose(&file, &entry, &config)?,
        Command::Neighbors { circle, rank } => commands::neighbors(circle, rank, &config)?,
        Command::Distance { c1, r1, c2, r2 } => commands::measure((c1, r1), (c2, r2), &config)?,
        Command::Schema => commands::schema(&config)?,
    };

    println!("{output}");
    info!("Done");
    Ok(())
}
