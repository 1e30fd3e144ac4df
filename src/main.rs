mod cli;
mod config;
mod reading;
mod report;
mod stations;
mod storm;

use anyhow::{Error, Result};
use clap::Parser;
use cli::{command, Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Storms(args) => match command::storms(args).await {
            Ok(paths) => {
                println!("File saved to `{}`", paths.table.display());
                println!("File saved to `{}`", paths.geojson.display());
            }
            Err(e) => {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
