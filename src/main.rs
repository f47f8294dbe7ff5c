mod cli;
mod client;
mod config;
mod geocode;
mod planner;
mod session;
mod validator;

use anyhow::Result;
use clap::Parser;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Setup must run before a loadable config exists on disk.
    if cli.setup {
        return cli.run_setup().await;
    }

    let config = Config::load()?;
    cli.run(config).await
}
