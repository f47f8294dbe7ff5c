use anyhow::Result;

use crate::config::Config;
use crate::session::Session;

use super::args::{Cli, Command};
use super::config_cmd;
use super::daily;
use super::locate;
use super::pages;
use super::plan;
use super::setup;

pub(crate) fn run_setup() -> Result<()> {
    setup::run_setup()
}

pub(crate) async fn run(cli: Cli, mut config: Config) -> Result<()> {
    // Handle config flags
    if cli.config
        || cli.api_key.is_some()
        || cli.geocode_api_key.is_some()
        || cli.timeout.is_some()
        || cli.max_tokens.is_some()
        || cli.model.is_some()
    {
        return config_cmd::handle_config_direct(&cli, &mut config);
    }

    match cli.command {
        Some(Command::Plan(args)) => {
            let mut session = Session::new();
            plan::handle_plan(args, &config, &mut session).await
        }
        Some(Command::Daily(args)) => {
            let session = Session::new();
            daily::handle_daily(args, &session)
        }
        Some(Command::Locate(args)) => locate::handle_locate(args, &config).await,
        None => pages::run_pages(&config).await,
    }
}
