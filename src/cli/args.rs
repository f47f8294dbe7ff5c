use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::Config;

use super::commands;

/// Entry point for the `voya` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "voya",
    about = "AI travel planner in your terminal",
    version,
    long_about = None
)]
pub struct Cli {
    /// Optional page subcommand; omit it to open the interactive page menu
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Interactive setup for first-time configuration
    #[arg(long = "setup")]
    pub setup: bool,

    /// Configure voya settings
    #[arg(long)]
    pub config: bool,

    /// Set the OpenAI API key
    #[arg(long)]
    pub api_key: Option<String>,

    /// Set the OpenCage geocoding API key
    #[arg(long)]
    pub geocode_api_key: Option<String>,

    /// Set timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Set max tokens per generated plan
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Set the completion model
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a travel plan and itinerary from trip preferences.
    Plan(PlanArgs),
    /// Collect per-day activities and review them as a table.
    Daily(DailyArgs),
    /// Look up the formatted address of a place.
    Locate(LocateArgs),
}

#[derive(Debug, Args, Default)]
pub struct PlanArgs {
    /// Travel destination (prompted for when omitted)
    #[arg(long)]
    pub destination: Option<String>,

    /// Trip duration in days
    #[arg(long)]
    pub days: Option<u32>,

    /// Travel budget
    #[arg(long)]
    pub budget: Option<f64>,

    /// Type of enjoyment during the trip (e.g. food, hiking, museums)
    #[arg(long = "enjoy")]
    pub enjoyment: Option<String>,

    /// Number of people traveling
    #[arg(long)]
    pub travelers: Option<u32>,
}

#[derive(Debug, Args, Default)]
pub struct DailyArgs {
    /// Number of days to plan (defaults to the current trip duration)
    #[arg(long)]
    pub days: Option<u32>,
}

#[derive(Debug, Args)]
pub struct LocateArgs {
    /// Name of the place to look up.
    #[arg(required = true)]
    pub place: Vec<String>,
}

impl Cli {
    pub async fn run_setup(self) -> Result<()> {
        commands::run_setup()
    }

    pub async fn run(self, config: Config) -> Result<()> {
        commands::run(self, config).await
    }
}
