use anyhow::{Result, bail};
use colored::*;

use crate::config::Config;
use crate::geocode::GeocodeClient;

use super::args::LocateArgs;
use super::util::prompt_nonempty_string;

pub(crate) async fn handle_locate(args: LocateArgs, config: &Config) -> Result<()> {
    let place = args.place.join(" ").trim().to_owned();
    if place.is_empty() {
        bail!("Please enter the name of a place.");
    }

    run_locate(&place, config).await
}

pub(crate) async fn run_interactive(config: &Config) -> Result<()> {
    println!("\n{}", "Place Location Finder".bold());
    println!("Enter the name of a place to find its location.");

    let place = prompt_nonempty_string("📍 Name of the place")?;
    run_locate(&place, config).await
}

async fn run_locate(place: &str, config: &Config) -> Result<()> {
    // Only this page needs the geocoding key, so it is checked here
    // rather than during config validation.
    if config.geocoding.api_key.trim().is_empty() {
        bail!(
            "OpenCage API key not found. Set OPENCAGE_API_KEY or run 'voya --setup' to configure geocoding."
        );
    }

    let client = GeocodeClient::new(&config.geocoding)?;
    match client.find_place(place).await? {
        Some(address) => {
            println!("\n{}", "Location:".bold());
            println!("{address}");
        }
        None => println!("\n{}", "⚠️  Location not found.".yellow()),
    }

    Ok(())
}
