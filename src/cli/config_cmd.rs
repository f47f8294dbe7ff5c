use anyhow::Result;

use crate::config::Config;

use super::args::Cli;
use super::util::mask_api_key;

pub(crate) fn handle_config_direct(args: &Cli, config: &mut Config) -> Result<()> {
    let mut existing_config = if Config::config_path()?.exists() {
        Config::load()?
    } else {
        config.clone()
    };

    if let Some(ref api_key) = args.api_key {
        existing_config.llm.api_key = api_key.clone();
    }

    if let Some(ref geocode_api_key) = args.geocode_api_key {
        existing_config.geocoding.api_key = geocode_api_key.clone();
    }

    if let Some(timeout) = args.timeout {
        existing_config.llm.timeout_secs = timeout;
    }

    if let Some(max_tokens) = args.max_tokens {
        existing_config.trip.max_tokens = max_tokens;
    }

    if let Some(ref model) = args.model {
        existing_config.trip.model = model.clone();
    }

    existing_config.save()?;
    *config = existing_config.clone();

    println!(
        "✅ Configuration saved to {}",
        Config::config_path()?.display()
    );
    println!("📋 Current configuration:");
    println!(
        "   OpenAI API Key: {}",
        mask_api_key(&existing_config.llm.api_key)
    );
    println!(
        "   Geocoding API Key: {}",
        mask_api_key(&existing_config.geocoding.api_key)
    );
    println!("   Timeout: {}s", existing_config.llm.timeout_secs);
    println!("   Model: {}", existing_config.trip.model);
    println!("   Max Tokens: {}", existing_config.trip.max_tokens);

    Ok(())
}
