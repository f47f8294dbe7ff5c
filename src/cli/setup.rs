use anyhow::Result;

use crate::config::Config;

use super::util::{
    mask_api_key, prompt_nonempty_string, prompt_optional_string, prompt_string_with_default,
    prompt_timeout, prompt_u32_with_default,
};

pub(crate) fn run_setup() -> Result<()> {
    println!("🚀 Welcome to voya setup!");
    println!("Let's configure your travel planning collaborators.\n");

    let api_key = prompt_nonempty_string("🔑 Enter your OpenAI API key")?;
    let geocode_api_key = prompt_optional_string(
        "🗺️  Enter your OpenCage geocoding API key (optional, used by the place finder)",
    )?;
    let timeout = prompt_timeout(30)?;

    let mut config = Config::builder().build()?;
    config.llm.api_key = api_key;
    config.llm.timeout_secs = timeout;
    config.geocoding.api_key = geocode_api_key;

    let default_model = config.trip.model.clone();
    config.trip.model = prompt_string_with_default("📋 Enter completion model ID", &default_model)?;
    config.trip.max_tokens = prompt_u32_with_default(
        "🔢 Enter max tokens per generated plan",
        config.trip.max_tokens,
    )?;

    config.validate()?;
    config.save()?;

    println!(
        "\n✅ Configuration saved to {}",
        Config::config_path()?.display()
    );
    println!("📋 Your configuration:");
    println!("   OpenAI API Key: {}", mask_api_key(&config.llm.api_key));
    println!(
        "   Geocoding API Key: {}",
        mask_api_key(&config.geocoding.api_key)
    );
    println!("   Timeout: {}s", config.llm.timeout_secs);
    println!("   Model: {}", config.trip.model);
    println!("   Max Tokens: {}", config.trip.max_tokens);
    println!("\n🎉 Setup complete! You can now use 'voya' with commands like:");
    println!("   voya                       # interactive page menu");
    println!("   voya plan --destination Lisbon --days 3 --budget 1500 --enjoy food --travelers 2");
    println!("   voya daily --days 3        # sketch activities for each day");
    println!("   voya locate Eiffel Tower   # look up a place\n");

    Ok(())
}
