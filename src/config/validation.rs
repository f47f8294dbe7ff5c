use anyhow::{Result, anyhow};

use super::types::Config;

pub fn validate(config: &Config) -> Result<()> {
    if config.llm.api_key.trim().is_empty() {
        Err(anyhow!(
            "OpenAI API key not found. Set OPENAI_API_KEY or add it to {}",
            Config::config_path()?.display()
        ))
    } else {
        Ok(())
    }
}
