use super::constants::*;
use super::types::{GeocodingSettings, LlmSettings, TripSettings};

pub fn default_user_agent() -> String {
    format!("voya/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_COMPLETIONS_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for GeocodingSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_GEOCODING_BASE_URL.to_string(),
        }
    }
}

impl Default for TripSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_COMPLETION_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}
