use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmSettings,
    pub geocoding: GeocodingSettings,
    pub trip: TripSettings,
}

/// Settings for the text-completion collaborator.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

/// Settings for the place-lookup collaborator.
#[derive(Debug, Clone)]
pub struct GeocodingSettings {
    pub api_key: String,
    pub base_url: String,
}

/// Generation parameters for travel plan requests.
#[derive(Debug, Clone)]
pub struct TripSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

// File configuration types
#[derive(Debug, Deserialize)]
pub(super) struct FileConfig {
    #[serde(default)]
    pub llm: Option<FileLlmSettings>,
    #[serde(default)]
    pub geocoding: Option<FileGeocodingSettings>,
    #[serde(default)]
    pub trip: Option<FileTripSettings>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FileLlmSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FileGeocodingSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FileTripSettings {
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

// Serialization helpers
#[derive(Serialize)]
pub(super) struct PersistedConfig<'a> {
    pub llm: PersistedLlm<'a>,
    pub geocoding: PersistedGeocoding<'a>,
    pub trip: PersistedTrip<'a>,
}

#[derive(Serialize)]
pub(super) struct PersistedLlm<'a> {
    pub api_key: &'a str,
    pub base_url: &'a str,
    pub timeout_secs: u64,
    pub user_agent: &'a str,
}

#[derive(Serialize)]
pub(super) struct PersistedGeocoding<'a> {
    pub api_key: &'a str,
    pub base_url: &'a str,
}

#[derive(Serialize)]
pub(super) struct PersistedTrip<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl<'a> From<&'a Config> for PersistedConfig<'a> {
    fn from(config: &'a Config) -> Self {
        PersistedConfig {
            llm: PersistedLlm {
                api_key: &config.llm.api_key,
                base_url: &config.llm.base_url,
                timeout_secs: config.llm.timeout_secs,
                user_agent: &config.llm.user_agent,
            },
            geocoding: PersistedGeocoding {
                api_key: &config.geocoding.api_key,
                base_url: &config.geocoding.base_url,
            },
            trip: PersistedTrip {
                model: &config.trip.model,
                max_tokens: config.trip.max_tokens,
                temperature: config.trip.temperature,
            },
        }
    }
}
