pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo-instruct";
pub const DEFAULT_COMPLETIONS_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_GEOCODING_BASE_URL: &str = "https://api.opencagedata.com";
