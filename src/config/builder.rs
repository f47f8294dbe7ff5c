use anyhow::Result;
use super::types::{Config, GeocodingSettings, LlmSettings, TripSettings};

#[derive(Debug)]
pub struct ConfigBuilder {
    pub(super) llm: LlmSettings,
    pub(super) geocoding: GeocodingSettings,
    pub(super) trip: TripSettings,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            llm: LlmSettings::default(),
            geocoding: GeocodingSettings::default(),
            trip: TripSettings::default(),
        }
    }

    pub fn with_llm<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut LlmSettings),
    {
        update(&mut self.llm);
        self
    }

    pub fn with_geocoding<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut GeocodingSettings),
    {
        update(&mut self.geocoding);
        self
    }

    pub fn with_trip<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut TripSettings),
    {
        update(&mut self.trip);
        self
    }

    pub fn build(self) -> Result<Config> {
        Ok(Config {
            llm: self.llm,
            geocoding: self.geocoding,
            trip: self.trip,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
