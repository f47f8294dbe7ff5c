//! Configuration management for the voya CLI travel planner.
//!
//! This module provides a flexible configuration system that supports:
//! - File-based configuration
//! - Environment variable overrides
//! - Builder pattern for programmatic configuration
//! - Validation of required settings

mod builder;
mod constants;
mod defaults;
mod environment;
mod loader;
mod types;
mod validation;

// Re-export the main types for convenience
pub use types::{Config, GeocodingSettings, LlmSettings, TripSettings};

#[cfg(test)]
mod tests;
