//! Runtime configuration.
//!
//! Settings come from `ARCHETYPE_ENGINE__`-prefixed environment variables
//! (optionally seeded from a `.env` file). Nested keys use `__`, so
//! `ARCHETYPE_ENGINE__ENGINE__HYBRID_THRESHOLD` sets `engine.hybrid_threshold`.
//!
//! ```no_run
//! use archetype_engine::config::AppConfig;
//!
//! let config = AppConfig::load().expect("configuration");
//! config.validate().expect("valid configuration");
//! ```

mod engine;
mod error;
mod logging;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root configuration. Every section has defaults, so an empty
/// environment is a valid setup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Classification engine configuration
    #[serde(default)]
    pub engine: EngineConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Reads `.env` if present, then the process environment.
    ///
    /// Unset keys fall back to their defaults; a value that cannot be parsed
    /// into its field type is a `ConfigError::LoadError`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ARCHETYPE_ENGINE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Checks cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
