//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Parser tuning knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Minimum similarity score (0-100) for a fuzzy product match;
    /// the boundary is inclusive
    #[serde(default = "default_match_threshold")]
    pub match_threshold: u8,

    /// Messages are capped at this many characters before scanning, so a
    /// single oversized message cannot stall a worker
    #[serde(default = "default_max_message_len")]
    pub max_message_len: usize,
}

fn default_match_threshold() -> u8 {
    70
}

fn default_max_message_len() -> usize {
    4096
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            match_threshold: default_match_threshold(),
            max_message_len: default_max_message_len(),
        }
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Parser configuration
    #[serde(default)]
    pub parser: ParserConfig,

    /// Path to the product catalog YAML; built-in defaults when unset
    #[serde(default)]
    pub catalog_path: Option<String>,
}

impl Settings {
    /// Validate settings; invalid static configuration is fatal at startup
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parser.match_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                field: "parser.match_threshold".to_string(),
                message: "must be in 0..=100".to_string(),
            });
        }
        if self.parser.max_message_len == 0 {
            return Err(ConfigError::InvalidValue {
                field: "parser.max_message_len".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Load settings from config files and environment
///
/// Sources, later ones overriding earlier:
/// 1. `config/default.yaml` (optional)
/// 2. `config/{env}.yaml` when `env` is given (optional)
/// 3. `KIRANA_AGENT_` environment variables (`__` separator, e.g.
///    `KIRANA_AGENT_PARSER__MATCH_THRESHOLD=80`)
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("KIRANA_AGENT")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}
