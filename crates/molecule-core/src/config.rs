//! Capability configuration, passed explicitly to the components that use it.
//!
//! Every field has a default, so an empty YAML document is a valid config:
//!
//! ```yaml
//! title_defaults: { fade_in: 10, stay: 70, fade_out: 20 }
//! text:
//!   player_placeholder: "%player%"
//!   alternate_marker: "&"
//!   skip_empty_action_bar: true
//! logging:
//!   prefix: "[Molecule]"
//!   pretty: true
//!   filter: info
//! ```
use crate::error::CapabilityError;
use crate::packet::TitleTimes;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapabilityConfig {
    /// Timings used by the two-argument title call
    pub title_defaults: TitleTimes,
    pub text: TextOptions,
    pub logging: LoggingConfig,
}

impl CapabilityConfig {
    /// Load config from a YAML file
    pub fn load(path: &str) -> Result<Self, CapabilityError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CapabilityError::Config(format!("failed to read {}: {}", path, e)))?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(path, "loaded capability config");
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, CapabilityError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| CapabilityError::Config(format!("failed to parse: {}", e)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextOptions {
    /// Literal token replaced with the target's display name
    pub player_placeholder: String,
    /// Marker translated to the canonical section sign
    pub alternate_marker: char,
    /// Empty action-bar text sends nothing
    pub skip_empty_action_bar: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            player_placeholder: "%player%".to_string(),
            alternate_marker: '&',
            skip_empty_action_bar: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Prepended to every log line
    pub prefix: Option<String>,
    /// ANSI colors on console output
    pub pretty: bool,
    /// `EnvFilter` directive; `RUST_LOG` wins when set
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            prefix: None,
            pretty: true,
            filter: "info".to_string(),
        }
    }
}
