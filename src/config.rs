//! Application configuration.
//!
//! The configuration is loaded from a JSON file at
//! `$XDG_CONFIG_HOME/spellgate/config.json`.  The top-level schema uses a
//! `"listener"` key so the file can be extended with additional sections
//! later without breaking backward compatibility.
//!
//! # Example
//!
//! ```json
//! {
//!   "listener": {
//!     "port": 5005
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default UDP port, matching the duel client's sender.
///
/// The port must agree with the sender's configured destination
/// out-of-band; there is no negotiation or discovery.
pub const DEFAULT_PORT: u16 = 5005;

/// Top-level configuration.
///
/// Every field is optional — a minimal `{}` file is valid and all
/// sections fall back to their compiled-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Command listener settings.
    #[serde(default)]
    pub listener: ListenerConfig,
}

/// Command listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// UDP port to listen on (all local interfaces).  Default: `5005`.
    pub port: u16,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
