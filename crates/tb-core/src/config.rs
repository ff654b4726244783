//! Application configuration types.
//!
//! The top-level [`Config`] is deserialized from JSON and then overridden by
//! environment variables. Every field defaults sensibly so an empty `{}`
//! file (or no file at all) is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::Error;

/// Env var naming an optional JSON config file.
pub const CONFIG_PATH_ENV: &str = "TEAMBOARD_CONFIG";

/// Env var overriding [`ServerConfig::port`].
pub const PORT_ENV: &str = "PORT";

/// Env var overriding [`ServerConfig::host`].
pub const HOST_ENV: &str = "HOST";

/// Env var overriding [`ServerConfig::db_path`].
pub const DATABASE_PATH_ENV: &str = "DATABASE_PATH";

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
}

impl Config {
    /// Deserialize a `Config` from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| Error::Validation(format!("config parse error: {e}")))
    }

    /// Load configuration from a file path, falling back to defaults if the
    /// path is `None`, the file does not exist, or it fails to parse.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file {}: {e}", path.display());
                Self::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No config file at {}; using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read config file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Load the file named by `TEAMBOARD_CONFIG` (if any), then apply the
    /// process environment on top.
    pub fn from_env() -> Self {
        let path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        let mut config = Self::load_or_default(path.as_deref());
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Override server settings from environment-style lookups.
    ///
    /// An unparsable `PORT` is logged and ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(PORT_ENV) {
            match port.trim().parse::<u16>() {
                Ok(p) => self.server.port = p,
                Err(e) => tracing::warn!("Ignoring invalid {PORT_ENV} value '{port}': {e}"),
            }
        }
        if let Some(host) = lookup(HOST_ENV).filter(|h| !h.is_empty()) {
            self.server.host = host;
        }
        if let Some(db_path) = lookup(DATABASE_PATH_ENV).filter(|p| !p.is_empty()) {
            self.server.db_path = PathBuf::from(db_path);
        }
    }

    /// Return a list of validation warnings (non-fatal issues).
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.server.port == 0 {
            warnings.push("server.port is 0; a random port will be assigned".into());
        }
        if self.server.host.is_empty() {
            warnings.push("server.host is empty".into());
        }
        if self.server.db_path.as_os_str().is_empty() {
            warnings.push("server.db_path is empty".into());
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            db_path: PathBuf::from("teamboard.db"),
        }
    }
}
