//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.wicket/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WicketConfig {
    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BackendConfig {
    pub endpoint: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.wicket/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".wicket").join("config.toml"))
}

/// Load config from `~/.wicket/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `WicketConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<WicketConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(WicketConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(WicketConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: WicketConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Wicket Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults, then this file, then env vars, then CLI flags.

# [backend]
# endpoint = "http://localhost:5000"   # Or set WICKET_ENDPOINT env var
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_endpoint` is from the `--endpoint` flag (None = not specified).
pub fn resolve(config: &WicketConfig, cli_endpoint: Option<&str>) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let endpoint = cli_endpoint
        .map(|s| s.to_string())
        .or_else(|| std::env::var("WICKET_ENDPOINT").ok())
        .or_else(|| config.backend.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    ResolvedConfig { endpoint }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = WicketConfig::default();
        assert!(config.backend.endpoint.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = WicketConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_resolve_config_value_overrides_default() {
        let config = WicketConfig {
            backend: BackendConfig {
                endpoint: Some("http://10.0.0.7:8080".to_string()),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.endpoint, "http://10.0.0.7:8080");
    }

    #[test]
    fn test_resolve_cli_endpoint_wins() {
        let config = WicketConfig {
            backend: BackendConfig {
                endpoint: Some("http://from-config:5000".to_string()),
            },
        };
        let resolved = resolve(&config, Some("http://from-cli:5000"));
        assert_eq!(resolved.endpoint, "http://from-cli:5000");
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[backend]
endpoint = "http://192.168.1.100:5000"
"#;
        let config: WicketConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.backend.endpoint.as_deref(),
            Some("http://192.168.1.100:5000")
        );
    }

    #[test]
    fn test_sparse_toml_parses() {
        // An empty file is a valid config; everything stays default
        let config: WicketConfig = toml::from_str("").unwrap();
        assert!(config.backend.endpoint.is_none());
    }
}
