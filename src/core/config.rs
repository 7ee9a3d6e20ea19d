//! # Configuration
//!
//! Centralizes where the backend lives and how long to wait for it, with a
//! clear override hierarchy: defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tutorials/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TutorialsConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_BASE_URL: &str = "TUTORIALS_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "TUTORIALS_TIMEOUT_SECS";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub timeout: Duration,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.tutorials/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tutorials").join("config.toml"))
}

/// Load config from `~/.tutorials/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TutorialsConfig::default()`.
pub fn load_config() -> Result<TutorialsConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TutorialsConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<TutorialsConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(TutorialsConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: TutorialsConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Tutorials Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [server]
# base_url = "http://localhost:8080"   # Or set TUTORIALS_BASE_URL
# timeout_secs = 10                    # Or set TUTORIALS_TIMEOUT_SECS
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TutorialsConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an explicit environment lookup.
pub fn resolve_with(
    config: &TutorialsConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env(ENV_BASE_URL))
        .or_else(|| config.server.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let env_timeout = env(ENV_TIMEOUT_SECS).and_then(|raw| match raw.trim().parse::<u64>() {
        Ok(secs) => Some(secs),
        Err(e) => {
            warn!("Ignoring {ENV_TIMEOUT_SECS}={raw:?}: {e}");
            None
        }
    });

    let timeout_secs = cli
        .timeout_secs
        .or(env_timeout)
        .or(config.server.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    ResolvedConfig {
        base_url,
        timeout: Duration::from_secs(timeout_secs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with(&TutorialsConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = TutorialsConfig {
            server: ServerConfig {
                base_url: Some("http://backend:9000".to_string()),
                timeout_secs: Some(3),
            },
        };
        let resolved = resolve_with(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.base_url, "http://backend:9000");
        assert_eq!(resolved.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_resolve_env_wins_over_config() {
        let config = TutorialsConfig {
            server: ServerConfig {
                base_url: Some("http://from-config".to_string()),
                timeout_secs: Some(3),
            },
        };
        let resolved = resolve_with(&config, &CliOverrides::default(), |key| match key {
            ENV_BASE_URL => Some("http://from-env".to_string()),
            ENV_TIMEOUT_SECS => Some("7".to_string()),
            _ => None,
        });
        assert_eq!(resolved.base_url, "http://from-env");
        assert_eq!(resolved.timeout, Duration::from_secs(7));
    }

    #[test]
    fn test_resolve_cli_wins() {
        let cli = CliOverrides {
            base_url: Some("http://from-cli".to_string()),
            timeout_secs: Some(1),
        };
        let resolved = resolve_with(&TutorialsConfig::default(), &cli, |_| {
            Some("999".to_string())
        });
        assert_eq!(resolved.base_url, "http://from-cli");
        assert_eq!(resolved.timeout, Duration::from_secs(1));
    }

    #[test]
    fn test_resolve_ignores_unparseable_env_timeout() {
        let resolved = resolve_with(&TutorialsConfig::default(), &CliOverrides::default(), |key| {
            (key == ENV_TIMEOUT_SECS).then(|| "soon".to_string())
        });
        assert_eq!(resolved.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[server]
base_url = "http://192.168.1.100:8080"
timeout_secs = 30
"#;
        let config: TutorialsConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.server.base_url.as_deref(),
            Some("http://192.168.1.100:8080")
        );
        assert_eq!(config.server.timeout_secs, Some(30));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: TutorialsConfig = toml::from_str("").unwrap();
        assert!(config.server.base_url.is_none());
        assert!(config.server.timeout_secs.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("tutorials-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[server\nbase_url = ").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir =
            std::env::temp_dir().join(format!("tutorials-config-gen-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.server.base_url.is_none());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# [server]"));
        // The generated file is all comments, so it parses as defaults.
        let reparsed: TutorialsConfig = toml::from_str(&written).unwrap();
        assert!(reparsed.server.timeout_secs.is_none());

        fs::remove_dir_all(&dir).unwrap();
    }
}
