//! Configuration System
//!
//! Handles loading host configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Static host configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Built frontend bundle (index.html, wasm, js)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,

    /// Images referenced by the page
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("admindash-ui/dist")
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("admindash-ui/public")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
            assets_dir: default_assets_dir(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Standard config file locations, in search order
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("admindash").join("config.toml"));
        }
        paths.push(PathBuf::from("/etc/admindash/config.toml"));
        paths.push(PathBuf::from("./config.toml"));
        paths
    }

    /// Load from default locations or environment
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_first(&Self::default_paths())
    }

    /// Load the first file in `paths` that exists, falling back to defaults
    /// with environment overrides when none does. A file that exists but
    /// cannot be read or parsed is an error.
    pub fn load_first(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => {
                let config = Self::load_with_env(path)?;
                tracing::info!("Loaded config from {:?}", path);
                Ok(config)
            }
            None => {
                tracing::info!("Using default config with environment overrides");
                Ok(Self::from_env())
            }
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `ADMINDASH_*` overrides from any key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("ADMINDASH_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("ADMINDASH_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid ADMINDASH_PORT: {}", port),
            }
        }
        if let Some(dir) = lookup("ADMINDASH_DIST_DIR") {
            self.server.dist_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("ADMINDASH_ASSETS_DIR") {
            self.server.assets_dir = PathBuf::from(dir);
        }

        if let Some(level) = lookup("ADMINDASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("ADMINDASH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Admindash Configuration
#
# Environment variables override these settings:
# - ADMINDASH_HOST
# - ADMINDASH_PORT
# - ADMINDASH_DIST_DIR
# - ADMINDASH_ASSETS_DIR
# - ADMINDASH_LOG_LEVEL
# - ADMINDASH_LOG_FORMAT

[server]
# Host to bind to
host = "0.0.0.0"

# Port to listen on
port = 8084

# Built frontend bundle (output of `trunk build` in admindash-ui)
dist_dir = "admindash-ui/dist"

# Carousel images and modal artwork
assets_dir = "admindash-ui/public"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "0.0.0.0:8084");
        assert_eq!(config.server.index_file(), PathBuf::from("admindash-ui/dist/index.html"));
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8084);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 9000\n\n[logging]\nformat = \"json\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[server\nport = ").unwrap();
        assert!(matches!(Config::load(&bad), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_first_reports_broken_file() {
        let dir = tempdir().unwrap();
        let absent = dir.path().join("absent.toml");
        let bad = dir.path().join("bad.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&bad, "[server").unwrap();
        std::fs::write(&good, "[server]\nport = 9100\n").unwrap();

        let err = Config::load_first(&[absent.clone(), bad.clone(), good.clone()]).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref path, .. } if *path == bad));

        let config = Config::load_first(&[absent.clone(), good]).unwrap();
        assert_eq!(config.server.port, 9100);

        assert!(Config::load_first(&[absent]).is_ok());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("ADMINDASH_PORT", "8181"),
            ("ADMINDASH_ASSETS_DIR", "/srv/images"),
            ("ADMINDASH_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.port, 8181);
        assert_eq!(config.server.assets_dir, PathBuf::from("/srv/images"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_port_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "ADMINDASH_PORT").then(|| "http".to_string()));
        assert_eq!(config.server.port, 8084);
    }
}
