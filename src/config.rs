/// Service configuration.
///
/// Settings load from an optional TOML file (`wordlook.toml` by default)
/// with hard-coded defaults when the file is absent. The API base URL can
/// additionally be overridden through the `WORDLOOK_BASE_URL` environment
/// variable, which the binary populates from `.env` via dotenv — useful for
/// pointing the service at a mock server in development.

use serde::Deserialize;

use crate::ingest::datamuse::DATAMUSE_BASE_URL;

// ---------------------------------------------------------------------------
// Configuration types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    pub api: ApiConfig,
    pub logging: LogConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the Datamuse-compatible API.
    pub base_url: String,
    /// Cap on entries requested per lookup (`max=` query parameter).
    pub max_results: usize,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Optional log file path; console-only when absent.
    pub file: Option<String>,
    /// Whether console lines carry timestamps.
    pub console_timestamps: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            logging: LogConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DATAMUSE_BASE_URL.to_string(),
            max_results: 100,
            timeout_secs: 30,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            console_timestamps: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can arise when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "Failed to parse config file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl ServiceConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: &str) -> Result<ServiceConfig, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::parse(&text)
    }

    /// Parses configuration from TOML text. Missing sections and fields
    /// fall back to their defaults.
    pub fn parse(text: &str) -> Result<ServiceConfig, ConfigError> {
        let mut config: ServiceConfig = toml::from_str(text).map_err(ConfigError::Parse)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Loads from `path` when the file exists, defaults otherwise. Parse
    /// errors in an existing file are still reported — a malformed file
    /// should not silently degrade to defaults.
    pub fn load_or_default(path: &str) -> Result<ServiceConfig, ConfigError> {
        if std::path::Path::new(path).exists() {
            Self::load(path)
        } else {
            let mut config = ServiceConfig::default();
            config.apply_env_overrides();
            Ok(config)
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("WORDLOOK_BASE_URL") {
            if !url.is_empty() {
                self.api.base_url = url;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_datamuse() {
        let config = ServiceConfig::default();
        assert_eq!(config.api.base_url, "https://api.datamuse.com");
        assert_eq!(config.api.max_results, 100);
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let text = r#"
            [api]
            base_url = "http://localhost:9090"
            max_results = 25
            timeout_secs = 5

            [logging]
            level = "debug"
            file = "wordlook.log"
            console_timestamps = true
        "#;
        let config = ServiceConfig::parse(text).expect("valid TOML should parse");
        assert_eq!(config.api.base_url, "http://localhost:9090");
        assert_eq!(config.api.max_results, 25);
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file.as_deref(), Some("wordlook.log"));
        assert!(config.logging.console_timestamps);
    }

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let text = r#"
            [api]
            max_results = 10
        "#;
        let config = ServiceConfig::parse(text).unwrap();
        assert_eq!(config.api.max_results, 10);
        assert_eq!(config.api.base_url, "https://api.datamuse.com");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_empty_text_is_all_defaults() {
        let config = ServiceConfig::parse("").unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        let result = ServiceConfig::parse("[api\nmax_results = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_or_default_with_absent_file() {
        let config = ServiceConfig::load_or_default("/nonexistent/wordlook.toml").unwrap();
        assert_eq!(config.api.max_results, ServiceConfig::default().api.max_results);
    }
}
