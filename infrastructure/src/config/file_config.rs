//! Raw TOML configuration data types
//!
//! These structs mirror the config file exactly. [`FileConfig::validate`]
//! checks them; `to_*_config` turns them into the application-layer values.

use harvest_application::config::clone_config::DEFAULT_TEMP_PREFIX;
use harvest_application::config::scrape_config::{
    DEFAULT_CLIENT_TIMEOUT_SECS, DEFAULT_SCRAPE_ENDPOINT,
};
use harvest_application::config::{CloneConfig, ScrapeConfig};
use harvest_domain::OutputFormat;
use harvest_domain::repository::GIT_PROGRAM;
use harvest_domain::scrape::MAX_PAGE_CHARS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// Re-export OutputFormat from domain for convenience
pub use harvest_domain::OutputFormat as FileOutputFormat;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("clone.git_program cannot be empty")]
    EmptyGitProgram,

    #[error("clone.temp_prefix cannot contain path separators: {0}")]
    InvalidTempPrefix(String),

    #[error("scrape.endpoint must be an http(s) URL: {0}")]
    InvalidEndpoint(String),

    #[error("scrape.max_chars cannot be 0")]
    ZeroMaxChars,

    #[error("scrape.client_timeout_secs cannot be 0")]
    ZeroTimeout,
}

/// `[clone]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCloneConfig {
    /// git executable name or path
    pub git_program: String,
    /// Prefix of temporary holder directories
    pub temp_prefix: String,
    /// Where credential files are written (default: system temp directory)
    pub credential_dir: Option<PathBuf>,
}

impl Default for FileCloneConfig {
    fn default() -> Self {
        Self {
            git_program: GIT_PROGRAM.to_string(),
            temp_prefix: DEFAULT_TEMP_PREFIX.to_string(),
            credential_dir: None,
        }
    }
}

/// `[scrape]` section
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileScrapeConfig {
    /// ScrapingBee API key (usually supplied through `SCRAPINGBEE_API_KEY`)
    pub api_key: Option<String>,
    pub endpoint: String,
    pub max_chars: usize,
    pub client_timeout_secs: u64,
}

impl Default for FileScrapeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_SCRAPE_ENDPOINT.to_string(),
            max_chars: MAX_PAGE_CHARS,
            client_timeout_secs: DEFAULT_CLIENT_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for FileScrapeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileScrapeConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("max_chars", &self.max_chars)
            .field("client_timeout_secs", &self.client_timeout_secs)
            .finish()
    }
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub clone: FileCloneConfig,
    pub scrape: FileScrapeConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Check values the TOML types cannot express
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.clone.git_program.trim().is_empty() {
            return Err(ConfigValidationError::EmptyGitProgram);
        }
        if self.clone.temp_prefix.contains(['/', '\\']) {
            return Err(ConfigValidationError::InvalidTempPrefix(
                self.clone.temp_prefix.clone(),
            ));
        }
        let endpoint = &self.scrape.endpoint;
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigValidationError::InvalidEndpoint(endpoint.clone()));
        }
        if self.scrape.max_chars == 0 {
            return Err(ConfigValidationError::ZeroMaxChars);
        }
        if self.scrape.client_timeout_secs == 0 {
            return Err(ConfigValidationError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn to_clone_config(&self) -> CloneConfig {
        CloneConfig {
            git_program: self.clone.git_program.clone(),
            temp_prefix: self.clone.temp_prefix.clone(),
            credential_dir: self.clone.credential_dir.clone(),
        }
    }

    pub fn to_scrape_config(&self) -> ScrapeConfig {
        ScrapeConfig {
            api_key: self.scrape.api_key.clone(),
            endpoint: self.scrape.endpoint.clone(),
            max_chars: self.scrape.max_chars,
            client_timeout_secs: self.scrape.client_timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[clone]
git_program = "/opt/git/bin/git"
temp_prefix = "agent_clone_"
credential_dir = "/run/harvest"

[scrape]
api_key = "from-file"
endpoint = "https://scraper.internal/api/v1/"
max_chars = 1000
client_timeout_secs = 45

[output]
format = "json"
color = false
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_ok());

        let clone = config.to_clone_config();
        assert_eq!(clone.git_program, "/opt/git/bin/git");
        assert_eq!(clone.temp_prefix, "agent_clone_");
        assert_eq!(clone.credential_dir(), PathBuf::from("/run/harvest"));

        let scrape = config.to_scrape_config();
        assert_eq!(scrape.api_key(), Some("from-file"));
        assert_eq!(scrape.endpoint, "https://scraper.internal/api/v1/");
        assert_eq!(scrape.max_chars, 1000);
        assert_eq!(scrape.client_timeout_secs, 45);

        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: FileConfig = toml::from_str("[scrape]\nmax_chars = 500\n").unwrap();
        assert_eq!(config.scrape.max_chars, 500);
        assert_eq!(config.scrape.client_timeout_secs, 20);
        assert_eq!(config.clone, FileCloneConfig::default());
        assert_eq!(config.to_clone_config(), CloneConfig::default());
    }

    #[test]
    fn test_defaults_match_application_defaults() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.to_clone_config(), CloneConfig::default());
        assert_eq!(config.to_scrape_config(), ScrapeConfig::default());
    }

    #[test]
    fn test_validation_errors() {
        let mut config = FileConfig::default();
        config.clone.git_program = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyGitProgram));

        let mut config = FileConfig::default();
        config.clone.temp_prefix = "../escape".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTempPrefix(_))
        ));

        let mut config = FileConfig::default();
        config.scrape.endpoint = "ftp://example.com".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidEndpoint(_))
        ));

        let mut config = FileConfig::default();
        config.scrape.client_timeout_secs = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::ZeroTimeout));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let mut config = FileConfig::default();
        config.scrape.api_key = Some("top-secret".to_string());
        assert!(!format!("{:?}", config).contains("top-secret"));
    }
}
