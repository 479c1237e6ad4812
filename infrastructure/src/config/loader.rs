//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use harvest_domain::scrape::SCRAPE_API_KEY_ENV;
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["harvest.toml", ".harvest.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./harvest.toml` or `./.harvest.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/harvest/config.toml`
    /// 4. Default values
    ///
    /// `SCRAPINGBEE_API_KEY`, when set, then replaces `scrape.api_key`.
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        let mut config: FileConfig = figment.extract().map_err(Box::new)?;
        Self::apply_env(&mut config, std::env::var(SCRAPE_API_KEY_ENV).ok());
        Ok(config)
    }

    /// Defaults plus the environment (for `--no-config`)
    pub fn load_defaults() -> FileConfig {
        let mut config = FileConfig::default();
        Self::apply_env(&mut config, std::env::var(SCRAPE_API_KEY_ENV).ok());
        config
    }

    /// Override the API key from the environment value, when non-empty
    fn apply_env(config: &mut FileConfig, api_key: Option<String>) {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            config.scrape.api_key = Some(key);
        }
    }

    /// Get the global config file path (`<config dir>/harvest/config.toml`)
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("harvest").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for `--show-config`)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<7}] Explicit: {}", mark, path.display());
        }

        match Self::project_config_path() {
            Some(path) => println!("  [FOUND  ] Project:  {}", path.display()),
            None => println!("  [       ] Project:  ./harvest.toml or ./.harvest.toml"),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "" };
            println!("  [{:<7}] Global:   {}", mark, path.display());
        }

        println!("  [       ] Default:  built-in defaults");

        let env_mark = if std::env::var_os(SCRAPE_API_KEY_ENV).is_some() {
            "SET"
        } else {
            ""
        };
        println!("  [{:<7}] Env:      {}", env_mark, SCRAPE_API_KEY_ENV);
    }
}
