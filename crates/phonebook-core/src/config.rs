// crates/phonebook-core/src/config.rs - Configuration System
//
// This module provides the configuration schema and loading mechanism for the
// phonebook CLI. Settings are few, but they follow the usual layering so that
// a shell profile or a project directory can pin the contact file.
//
// CONFIGURATION HIERARCHY (highest to lowest priority):
// 1. Command-line arguments (--filename, --page-size)
// 2. Environment variables (PHONEBOOK_FILE, PHONEBOOK_PAGE_SIZE)
// 3. Config file (--config path, or ./phonebook.toml when present)
// 4. Built-in defaults
//
// Command-line overrides are applied by the CLI context, not here.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "phonebook.toml";

/// Contact file used when nothing else is configured
pub const DEFAULT_CONTACTS_FILE: &str = "contacts.pb";

/// Page size used when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

pub const ENV_FILE: &str = "PHONEBOOK_FILE";
pub const ENV_PAGE_SIZE: &str = "PHONEBOOK_PAGE_SIZE";

/// Errors that can occur during configuration loading and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid TOML syntax in {file}: {error}")]
    ParseError { file: String, error: String },

    #[error("Invalid configuration value: {0}")]
    ValidationError(String),

    #[error("I/O error reading config {file}: {source}")]
    IoError {
        file: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete configuration schema
///
/// Every field has a default so partial TOML files are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneBookConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Where contacts are kept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the contact file, relative to the working directory
    #[serde(default = "default_filename")]
    pub filename: PathBuf,
}

/// How listings are paginated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Contacts per page for `display`
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_filename() -> PathBuf {
    PathBuf::from(DEFAULT_CONTACTS_FILE)
}
fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            filename: default_filename(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Configuration loading and management
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from all sources
    ///
    /// LOADING STRATEGY:
    /// 1. Start with built-in defaults
    /// 2. Override with the config file (explicit path, or ./phonebook.toml)
    /// 3. Override with environment variables
    ///
    /// An explicit path that does not exist is an error; a missing
    /// ./phonebook.toml is not.
    pub fn load_config(explicit_path: Option<&Path>) -> ConfigResult<PhoneBookConfig> {
        let mut config = match explicit_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound(path.display().to_string()));
                }
                Self::load_file(path)?
            }
            None => {
                let local = Path::new(DEFAULT_CONFIG_FILE);
                if local.exists() {
                    Self::load_file(local)?
                } else {
                    PhoneBookConfig::default()
                }
            }
        };

        Self::apply_env_overrides(&mut config, |key| env::var(key).ok())?;
        Self::validate_config(&config)?;

        debug!(
            filename = %config.store.filename.display(),
            page_size = config.display.page_size,
            "loaded configuration"
        );
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn load_file(path: &Path) -> ConfigResult<PhoneBookConfig> {
        let file = path.display().to_string();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::FileNotFound(file));
            }
            Err(source) => return Err(ConfigError::IoError { file, source }),
        };
        Self::parse(&content, &file)
    }

    /// Parse TOML text; `origin` names the source in error messages
    pub fn parse(content: &str, origin: &str) -> ConfigResult<PhoneBookConfig> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            file: origin.to_string(),
            error: e.to_string(),
        })
    }

    /// Apply environment variable overrides
    ///
    /// `lookup` resolves a variable name to its value, which keeps this
    /// independent of the process environment in tests.
    /// - PHONEBOOK_FILE -> store.filename
    /// - PHONEBOOK_PAGE_SIZE -> display.page_size
    pub fn apply_env_overrides<F>(config: &mut PhoneBookConfig, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(filename) = lookup(ENV_FILE) {
            config.store.filename = PathBuf::from(filename);
        }

        if let Some(page_size) = lookup(ENV_PAGE_SIZE) {
            config.display.page_size = page_size.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "{ENV_PAGE_SIZE} must be a positive integer, got '{page_size}'"
                ))
            })?;
        }

        Ok(())
    }

    /// Validate the final configuration
    pub fn validate_config(config: &PhoneBookConfig) -> ConfigResult<()> {
        if config.store.filename.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "store.filename cannot be empty".to_string(),
            ));
        }

        if config.display.page_size == 0 {
            return Err(ConfigError::ValidationError(
                "display.page_size must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Generate a default configuration file with comments
    pub fn generate_default_config() -> String {
        format!(
            r#"# Phonebook Configuration File
#
# Place this file at ./{DEFAULT_CONFIG_FILE} or pass it with --config.
# Lines starting with # are comments and are ignored.

[store]
# Contact file, one contact per line:
# surname,given name,patronymic,organization,work phone,personal phone
# Overridden by PHONEBOOK_FILE and --filename.
filename = "{DEFAULT_CONTACTS_FILE}"

[display]
# Contacts shown per page by `phonebook display`
# Overridden by PHONEBOOK_PAGE_SIZE and --page-size.
page_size = {DEFAULT_PAGE_SIZE}
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = PhoneBookConfig::default();
        assert!(ConfigManager::validate_config(&config).is_ok());
        assert_eq!(config.store.filename, PathBuf::from("contacts.pb"));
        assert_eq!(config.display.page_size, 10);
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let generated = ConfigManager::generate_default_config();
        let parsed = ConfigManager::parse(&generated, "generated").unwrap();
        assert_eq!(parsed, PhoneBookConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let parsed = ConfigManager::parse("[display]\npage_size = 3\n", "inline").unwrap();
        assert_eq!(parsed.display.page_size, 3);
        assert_eq!(parsed.store.filename, PathBuf::from("contacts.pb"));
    }

    #[test]
    fn test_invalid_toml_names_file() {
        let err = ConfigManager::parse("[store\nfilename = 1", "broken.toml").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { ref file, .. } if file == "broken.toml"));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = PhoneBookConfig::default();
        ConfigManager::apply_env_overrides(
            &mut config,
            env_from(&[(ENV_FILE, "work.pb"), (ENV_PAGE_SIZE, " 25 ")]),
        )
        .unwrap();
        assert_eq!(config.store.filename, PathBuf::from("work.pb"));
        assert_eq!(config.display.page_size, 25);
    }

    #[test]
    fn test_non_numeric_page_size_env_is_rejected() {
        let mut config = PhoneBookConfig::default();
        let err =
            ConfigManager::apply_env_overrides(&mut config, env_from(&[(ENV_PAGE_SIZE, "lots")]))
                .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_zero_page_size_is_invalid() {
        let mut config = PhoneBookConfig::default();
        config.display.page_size = 0;
        assert!(ConfigManager::validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_filename_is_invalid() {
        let mut config = PhoneBookConfig::default();
        config.store.filename = PathBuf::new();
        assert!(ConfigManager::validate_config(&config).is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        let err = ConfigManager::load_config(Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_unreadable_config_names_file() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("phonebook.toml");
        std::fs::create_dir(&dir).unwrap();

        let err = ConfigManager::load_file(&dir).unwrap_err();
        assert!(matches!(err, ConfigError::IoError { .. }));
        assert!(err.to_string().contains(&dir.display().to_string()));
    }

    #[test]
    fn test_load_file_missing_is_not_found() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("gone.toml");
        let err = ConfigManager::load_file(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(ref file) if file.contains("gone.toml")));
    }

    #[test]
    fn test_load_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("phonebook.toml");
        std::fs::write(&path, "[store]\nfilename = \"team.pb\"\n").unwrap();

        let config = ConfigManager::load_file(&path).unwrap();
        assert_eq!(config.store.filename, PathBuf::from("team.pb"));
        assert_eq!(config.display.page_size, 10);
    }
}
