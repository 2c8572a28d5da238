use anyhow::{Context as AnyhowContext, Result};
use phonebook_core::{ConfigManager, ContactStore, PhoneBookConfig};
use std::path::PathBuf;

/// Application context that gets passed to command handlers
///
/// Resolves configuration once and owns the store built from it, so
/// handlers never read globals or the environment themselves.
pub struct Context {
    pub store: ContactStore,
    config: PhoneBookConfig,
}

impl Context {
    /// Build the context from the global CLI options
    ///
    /// Precedence for the contact file: --filename > PHONEBOOK_FILE >
    /// config file > built-in default.
    pub fn new(filename: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<Self> {
        let mut config = ConfigManager::load_config(config_path.as_deref())
            .context("Failed to load configuration")?;

        if let Some(filename) = filename {
            config.store.filename = filename;
        }

        let store = ContactStore::new(config.store.filename.clone());
        tracing::debug!(path = %store.path().display(), "using contact file");

        Ok(Self { store, config })
    }

    /// Get the resolved configuration
    pub fn config(&self) -> &PhoneBookConfig {
        &self.config
    }
}
