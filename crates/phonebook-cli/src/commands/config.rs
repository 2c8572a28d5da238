use anyhow::Result;
use phonebook_core::ConfigManager;

/// Print the default configuration file
///
/// Does not need a contact file, so it runs before the Context is built:
/// ```bash
/// phonebook config > phonebook.toml
/// ```
pub fn handle() -> Result<()> {
    print!("{}", ConfigManager::generate_default_config());
    Ok(())
}
