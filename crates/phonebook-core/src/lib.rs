//! # Phonebook Core
//!
//! Flat-file contact storage: one contact per line, six comma-separated
//! fields (surname, given name, patronymic, organization, work phone,
//! personal phone).
//!
//! ## Modules
//!
//! - [`contact`]: the contact record, its fixed field set, and search criteria
//! - [`store`]: list/add/edit/search over the backing text file
//! - [`config`]: layered configuration (defaults, TOML file, environment)

pub mod config;
pub mod contact;
pub mod store;

pub use config::{ConfigError, ConfigManager, ConfigResult, PhoneBookConfig};
pub use contact::{Contact, ContactError, ContactResult, Field, SearchCriteria};
pub use store::{ContactStore, StoreError, StoreResult};
