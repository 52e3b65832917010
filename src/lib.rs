pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::{HttpCardApi, MemoryPage, TerminalPage};
pub use config::{toml_config::TomlConfig, ClientSettings};
pub use core::controller::ClientController;
pub use utils::error::{CardCheckError, Result};
