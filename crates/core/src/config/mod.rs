mod loader;
mod types;
mod validate;

pub use loader::{load_config, load_config_from, load_config_from_str, CONFIG_PATH_ENV};
pub use types::*;
pub use validate::validate_config;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    #[error("WORKSPACE environment variable is required")]
    MissingWorkspace,
}
