mod config;
mod error;

pub use config::{AppConfig, ConfigError};
pub use error::{Error, Result};
