mod config;
mod error;

pub use config::{APP_NAME, AppConfig, CONFIG_NAME, DEFAULT_POLL_INTERVAL_MS};
pub use error::ConfigError;
