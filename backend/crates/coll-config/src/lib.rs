mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use storage_config::StorageConfig;

pub const APP_NAME: &str = "coll_server";
pub const CONFIG_DEFAULT_FILE_NAME: &str = "coll_server.cfg.json";

const DEFAULT_ADDRESS: &str = ":8080";
const DEFAULT_BACKEND_NAME: &str = "mongodb";
const DEFAULT_BACKEND_URI: &str = "mongodb://localhost";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
