mod config;
mod cors_config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;


pub use config::Config;
pub use cors_config::CorsConfig;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "users.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "UM_CONFIG_DIR";
/// Config directory used when `UM_CONFIG_DIR` is unset (relative to cwd)
pub const DEFAULT_CONFIG_DIR: &str = ".um";
