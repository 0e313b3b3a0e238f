use thiserror::Error;

/// Startup failures; anything here stops the process before it serves
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] um_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] um_db::DbError),

    #[error("Environment file error: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Invalid CORS origin {origin}: {message}")]
    CorsOrigin { origin: String, message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
