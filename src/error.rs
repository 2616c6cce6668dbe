use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Stats unavailable for {tag} (HTTP {status})")]
    StatsUnavailable { tag: String, status: u16 },

    #[error("Invalid BattleTag: {0:?}. Use format: Name-1234 or Name#1234")]
    InvalidTag(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}
