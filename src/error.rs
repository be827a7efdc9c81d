use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid matchup: {0}")]
    InvalidMatchup(String),

    #[error("Unknown match format: {0} (use ODI, T20I or Test)")]
    UnknownFormat(String),

    #[error("Export error: {0}")]
    ExportError(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
