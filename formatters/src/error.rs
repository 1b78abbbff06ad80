use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Date arithmetic out of range: {0}")]
    DateOutOfRange(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    // Catch-all for anyhow errors surfacing from the file-loading helpers.
    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}
