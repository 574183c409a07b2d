use std::path::PathBuf;

use thiserror::Error;

/// Startup-time failures. Any of these aborts the process with a non-zero
/// exit; nothing in this enum is produced once the update loop is running.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to initialize logging: {0}")]
    LoggingInit(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error("telegram bot token is not configured; set [telegram] token or the TOKEN env var")]
    MissingToken,
    #[error("failed to initialize async runtime: {0}")]
    RuntimeInit(#[source] std::io::Error),
    #[error("failed to reach telegram: {0}")]
    GatewayInit(#[source] teloxide::RequestError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Per-append failures of the name store. These are recoverable: the loop
/// logs them, drops the current event, and keeps consuming.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open name store at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write name store row at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to flush name store at {path}: {source}")]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
