use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can stop the application
#[derive(Debug, Error)]
pub enum CadError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: &'static str, reason: String },

    /// Only ever logged: the window falls back to the built-in font
    #[error("Failed to load hint font {path}: {source}")]
    FontLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Window error: {0}")]
    Window(#[from] eframe::Error),

    #[error("Console I/O error: {0}")]
    Console(#[from] io::Error),

    #[error("Console thread panicked")]
    ConsoleThread,
}

/// Result type for application level operations
pub type Result<T> = std::result::Result<T, CadError>;
