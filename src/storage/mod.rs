//! Persistent storage
//!
//! The only thing persisted is [`settings::AppSettings`]; responses and model
//! lists live in memory.

pub mod settings;

use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not determine the application data directory")]
    NoDataDir,
}

/// Platform data directory for the app, e.g. `~/.local/share/promptdeck`
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    ProjectDirs::from("dev", "promptdeck", "promptdeck")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}
