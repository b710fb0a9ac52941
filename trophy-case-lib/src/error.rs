use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while assembling a dashboard or editing settings.
#[derive(Debug, Error)]
pub enum LibError {
    /// No platform contributed a single usable game. The caller decides
    /// whether to fall back to sample data.
    #[error("No game data available in {}", searched.display())]
    NoDataAvailable { searched: PathBuf },

    /// The settings file exists but has a shape we cannot edit.
    #[error("Settings error: {0}")]
    Settings(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
