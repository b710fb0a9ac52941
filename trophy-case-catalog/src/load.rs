//! JSON parsing for per-platform game lists.
//!
//! Each platform has one file (`steam.json`, `gog.json`,
//! `retroachievements.json`) holding a JSON array of game records. An
//! element that is not a record object only costs that element; reading the
//! files themselves is the loader's job.

use thiserror::Error;

use crate::types::RawPlatformRecord;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("Expected a JSON array of games in {0}")]
    NotAnArray(String),
}

/// Parse the contents of one platform file.
///
/// `origin` names the source in log messages and errors. Elements that fail
/// to deserialize are skipped with a warning.
pub fn parse_platform_records(text: &str, origin: &str) -> Result<Vec<RawPlatformRecord>, LoadError> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(|e| LoadError::Parse {
        path: origin.to_string(),
        source: e,
    })?;

    let serde_json::Value::Array(elements) = value else {
        return Err(LoadError::NotAnArray(origin.to_string()));
    };

    let mut records = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<RawPlatformRecord>(element) {
            Ok(record) => records.push(record),
            Err(e) => log::warn!("Skipping malformed record #{index} in {origin}: {e}"),
        }
    }

    Ok(records)
}
