//! Asynchronous loading of the per-platform data files.
//!
//! The three files are read concurrently. A missing or unparsable file is
//! logged and that platform contributes no games; it never fails the load
//! of the other platforms.

use std::path::Path;

use futures::future::join_all;
use trophy_case_catalog::{LoadError, RawCatalog, RawPlatformRecord, parse_platform_records};
use trophy_case_core::Platform;

/// Read every platform file under `data_dir`.
///
/// The returned catalog has exactly one entry per platform.
pub async fn load_raw_catalog(data_dir: &Path) -> RawCatalog {
    let loads = Platform::all()
        .iter()
        .map(|&platform| async move { (platform, load_platform(data_dir, platform).await) });
    join_all(loads).await.into_iter().collect()
}

async fn load_platform(data_dir: &Path, platform: Platform) -> Vec<RawPlatformRecord> {
    let path = data_dir.join(platform.data_file_name());
    match read_platform_file(&path).await {
        Ok(records) => {
            log::debug!(
                "Loaded {} {} records from {}",
                records.len(),
                platform.short_name(),
                path.display()
            );
            records
        }
        Err(e) => {
            log::warn!("No {} data: {}", platform.display_name(), e);
            Vec::new()
        }
    }
}

async fn read_platform_file(path: &Path) -> Result<Vec<RawPlatformRecord>, LoadError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| LoadError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
    parse_platform_records(&contents, &path.display().to_string())
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
