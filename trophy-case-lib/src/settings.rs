//! Shared application settings (data directory, default view).
//!
//! The settings file is always `~/.config/trophy-case/settings.toml`:
//!
//! ```toml
//! [data]
//! dir = "/home/me/trophies/data"
//!
//! [view]
//! default_sort = "completion"
//! ```
//!
//! Every `*_at` function takes the settings file path explicitly; the plain
//! variants use [`settings_path`].

use std::path::{Path, PathBuf};

use trophy_case_catalog::SortKey;

use crate::error::LibError;

/// Data directory used when neither the CLI nor the settings name one.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Canonical path to the shared settings file: `~/.config/trophy-case/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("trophy-case").join("settings.toml")
}

/// Resolve the data directory using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `data.dir` in `settings.toml`
/// 3. `./data`
pub fn resolve_data_dir(cli_override: Option<PathBuf>) -> PathBuf {
    resolve_data_dir_at(&settings_path(), cli_override)
}

pub fn resolve_data_dir_at(settings: &Path, cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_data_dir_at(settings) {
        return p;
    }
    PathBuf::from(DEFAULT_DATA_DIR)
}

/// Read `data.dir` from a settings file, if set.
pub fn load_data_dir_at(settings: &Path) -> Option<PathBuf> {
    let doc = read_settings(settings)?;
    let dir = doc.get("data")?.get("dir")?.as_str()?;
    if dir.is_empty() {
        None
    } else {
        Some(PathBuf::from(dir))
    }
}

/// Read `view.default_sort`, if set to a known sort key.
pub fn load_default_sort() -> Option<SortKey> {
    load_default_sort_at(&settings_path())
}

pub fn load_default_sort_at(settings: &Path) -> Option<SortKey> {
    let doc = read_settings(settings)?;
    let raw = doc.get("view")?.get("default_sort")?.as_str()?;
    match raw.parse() {
        Ok(key) => Some(key),
        Err(e) => {
            log::warn!("Ignoring view.default_sort in {}: {}", settings.display(), e);
            None
        }
    }
}

/// Save (or clear) the data directory in `settings.toml`.
pub fn save_data_dir(path: Option<&Path>) -> Result<(), LibError> {
    save_data_dir_at(&settings_path(), path)
}

pub fn save_data_dir_at(settings: &Path, path: Option<&Path>) -> Result<(), LibError> {
    let value = path.map(|p| toml::Value::String(p.to_string_lossy().into_owned()));
    update_setting(settings, "data", "dir", value)
}

/// Save (or clear) the default sort key in `settings.toml`.
pub fn save_default_sort(key: Option<SortKey>) -> Result<(), LibError> {
    save_default_sort_at(&settings_path(), key)
}

pub fn save_default_sort_at(settings: &Path, key: Option<SortKey>) -> Result<(), LibError> {
    let value = key.map(|k| toml::Value::String(k.as_str().to_string()));
    update_setting(settings, "view", "default_sort", value)
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let doc = read_settings(&settings_path())?;
    toml::to_string_pretty(&doc).ok()
}

fn read_settings(settings: &Path) -> Option<toml::Value> {
    let contents = std::fs::read_to_string(settings).ok()?;
    match contents.parse() {
        Ok(doc) => Some(doc),
        Err(e) => {
            log::warn!("Could not parse {}: {}", settings.display(), e);
            None
        }
    }
}

/// Set or remove `[table] key` without disturbing anything else in the file.
fn update_setting(
    settings: &Path,
    table_name: &str,
    key: &str,
    value: Option<toml::Value>,
) -> Result<(), LibError> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    let root = doc
        .as_table_mut()
        .ok_or_else(|| LibError::Settings(format!("{} is not a TOML table", settings.display())))?;
    let table = root
        .entry(table_name)
        .or_insert_with(|| toml::Value::Table(Default::default()))
        .as_table_mut()
        .ok_or_else(|| {
            LibError::Settings(format!("[{table_name}] in {} is not a table", settings.display()))
        })?;

    match value {
        Some(v) => {
            table.insert(key.to_string(), v);
        }
        None => {
            table.remove(key);
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized =
        toml::to_string_pretty(&doc).map_err(|e| LibError::Settings(e.to_string()))?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
