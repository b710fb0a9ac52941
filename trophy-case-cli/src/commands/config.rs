use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use trophy_case_lib::{SortKey, settings};

use crate::CliError;
use crate::logging::blank;

pub(crate) fn run_config_show(data_dir: Option<PathBuf>) {
    let path = settings::settings_path();
    log::info!("{}", "Settings".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  File: {}", path.display());
    blank();

    match settings::load_settings_string() {
        Some(contents) if !contents.trim().is_empty() => {
            for line in contents.lines() {
                log::info!("  {}", line);
            }
        }
        _ => log::info!("  (no saved settings)"),
    }

    blank();
    let resolved = settings::resolve_data_dir(data_dir);
    log::info!("  Data directory in use: {}", resolved.display());
    if !resolved.is_dir() {
        log::warn!("Data directory {} does not exist", resolved.display());
    }
    log::info!(
        "  Default sort: {}",
        settings::load_default_sort().unwrap_or_default()
    );
}

pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

pub(crate) fn run_config_set_data_dir(dir: &Path) -> Result<(), CliError> {
    let dir = std::fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
    if !dir.is_dir() {
        log::warn!("{} is not a directory (saving anyway)", dir.display());
    }
    settings::save_data_dir(Some(&dir))?;
    log::info!("Data directory set to {}", dir.display());
    Ok(())
}

pub(crate) fn run_config_clear_data_dir() -> Result<(), CliError> {
    settings::save_data_dir(None)?;
    log::info!("Saved data directory cleared");
    Ok(())
}

pub(crate) fn run_config_set_sort(sort: SortKey) -> Result<(), CliError> {
    settings::save_default_sort(Some(sort))?;
    log::info!("Default sort set to {}", sort);
    Ok(())
}
