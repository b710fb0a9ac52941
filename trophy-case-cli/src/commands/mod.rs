pub(crate) mod config;
pub(crate) mod link;
pub(crate) mod list;
pub(crate) mod stats;
pub(crate) mod tags;

use std::path::PathBuf;

use trophy_case_lib::{Dashboard, LibError, ProgressDescriptor, sample_catalog, settings};

use crate::CliError;

/// Width of the text progress bar, in cells.
const BAR_CELLS: usize = 12;

/// Resolve the data directory and load the dashboard from it.
///
/// With `sample_fallback`, a load that finds no data at all switches to the
/// built-in sample set instead of failing.
pub(crate) fn load_dashboard(
    data_dir: Option<PathBuf>,
    sample_fallback: bool,
) -> Result<Dashboard, CliError> {
    let data_dir = settings::resolve_data_dir(data_dir);
    log::debug!("Loading game data from {}", data_dir.display());

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {e}")))?;

    match rt.block_on(Dashboard::load(&data_dir)) {
        Ok(dashboard) => Ok(dashboard),
        Err(LibError::NoDataAvailable { searched }) if sample_fallback => {
            log::warn!(
                "No game data in {}; showing built-in sample data",
                searched.display()
            );
            Ok(Dashboard::from_raw(&sample_catalog(), &PathBuf::from("<sample>"))?)
        }
        Err(e) => Err(e.into()),
    }
}

/// Truncate a string to at most `max` characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max).collect()
    }
}

/// Text progress bar sized from the descriptor's indicator width.
pub(crate) fn progress_bar(progress: &ProgressDescriptor) -> String {
    let width = usize::from(progress.indicator_width());
    let filled = (width * BAR_CELLS).div_ceil(100);
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_CELLS - filled)
    )
}

/// Format a play time in hours with one decimal, or "-" when unknown.
pub(crate) fn format_hours(hours: Option<f64>) -> String {
    match hours {
        Some(h) if h.is_finite() && h > 0.0 => format!("{h:.1}h"),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_str("Pokémon Emerald", 8), "Pokém...");
        assert_eq!(truncate_str("Hades", 10), "Hades");
        assert_eq!(truncate_str("Hades", 2), "Ha");
    }

    #[test]
    fn progress_bar_is_never_empty_with_achievements() {
        let zero = ProgressDescriptor::calculate(10, 0);
        assert_eq!(progress_bar(&zero), "[#-----------]");
        let full = ProgressDescriptor::calculate(10, 10);
        assert_eq!(progress_bar(&full), "[############]");
        assert_eq!(
            progress_bar(&ProgressDescriptor::NO_ACHIEVEMENTS),
            "[------------]"
        );
    }

    #[test]
    fn hours_formatting() {
        assert_eq!(format_hours(Some(12.345)), "12.3h");
        assert_eq!(format_hours(None), "-");
        assert_eq!(format_hours(Some(f64::NAN)), "-");
    }
}
