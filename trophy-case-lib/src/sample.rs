//! Built-in demo data for when no real data files are available.
//!
//! Using it is a caller decision; nothing in the loading path falls back
//! to it on its own.

use trophy_case_catalog::{RawCatalog, parse_platform_records};
use trophy_case_core::Platform;

const SAMPLE_STEAM: &str = include_str!("../data/sample/steam.json");
const SAMPLE_GOG: &str = include_str!("../data/sample/gog.json");
const SAMPLE_RETROACHIEVEMENTS: &str = include_str!("../data/sample/retroachievements.json");

/// Raw records of the sample dataset, one entry per platform.
pub fn sample_catalog() -> RawCatalog {
    Platform::all()
        .iter()
        .map(|&platform| {
            let text = match platform {
                Platform::Steam => SAMPLE_STEAM,
                Platform::Gog => SAMPLE_GOG,
                Platform::RetroAchievements => SAMPLE_RETROACHIEVEMENTS,
            };
            let origin = format!("sample/{}", platform.data_file_name());
            let records = parse_platform_records(text, &origin).unwrap_or_else(|e| {
                log::error!("Bundled sample data is invalid: {e}");
                Vec::new()
            });
            (platform, records)
        })
        .collect()
}
