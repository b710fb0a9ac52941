//! Flattening of per-platform records into [`NormalizedGame`]s.
//!
//! RetroAchievements games that carry a `subsets` map are replaced by one
//! record per achievement set. Every other record maps one-to-one. Missing
//! names and covers are filled in, and the result is put in the default
//! "recent" order.

use std::collections::BTreeMap;

use trophy_case_core::{Platform, sanitize_count};

use crate::filter::{SortKey, sort_games};
use crate::types::{BASE_SUBSET_KEY, NormalizedGame, RawCatalog, RawPlatformRecord, RawSubset};

/// Outcome of a normalization pass.
#[derive(Debug, Clone, Default)]
pub struct NormalizeReport {
    pub games: Vec<NormalizedGame>,
    /// Records or subsets dropped because no identifier could be determined,
    /// per platform. Platforms without drops have no entry.
    pub skipped: BTreeMap<Platform, usize>,
}

impl NormalizeReport {
    /// Dropped records across all platforms.
    pub fn total_skipped(&self) -> usize {
        self.skipped.values().sum()
    }

    fn skip(&mut self, platform: Platform) {
        *self.skipped.entry(platform).or_default() += 1;
    }
}

/// Normalize all platforms, in declared platform order.
pub fn normalize(raw: &RawCatalog) -> Vec<NormalizedGame> {
    normalize_with_report(raw).games
}

/// Like [`normalize`], but also reports how many records were dropped.
pub fn normalize_with_report(raw: &RawCatalog) -> NormalizeReport {
    let mut report = NormalizeReport::default();

    for &platform in Platform::all() {
        let Some(records) = raw.get(&platform) else {
            continue;
        };
        for record in records {
            normalize_record(platform, record, &mut report);
        }
    }

    sort_games(&mut report.games, SortKey::Recent);

    for (platform, count) in &report.skipped {
        log::warn!(
            "Skipped {count} {} records without an identifier",
            platform.display_name()
        );
    }
    log::debug!("Normalized {} games", report.games.len());

    report
}

fn normalize_record(platform: Platform, record: &RawPlatformRecord, report: &mut NormalizeReport) {
    let Some(platform_id) = non_empty(record.platform_id.as_deref()) else {
        log::warn!(
            "Skipping {} record without platformId (name: {})",
            platform.short_name(),
            record.name.as_deref().unwrap_or("<none>"),
        );
        report.skip(platform);
        return;
    };

    let subsets = record.subsets.as_ref().filter(|s| !s.is_empty());
    match subsets {
        Some(subsets) if platform.supports_subsets() => {
            for (key, subset) in subsets {
                match expand_subset(platform, platform_id, record, key, subset) {
                    Some(game) => report.games.push(game),
                    None => {
                        log::warn!("Skipping subset with empty key under game {platform_id}");
                        report.skip(platform);
                    }
                }
            }
        }
        _ => {
            if subsets.is_some() {
                log::debug!(
                    "Ignoring subsets on {} game {platform_id}",
                    platform.short_name()
                );
            }
            report.games.push(plain_game(platform, platform_id, record));
        }
    }
}

fn plain_game(platform: Platform, platform_id: &str, record: &RawPlatformRecord) -> NormalizedGame {
    NormalizedGame {
        platform,
        effective_id: platform_id.to_string(),
        parent_id: None,
        is_subset: false,
        name: name_or_fallback(non_empty(record.name.as_deref()).map(str::to_string), platform_id),
        cover_image: cover_or_fallback(record.cover_image.as_deref(), platform, platform_id),
        total_achievements: count(record.total_achievements),
        unlocked_achievements: count(record.unlocked_achievements),
        last_achievement: record.achievement_date().map(str::to_string),
        played_time: record.played_time,
        tags: record.tags.clone().unwrap_or_default(),
        console: record.console.clone(),
    }
}

/// Build the record for one entry of a parent's `subsets` map.
///
/// Counts and cover come from the subset alone; the date and play time fall
/// back to the parent; tags and console are always the parent's.
fn expand_subset(
    platform: Platform,
    parent_id: &str,
    parent: &RawPlatformRecord,
    key: &str,
    subset: &RawSubset,
) -> Option<NormalizedGame> {
    let parent_name = non_empty(parent.name.as_deref());
    let is_base = key == BASE_SUBSET_KEY;

    let (effective_id, parent_ref, name) = if is_base {
        (parent_id, None, parent_name.map(str::to_string))
    } else {
        let key = non_empty(Some(key))?;
        let name = match (parent_name, non_empty(subset.name.as_deref())) {
            (Some(p), Some(s)) => Some(format!("{p}: {s}")),
            (Some(p), None) => Some(p.to_string()),
            (None, Some(s)) => Some(s.to_string()),
            (None, None) => None,
        };
        (key, Some(parent_id.to_string()), name)
    };

    let last_achievement = subset
        .achievement_date()
        .or_else(|| parent.achievement_date())
        .map(str::to_string);

    Some(NormalizedGame {
        platform,
        effective_id: effective_id.to_string(),
        parent_id: parent_ref,
        is_subset: !is_base,
        name: name_or_fallback(name, effective_id),
        cover_image: cover_or_fallback(subset.cover_image.as_deref(), platform, effective_id),
        total_achievements: count(subset.total_achievements),
        unlocked_achievements: count(subset.unlocked_achievements),
        last_achievement,
        played_time: subset.played_time.or(parent.played_time),
        tags: parent.tags.clone().unwrap_or_default(),
        console: parent.console.clone(),
    })
}

/// Generated cover path for records without an explicit cover.
pub fn default_cover_path(platform: Platform, id: &str) -> String {
    format!("assets/covers/{}/{}.jpg", platform.short_name(), id)
}

/// Display name for records that have none.
pub fn unknown_game_name(id: &str) -> String {
    format!("Unknown Game ({id})")
}

fn name_or_fallback(name: Option<String>, id: &str) -> String {
    name.unwrap_or_else(|| unknown_game_name(id))
}

fn cover_or_fallback(cover: Option<&str>, platform: Platform, id: &str) -> String {
    non_empty(cover)
        .map(str::to_string)
        .unwrap_or_else(|| default_cover_path(platform, id))
}

fn count(value: Option<f64>) -> u32 {
    sanitize_count(value.unwrap_or(0.0))
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
