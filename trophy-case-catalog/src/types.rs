//! Data model types for per-platform game lists.
//!
//! [`RawPlatformRecord`] mirrors the JSON files as they sit on disk, including
//! older field spellings. [`NormalizedGame`] is the flattened, cross-platform
//! record everything downstream of the normalizer works with.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use trophy_case_core::{Platform, ProgressDescriptor, sanitize_hours};

use crate::date::{AchievementDate, parse_achievement_date};

/// Raw records grouped by the platform file they were read from.
pub type RawCatalog = BTreeMap<Platform, Vec<RawPlatformRecord>>;

// ── Raw records ─────────────────────────────────────────────────────────────

/// One game entry as stored in `data/<platform>.json`.
///
/// Every field is optional and tolerant of the wrong JSON type: a value that
/// does not fit reads as missing, and the normalizer's fallbacks fill it in.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlatformRecord {
    /// Platform-specific identifier. Numeric ids are accepted and kept as text.
    #[serde(default, deserialize_with = "deserialize_loose_id")]
    pub platform_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_number")]
    pub total_achievements: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_loose_number")]
    pub unlocked_achievements: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub last_achievement: Option<String>,
    /// Older spelling of `last_achievement`; only used when that is absent.
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub date_completed: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_number")]
    pub played_time: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub cover_image: Option<String>,
    /// Non-string entries are dropped.
    #[serde(default, deserialize_with = "deserialize_loose_tags")]
    pub tags: Option<Vec<String>>,
    /// RetroAchievements only.
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub console: Option<String>,
    /// RetroAchievements only. Key `"Base"` is the parent game itself.
    /// A value that is not a map of subset objects reads as no subsets.
    #[serde(default, deserialize_with = "deserialize_loose_subsets")]
    pub subsets: Option<IndexMap<String, RawSubset>>,
}

impl RawPlatformRecord {
    /// `last_achievement`, falling back to the older `date_completed`.
    pub fn achievement_date(&self) -> Option<&str> {
        coalesce_dates(&self.last_achievement, &self.date_completed)
    }
}

/// One achievement set of a RetroAchievements game.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSubset {
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub cover_image: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_number")]
    pub total_achievements: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_loose_number")]
    pub unlocked_achievements: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub last_achievement: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub date_completed: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_number")]
    pub played_time: Option<f64>,
}

impl RawSubset {
    /// `last_achievement`, falling back to the older `date_completed`.
    pub fn achievement_date(&self) -> Option<&str> {
        coalesce_dates(&self.last_achievement, &self.date_completed)
    }
}

/// Subset key that denotes the parent game's own achievement set.
pub const BASE_SUBSET_KEY: &str = "Base";

fn coalesce_dates<'a>(current: &'a Option<String>, legacy: &'a Option<String>) -> Option<&'a str> {
    let present = |s: &'a Option<String>| s.as_deref().map(str::trim).filter(|s| !s.is_empty());
    present(current).or_else(|| present(legacy))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseId {
    Text(String),
    Integer(i64),
    Float(f64),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseText {
    Text(String),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseTags {
    List(Vec<LooseText>),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseSubsets {
    Map(IndexMap<String, RawSubset>),
    Other(IgnoredAny),
}

/// Accept `"123"`, `123` or `null` for an identifier. Anything else reads as
/// no identifier.
fn deserialize_loose_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = Option::<LooseId>::deserialize(deserializer)?;
    Ok(match id {
        Some(LooseId::Text(s)) => Some(s),
        Some(LooseId::Integer(n)) => Some(n.to_string()),
        Some(LooseId::Float(f)) if f.is_finite() && f.fract() == 0.0 => Some(format!("{f:.0}")),
        Some(LooseId::Float(_) | LooseId::Other(_)) | None => None,
    })
}

/// Accept a JSON number or a numeric string. Other values read as missing.
fn deserialize_loose_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseNumber>::deserialize(deserializer)?;
    Ok(match value {
        Some(LooseNumber::Number(n)) => Some(n),
        Some(LooseNumber::Text(s)) => s.trim().parse().ok(),
        Some(LooseNumber::Other(_)) | None => None,
    })
}

/// Accept a string. Other values read as missing.
fn deserialize_loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseText>::deserialize(deserializer)?;
    Ok(match value {
        Some(LooseText::Text(s)) => Some(s),
        Some(LooseText::Other(_)) | None => None,
    })
}

/// Accept an array of strings, dropping entries of any other type.
fn deserialize_loose_tags<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseTags>::deserialize(deserializer)?;
    Ok(match value {
        Some(LooseTags::List(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    LooseText::Text(s) => Some(s),
                    LooseText::Other(_) => None,
                })
                .collect(),
        ),
        Some(LooseTags::Other(_)) | None => None,
    })
}

fn deserialize_loose_subsets<'de, D>(
    deserializer: D,
) -> Result<Option<IndexMap<String, RawSubset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseSubsets>::deserialize(deserializer)?;
    Ok(match value {
        Some(LooseSubsets::Map(map)) => Some(map),
        Some(LooseSubsets::Other(_)) | None => None,
    })
}

// ── Normalized games ────────────────────────────────────────────────────────

/// A flattened, cross-platform game record.
///
/// Built once at load time and never mutated afterwards; filtered views are
/// recomputed from the base list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedGame {
    pub platform: Platform,
    /// Platform-scoped unique id: parent id for plain games and `Base`
    /// subsets, the subset key otherwise.
    pub effective_id: String,
    /// Parent game id, only for non-`Base` subsets.
    pub parent_id: Option<String>,
    pub is_subset: bool,
    pub name: String,
    /// Explicit cover or a generated `assets/covers/...` path.
    pub cover_image: String,
    pub total_achievements: u32,
    /// Stored as found; derived metrics cap it at `total_achievements`.
    pub unlocked_achievements: u32,
    pub last_achievement: Option<String>,
    pub played_time: Option<f64>,
    pub tags: Vec<String>,
    pub console: Option<String>,
}

impl NormalizedGame {
    /// Progress descriptor for this record, computed on demand.
    pub fn progress(&self) -> ProgressDescriptor {
        ProgressDescriptor::calculate(self.total_achievements, self.unlocked_achievements)
    }

    /// Unlocked count capped at the total.
    pub fn capped_unlocked(&self) -> u32 {
        self.unlocked_achievements.min(self.total_achievements)
    }

    /// Unlocked/total in `0.0..=1.0`; 0 when the game has no achievements.
    pub fn completion_ratio(&self) -> f64 {
        self.progress().ratio()
    }

    /// True when every achievement of a game with achievements is unlocked.
    pub fn is_complete(&self) -> bool {
        self.progress().is_complete
    }

    /// Played time in hours, with missing or invalid values as 0.
    pub fn playtime_hours(&self) -> f64 {
        sanitize_hours(self.played_time)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Parsed `last_achievement`, if present.
    pub fn last_achievement_date(&self) -> Option<AchievementDate> {
        self.last_achievement.as_deref().map(parse_achievement_date)
    }
}
