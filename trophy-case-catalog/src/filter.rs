//! Filtering and sorting of normalized games.
//!
//! A [`FilterCriteria`] value describes one complete view: platform,
//! included/excluded tags, search text and sort order. UI actions build a
//! new criteria value instead of mutating shared tag sets, and [`apply`]
//! turns base list + criteria into the visible list. Filtering always runs
//! before sorting.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use trophy_case_core::{Platform, PlatformParseError};

use crate::types::NormalizedGame;

// ── Criteria ────────────────────────────────────────────────────────────────

/// Which platform(s) a view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformFilter {
    #[default]
    All,
    Only(Platform),
}

impl PlatformFilter {
    pub fn matches(&self, platform: Platform) -> bool {
        match self {
            Self::All => true,
            Self::Only(p) => *p == platform,
        }
    }
}

impl std::fmt::Display for PlatformFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(p) => f.write_str(p.short_name()),
        }
    }
}

impl std::str::FromStr for PlatformFilter {
    type Err = PlatformParseError;

    /// `"all"` or any platform alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Sort order of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most recent achievement first; undated games last.
    #[default]
    Recent,
    /// Name, ascending.
    Name,
    /// Completion ratio, descending.
    Completion,
    /// Played time, descending.
    Playtime,
}

const ALL_SORT_KEYS: &[SortKey] = &[
    SortKey::Recent,
    SortKey::Name,
    SortKey::Completion,
    SortKey::Playtime,
];

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Name => "name",
            Self::Completion => "completion",
            Self::Playtime => "playtime",
        }
    }

    pub fn all() -> &'static [SortKey] {
        ALL_SORT_KEYS
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known sort key.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown sort key: '{0}' (expected recent, name, completion or playtime)")]
pub struct SortKeyParseError(pub String);

impl std::str::FromStr for SortKey {
    type Err = SortKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_SORT_KEYS
            .iter()
            .copied()
            .find(|k| k.as_str() == lower)
            .ok_or_else(|| SortKeyParseError(s.to_string()))
    }
}

/// A complete description of one filtered, sorted view.
///
/// Build it with the consuming `with_*`/tag methods; each call returns the
/// next criteria value. The tag methods keep `included_tags` and
/// `excluded_tags` disjoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub platform: PlatformFilter,
    /// A game must carry at least one of these (when non-empty).
    pub included_tags: BTreeSet<String>,
    /// A game must carry none of these.
    pub excluded_tags: BTreeSet<String>,
    /// Case-insensitive substring of the game name.
    pub search_query: String,
    pub sort_key: SortKey,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_platform(mut self, platform: PlatformFilter) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    /// Require `tag`, removing it from the excluded set.
    pub fn include_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.excluded_tags.remove(&tag);
        self.included_tags.insert(tag);
        self
    }

    /// Reject `tag`, removing it from the included set.
    pub fn exclude_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.included_tags.remove(&tag);
        self.excluded_tags.insert(tag);
        self
    }

    /// Drop any constraint on `tag`.
    pub fn clear_tag(mut self, tag: &str) -> Self {
        self.included_tags.remove(tag);
        self.excluded_tags.remove(tag);
        self
    }

    /// Include -> exclude -> neutral -> include, as a tag chip cycles.
    pub fn cycle_tag(self, tag: &str) -> Self {
        if self.included_tags.contains(tag) {
            self.exclude_tag(tag)
        } else if self.excluded_tags.contains(tag) {
            self.clear_tag(tag)
        } else {
            self.include_tag(tag)
        }
    }

    /// Whether a game passes every active constraint.
    pub fn matches(&self, game: &NormalizedGame) -> bool {
        self.platform.matches(game.platform)
            && (self.included_tags.is_empty()
                || game.tags.iter().any(|t| self.included_tags.contains(t)))
            && !game.tags.iter().any(|t| self.excluded_tags.contains(t))
            && (self.search_query.is_empty()
                || game
                    .name
                    .to_lowercase()
                    .contains(&self.search_query.to_lowercase()))
    }

    /// True when no filter constraint is active (sort order aside).
    pub fn is_unfiltered(&self) -> bool {
        self.platform == PlatformFilter::All
            && self.included_tags.is_empty()
            && self.excluded_tags.is_empty()
            && self.search_query.is_empty()
    }
}

// ── Apply ───────────────────────────────────────────────────────────────────

/// Filter `games` by `criteria`, then sort the survivors.
pub fn apply(games: &[NormalizedGame], criteria: &FilterCriteria) -> Vec<NormalizedGame> {
    apply_refs(games, criteria).into_iter().cloned().collect()
}

/// Borrowing variant of [`apply`].
pub fn apply_refs<'a>(games: &'a [NormalizedGame], criteria: &FilterCriteria) -> Vec<&'a NormalizedGame> {
    let mut view: Vec<&NormalizedGame> = games.iter().filter(|g| criteria.matches(g)).collect();
    sort_games(&mut view, criteria.sort_key);
    view
}

/// Stable sort by `key`. Equal records keep their relative order.
pub fn sort_games<G: Borrow<NormalizedGame>>(games: &mut [G], key: SortKey) {
    let compare: fn(&NormalizedGame, &NormalizedGame) -> Ordering = match key {
        SortKey::Recent => compare_recent,
        SortKey::Name => compare_names,
        SortKey::Completion => compare_completion,
        SortKey::Playtime => compare_playtime,
    };
    games.sort_by(|a, b| compare(Borrow::borrow(a), Borrow::borrow(b)));
}

/// Case-insensitive name order.
pub fn compare_names(a: &NormalizedGame, b: &NormalizedGame) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

/// Dated before undated, newer before older, then by name.
///
/// Also used for the initial order produced by normalization.
pub fn compare_recent(a: &NormalizedGame, b: &NormalizedGame) -> Ordering {
    match (a.last_achievement_date(), b.last_achievement_date()) {
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (Some(da), Some(db)) => db.cmp(&da).then_with(|| compare_names(a, b)),
        (None, None) => compare_names(a, b),
    }
}

/// Higher completion first. Games without achievements rank as 0%.
pub fn compare_completion(a: &NormalizedGame, b: &NormalizedGame) -> Ordering {
    b.completion_ratio().total_cmp(&a.completion_ratio())
}

/// More hours first. Missing play time ranks as 0.
pub fn compare_playtime(a: &NormalizedGame, b: &NormalizedGame) -> Ordering {
    b.playtime_hours().total_cmp(&a.playtime_hours())
}
