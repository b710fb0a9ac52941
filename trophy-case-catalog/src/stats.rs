//! Aggregate statistics over a (usually filtered) game list.
//!
//! Everything here is computed from whatever slice the caller passes in;
//! the dashboard passes the current view so counters follow the filters.

use std::borrow::Borrow;
use std::collections::BTreeMap;

use serde::Serialize;
use trophy_case_core::{Platform, ProgressStatus};

use crate::types::NormalizedGame;

/// Summary counters for a game list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_games: usize,
    /// Sum of unlocked achievements (each capped at its game's total).
    pub total_unlocked: u64,
    pub total_achievements: u64,
    /// Games with achievements that are all unlocked.
    pub fully_completed_count: usize,
    pub total_playtime_hours: f64,
    /// Mean completion percentage over games that have achievements.
    pub average_completion: f64,
}

/// Per-platform slice of [`Stats`], for the platform chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformBreakdown {
    pub platform: Platform,
    pub games: usize,
    pub unlocked: u64,
    pub total: u64,
    pub completed: usize,
}

/// Summarize `games`.
pub fn summarize<G: Borrow<NormalizedGame>>(games: &[G]) -> Stats {
    let mut stats = Stats::default();
    let mut percentage_sum = 0.0;
    let mut with_achievements = 0usize;

    for game in games {
        let game: &NormalizedGame = game.borrow();
        let progress = game.progress();

        stats.total_games += 1;
        stats.total_unlocked += u64::from(progress.capped_earned);
        stats.total_achievements += u64::from(game.total_achievements);
        stats.total_playtime_hours += game.playtime_hours();
        if progress.is_complete {
            stats.fully_completed_count += 1;
        }
        if game.total_achievements > 0 {
            with_achievements += 1;
            percentage_sum += progress.ratio() * 100.0;
        }
    }

    if with_achievements > 0 {
        stats.average_completion = percentage_sum / with_achievements as f64;
    }
    stats
}

/// Counts per platform, in declared platform order. Platforms without
/// games are omitted.
pub fn platform_breakdown<G: Borrow<NormalizedGame>>(games: &[G]) -> Vec<PlatformBreakdown> {
    let mut by_platform: BTreeMap<Platform, PlatformBreakdown> = BTreeMap::new();

    for game in games {
        let game: &NormalizedGame = game.borrow();
        let progress = game.progress();
        let entry = by_platform
            .entry(game.platform)
            .or_insert_with(|| PlatformBreakdown {
                platform: game.platform,
                games: 0,
                unlocked: 0,
                total: 0,
                completed: 0,
            });
        entry.games += 1;
        entry.unlocked += u64::from(progress.capped_earned);
        entry.total += u64::from(game.total_achievements);
        if progress.is_complete {
            entry.completed += 1;
        }
    }

    Platform::all()
        .iter()
        .filter_map(|p| by_platform.remove(p))
        .collect()
}

/// Number of games in each progress status, for every status in order.
pub fn status_distribution<G: Borrow<NormalizedGame>>(games: &[G]) -> Vec<(ProgressStatus, usize)> {
    let mut counts: BTreeMap<ProgressStatus, usize> = BTreeMap::new();
    for game in games {
        let game: &NormalizedGame = game.borrow();
        *counts.entry(game.progress().status).or_default() += 1;
    }
    ProgressStatus::all()
        .iter()
        .map(|s| (*s, counts.get(s).copied().unwrap_or(0)))
        .collect()
}

/// How many games carry each tag, most frequent first (ties by tag name).
pub fn tag_frequencies<G: Borrow<NormalizedGame>>(games: &[G]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for game in games {
        let game: &NormalizedGame = game.borrow();
        for tag in game.tags.iter().filter(|t| !t.trim().is_empty()) {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
    }

    let mut freq: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(tag, n)| (tag.to_string(), n))
        .collect();
    // BTreeMap iteration already sorted by tag; the stable sort keeps that for ties.
    freq.sort_by(|a, b| b.1.cmp(&a.1));
    freq
}
