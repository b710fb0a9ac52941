//! Explicit dashboard state.
//!
//! A [`Dashboard`] owns the immutable base game list, its tag universe, and
//! the criteria of the current view. Each user action replaces the criteria
//! wholesale; the view is recomputed from the base list every time.

use std::collections::BTreeSet;
use std::path::Path;

use trophy_case_catalog::{
    FilterCriteria, NormalizedGame, RawCatalog, Stats, apply_refs, extract_tags,
    normalize_with_report, summarize,
};

use crate::error::LibError;
use crate::loader::load_raw_catalog;

/// The base game list plus the criteria of the active view.
#[derive(Debug, Clone)]
pub struct Dashboard {
    games: Vec<NormalizedGame>,
    tags: BTreeSet<String>,
    skipped: usize,
    criteria: FilterCriteria,
}

/// One computed view: the visible games and the counters over them.
#[derive(Debug, Clone)]
pub struct DashboardView<'a> {
    pub games: Vec<&'a NormalizedGame>,
    pub stats: Stats,
}

impl Dashboard {
    /// Load and normalize every platform file under `data_dir`.
    ///
    /// Fails with [`LibError::NoDataAvailable`] only when no platform yields
    /// a usable game.
    pub async fn load(data_dir: &Path) -> Result<Self, LibError> {
        let raw = load_raw_catalog(data_dir).await;
        Self::from_raw(&raw, data_dir)
    }

    /// Build a dashboard from already-loaded records. `source` is only used
    /// to describe where the data came from in errors.
    pub fn from_raw(raw: &RawCatalog, source: &Path) -> Result<Self, LibError> {
        let report = normalize_with_report(raw);
        if report.games.is_empty() {
            return Err(LibError::NoDataAvailable {
                searched: source.to_path_buf(),
            });
        }

        let tags = extract_tags(&report.games);
        let skipped = report.total_skipped();
        log::debug!(
            "Dashboard ready: {} games, {} tags, {} skipped",
            report.games.len(),
            tags.len(),
            skipped
        );

        Ok(Self {
            games: report.games,
            tags,
            skipped,
            criteria: FilterCriteria::default(),
        })
    }

    /// The full normalized list, in initial ("recent") order.
    pub fn games(&self) -> &[NormalizedGame] {
        &self.games
    }

    /// Every tag in the base list, ascending.
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Records dropped during normalization.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replace the active criteria.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Derive the next criteria from the current one, e.g.
    /// `dashboard.update_criteria(|c| c.cycle_tag("rpg"))`.
    pub fn update_criteria(&mut self, f: impl FnOnce(FilterCriteria) -> FilterCriteria) {
        let current = std::mem::take(&mut self.criteria);
        self.criteria = f(current);
    }

    /// The view for the active criteria.
    pub fn current_view(&self) -> DashboardView<'_> {
        self.view(&self.criteria)
    }

    /// The view for arbitrary criteria: filter, sort, then summarize.
    pub fn view(&self, criteria: &FilterCriteria) -> DashboardView<'_> {
        let games = apply_refs(&self.games, criteria);
        let stats = summarize(&games);
        DashboardView { games, stats }
    }
}

#[cfg(test)]
#[path = "tests/dashboard_tests.rs"]
mod tests;
