//! Application layer of the trophy-case dashboard: settings, data loading,
//! built-in sample data, and the dashboard state object frontends drive.

pub mod dashboard;
pub mod error;
pub mod loader;
pub mod sample;
pub mod settings;

pub use dashboard::{Dashboard, DashboardView};
pub use error::LibError;
pub use loader::load_raw_catalog;
pub use sample::sample_catalog;

// Re-export the catalog and core types frontends need.
pub use trophy_case_catalog::{
    FilterCriteria, NormalizedGame, PlatformFilter, SortKey, Stats, game_link, platform_breakdown,
    platform_link, status_distribution, tag_frequencies,
};
pub use trophy_case_core::{Platform, ProgressDescriptor, ProgressStatus};
