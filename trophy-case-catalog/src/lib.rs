//! Game-list data model, JSON loading, normalization, and the filter/sort
//! and statistics engine behind the dashboard.
//!
//! Data flows one way: raw per-platform JSON is normalized once into an
//! immutable list of [`NormalizedGame`]s; views, tag lists and counters are
//! derived from that list on demand.

pub mod date;
pub mod filter;
pub mod links;
pub mod load;
pub mod normalize;
pub mod stats;
pub mod tags;
pub mod types;

pub use date::{AchievementDate, parse_achievement_date};
pub use filter::{FilterCriteria, PlatformFilter, SortKey, SortKeyParseError, apply, apply_refs, sort_games};
pub use links::{game_link, platform_link};
pub use load::{LoadError, parse_platform_records};
pub use normalize::{NormalizeReport, normalize, normalize_with_report};
pub use stats::{PlatformBreakdown, Stats, platform_breakdown, status_distribution, summarize, tag_frequencies};
pub use tags::extract_tags;
pub use types::*;
