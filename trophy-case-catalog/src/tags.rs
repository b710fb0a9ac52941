//! The tag universe of a game list.

use std::collections::BTreeSet;

use crate::types::NormalizedGame;

/// Every distinct tag across `games`, in ascending lexical order.
///
/// Computed from the full list at load time; filtering never changes it.
/// Blank tags are ignored.
pub fn extract_tags(games: &[NormalizedGame]) -> BTreeSet<String> {
    games
        .iter()
        .flat_map(|g| g.tags.iter())
        .filter(|t| !t.trim().is_empty())
        .cloned()
        .collect()
}
