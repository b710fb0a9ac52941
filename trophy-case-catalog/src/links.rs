//! Canonical platform URLs for games.

use trophy_case_core::Platform;

use crate::types::NormalizedGame;

/// Link to the platform's achievement page for `game`.
///
/// RetroAchievements subsets link to their parent game with a `set` query
/// parameter selecting the subset.
pub fn game_link(game: &NormalizedGame) -> String {
    platform_link(game.platform, &game.effective_id, game.parent_id.as_deref())
}

/// Build a link from raw fields. `parent_id` only matters for RetroAchievements.
pub fn platform_link(platform: Platform, id: &str, parent_id: Option<&str>) -> String {
    match platform {
        Platform::Steam => format!("https://steamcommunity.com/stats/{id}/achievements"),
        Platform::Gog => format!("https://www.gog.com/game/{id}"),
        Platform::RetroAchievements => match parent_id {
            Some(parent) => format!("https://retroachievements.org/game/{parent}?set={id}"),
            None => format!("https://retroachievements.org/game/{id}"),
        },
    }
}
