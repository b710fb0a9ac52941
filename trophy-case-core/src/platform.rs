use serde::{Deserialize, Serialize};

/// Achievement-tracking services the dashboard reads game lists from.
///
/// This enum centralizes platform identity (short names, display names,
/// data-file names and aliases) in one place so the loader, the filter
/// engine and the CLI all agree on what "gog" or "ra" means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Steam,
    Gog,
    RetroAchievements,
}

/// All platform variants in declared processing order.
///
/// Normalization walks platforms in this order, so it also decides the
/// relative position of records that later compare equal under a stable sort.
const ALL_PLATFORMS: &[Platform] = &[Platform::Steam, Platform::Gog, Platform::RetroAchievements];

impl Platform {
    /// Canonical short name used for CLI arguments, data files and cover paths.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Steam => "steam",
            Self::Gog => "gog",
            Self::RetroAchievements => "retroachievements",
        }
    }

    /// Full display name for the platform.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Steam => "Steam",
            Self::Gog => "GOG",
            Self::RetroAchievements => "RetroAchievements",
        }
    }

    /// Name of the JSON file holding this platform's game list.
    pub fn data_file_name(&self) -> &'static str {
        match self {
            Self::Steam => "steam.json",
            Self::Gog => "gog.json",
            Self::RetroAchievements => "retroachievements.json",
        }
    }

    /// All accepted names for this platform (case-insensitive matching).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Steam => &["steam", "valve"],
            Self::Gog => &["gog", "gog.com", "gog galaxy"],
            Self::RetroAchievements => &["retroachievements", "ra", "retro achievements", "retro"],
        }
    }

    /// Whether records on this platform may carry a `subsets` map.
    pub fn supports_subsets(&self) -> bool {
        matches!(self, Self::RetroAchievements)
    }

    /// All platform variants, in declared order.
    pub fn all() -> &'static [Platform] {
        ALL_PLATFORMS
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `Platform`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown platform: '{0}'")]
pub struct PlatformParseError(pub String);

impl std::str::FromStr for Platform {
    type Err = PlatformParseError;

    /// Parse a platform from any recognized name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_PLATFORMS
            .iter()
            .copied()
            .find(|p| p.aliases().contains(&lower.as_str()))
            .ok_or_else(|| PlatformParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
