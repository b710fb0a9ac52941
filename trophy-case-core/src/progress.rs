//! Achievement progress calculation.
//!
//! Maps an `(total, earned)` pair to a [`ProgressDescriptor`]: a rounded
//! percentage, a completion flag and a coarse status band. The calculation
//! is pure and never cached; callers recompute it whenever they need it.

use serde::{Deserialize, Serialize};

/// Smallest indicator width handed to renderers for a record that has
/// achievements. Keeps 0% bars visible.
pub const MIN_INDICATOR_WIDTH: u8 = 1;

/// Coarse completion band derived from a progress percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    NoAchievements,
    NotStarted,
    Started,
    InProgress,
    AlmostThere,
    Complete,
}

const ALL_STATUSES: &[ProgressStatus] = &[
    ProgressStatus::NoAchievements,
    ProgressStatus::NotStarted,
    ProgressStatus::Started,
    ProgressStatus::InProgress,
    ProgressStatus::AlmostThere,
    ProgressStatus::Complete,
];

impl ProgressStatus {
    /// Human-readable label shown next to progress bars.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoAchievements => "No Achievements",
            Self::NotStarted => "Not Started",
            Self::Started => "Started",
            Self::InProgress => "In Progress",
            Self::AlmostThere => "Almost There",
            Self::Complete => "Complete",
        }
    }

    /// All statuses, from least to most progressed.
    pub fn all() -> &'static [ProgressStatus] {
        ALL_STATUSES
    }

    /// Band for a percentage of a record that has at least one achievement.
    fn from_percentage(percentage: u8, is_complete: bool) -> Self {
        if is_complete {
            Self::Complete
        } else if percentage == 0 {
            Self::NotStarted
        } else if percentage < 25 {
            Self::Started
        } else if percentage < 75 {
            Self::InProgress
        } else {
            Self::AlmostThere
        }
    }
}

impl std::fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Display-ready summary of one record's completion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressDescriptor {
    /// Rounded percentage, 0..=100.
    pub percentage: u8,
    /// `min(earned, total)`.
    pub capped_earned: u32,
    pub total: u32,
    pub is_complete: bool,
    pub status: ProgressStatus,
}

impl ProgressDescriptor {
    /// The fixed descriptor for records without any achievements.
    pub const NO_ACHIEVEMENTS: ProgressDescriptor = ProgressDescriptor {
        percentage: 0,
        capped_earned: 0,
        total: 0,
        is_complete: false,
        status: ProgressStatus::NoAchievements,
    };

    /// Compute progress from already-sanitized counts.
    ///
    /// `earned` above `total` is capped; the percentage rounds half up.
    pub fn calculate(total: u32, earned: u32) -> Self {
        if total == 0 {
            return Self::NO_ACHIEVEMENTS;
        }

        let capped_earned = earned.min(total);
        let total_wide = u64::from(total);
        let percentage = ((u64::from(capped_earned) * 100 + total_wide / 2) / total_wide) as u8;
        let is_complete = capped_earned == total;

        Self {
            percentage,
            capped_earned,
            total,
            is_complete,
            status: ProgressStatus::from_percentage(percentage, is_complete),
        }
    }

    /// Compute progress from arbitrary numbers, as found in loosely typed input.
    ///
    /// Each input goes through [`sanitize_count`] first.
    pub fn calculate_raw(total: f64, earned: f64) -> Self {
        Self::calculate(sanitize_count(total), sanitize_count(earned))
    }

    /// Width hint (percent of the container) for a progress bar.
    ///
    /// Records with achievements never get a zero-width bar; records without
    /// achievements get no bar at all.
    pub fn indicator_width(&self) -> u8 {
        if self.total == 0 {
            0
        } else {
            self.percentage.max(MIN_INDICATOR_WIDTH)
        }
    }

    /// Fraction in `0.0..=1.0` of achievements earned, capped.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.capped_earned) / f64::from(self.total)
        }
    }
}

/// Coerce a loosely typed count to a non-negative integer.
///
/// Non-finite and negative values become 0, fractions truncate toward zero,
/// and values beyond `u32::MAX` saturate.
pub fn sanitize_count(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let floored = value.floor();
    if floored >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        floored as u32
    }
}

/// Coerce a loosely typed duration (hours) to a finite, non-negative value.
pub fn sanitize_hours(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

#[cfg(test)]
#[path = "tests/progress_tests.rs"]
mod tests;
