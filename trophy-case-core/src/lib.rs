//! Shared primitives for the trophy-case dashboard: platform identity and
//! achievement progress calculation.

pub mod platform;
pub mod progress;

pub use platform::{Platform, PlatformParseError};
pub use progress::{
    MIN_INDICATOR_WIDTH, ProgressDescriptor, ProgressStatus, sanitize_count, sanitize_hours,
};
