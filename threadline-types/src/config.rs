//! Disappearing-messages configuration snapshot.

use serde::{Deserialize, Serialize};

/// Default timer duration when disappearing messages are first enabled:
/// one day, in seconds.
pub const DEFAULT_DURATION_SECONDS: u32 = 24 * 60 * 60;

/// A read-only snapshot of a thread's disappearing-message timer.
///
/// Produced by the configuration collaborator and copied into timeline
/// events at the moment of a change. `duration_seconds` is the last
/// configured duration and is meaningful only while `is_enabled` is true;
/// disabling the timer does not zero it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisappearingMessagesConfiguration {
    pub is_enabled: bool,
    pub duration_seconds: u32,
}

impl DisappearingMessagesConfiguration {
    /// An enabled configuration with the given timer duration.
    #[must_use]
    pub const fn enabled(duration_seconds: u32) -> Self {
        Self {
            is_enabled: true,
            duration_seconds,
        }
    }

    /// A disabled configuration. The stored duration is retained so
    /// re-enabling restores the previous timer.
    #[must_use]
    pub const fn disabled(duration_seconds: u32) -> Self {
        Self {
            is_enabled: false,
            duration_seconds,
        }
    }
}

impl Default for DisappearingMessagesConfiguration {
    fn default() -> Self {
        Self::disabled(DEFAULT_DURATION_SECONDS)
    }
}
