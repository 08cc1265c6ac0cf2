//! Payload for a disappearing-message timer change.

use serde::{Deserialize, Serialize};
use threadline_types::DisappearingMessagesConfiguration;

/// A historical snapshot of a disappearing-message configuration change.
///
/// Captures the timer *at the moment of the change*; later configuration
/// changes produce new events and never alter this one. The duration is
/// kept verbatim even when the timer was disabled — it is the last
/// configured value, meaningful only while `is_enabled` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationChange {
    pub(crate) duration_seconds: u32,
    pub(crate) is_enabled: bool,
    pub(crate) created_by_remote_name: Option<String>,
    pub(crate) created_in_existing_group: bool,
}

impl ConfigurationChange {
    /// Copies the configuration out of a live snapshot.
    ///
    /// `changed_by_remote_name` is `None` when the local user made the
    /// change; that nullability is the sole origin signal.
    #[must_use]
    pub fn from_snapshot(
        configuration: &DisappearingMessagesConfiguration,
        changed_by_remote_name: Option<String>,
        created_in_existing_group: bool,
    ) -> Self {
        Self {
            duration_seconds: configuration.duration_seconds,
            is_enabled: configuration.is_enabled,
            created_by_remote_name: changed_by_remote_name,
            created_in_existing_group,
        }
    }

    /// Timer duration in seconds at the moment of the change.
    #[must_use]
    pub const fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    /// Whether disappearing messages were enabled after this change.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// Name of the remote participant who made the change, or `None` if
    /// the local user did.
    #[must_use]
    pub fn created_by_remote_name(&self) -> Option<&str> {
        self.created_by_remote_name.as_deref()
    }

    /// True if this records the configuration discovered when joining a
    /// group that already had a non-default timer, rather than an explicit
    /// user-initiated change.
    #[must_use]
    pub const fn created_in_existing_group(&self) -> bool {
        self.created_in_existing_group
    }

    /// True if the local user made the change.
    #[must_use]
    pub fn is_local_change(&self) -> bool {
        self.created_by_remote_name.is_none()
    }
}
