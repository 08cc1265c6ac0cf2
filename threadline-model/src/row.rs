//! The persisted wide-row layout.
//!
//! Every interaction subtype encodes through this one shape; columns a
//! subtype does not use stay `None`. Fields that were added to a schema
//! version after a row was written may be absent, which is why the
//! migratable ones are `Option`s with serde defaults.

use serde::{Deserialize, Serialize};

/// One stored timeline row, exactly as persisted.
///
/// The two version counters record which field sets were in effect when
/// the row was written; they drive migration-on-read and never decrease
/// across the row's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRow {
    // Base layer.
    pub unique_id: String,
    pub thread_id: String,
    pub timestamp: u64,
    /// Absent on rows written before base schema v2; backfilled from
    /// `timestamp` on read.
    #[serde(default)]
    pub received_at: Option<u64>,
    /// Assigned by the persistence adapter at insert time. Rehydration
    /// accepts it verbatim; per-thread monotonicity is the adapter's
    /// responsibility.
    pub sort_position: u64,
    pub schema_version: u32,

    // Info layer.
    /// Raw kind tag. Tags unknown to this build still decode.
    pub kind: u32,
    #[serde(default)]
    pub fallback_text: Option<String>,
    pub info_schema_version: u32,
    #[serde(default)]
    pub read: bool,

    // Configuration-change payload.
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    #[serde(default)]
    pub is_enabled: Option<bool>,
    #[serde(default)]
    pub created_by_remote_name: Option<String>,
    /// Absent on rows written before info schema v2; defaulted to `false`
    /// on read.
    #[serde(default)]
    pub created_in_existing_group: Option<bool>,
}
