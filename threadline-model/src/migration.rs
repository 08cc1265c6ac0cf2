//! Migration-on-read for version gaps in stored rows.
//!
//! The base entity and the info payload evolve independently, so each
//! carries its own version counter and its own rule table. A rule names
//! the version that introduced a field and substitutes the documented
//! default when the field is absent. Rules only ever fill `None`s, which
//! makes the whole step idempotent.

use crate::info::tag;
use crate::row::InteractionRow;

/// Current version of the base timeline-event field set.
///
/// History:
/// - v1: unique_id, thread_id, timestamp, sort_position
/// - v2: added `received_at`; older rows backfill it from `timestamp`
pub const BASE_SCHEMA_VERSION: u32 = 2;

/// Current version of the info-event/payload field set.
///
/// History:
/// - v1: kind, fallback_text, read, configuration-change payload
/// - v2: added `created_in_existing_group`; older rows default to `false`
pub const INFO_SCHEMA_VERSION: u32 = 2;

struct Rule {
    /// Schema version that introduced the field this rule defaults.
    introduced_in: u32,
    fill: fn(&mut InteractionRow),
}

// Both tables are ordered by `introduced_in`.
const BASE_RULES: &[Rule] = &[Rule {
    introduced_in: 2,
    fill: backfill_received_at,
}];

const INFO_RULES: &[Rule] = &[Rule {
    introduced_in: 2,
    fill: default_created_in_existing_group,
}];

/// Normalizes a stored row across version gaps.
///
/// Applies, in version order, every rule introduced after the row's stored
/// counters, then raises the counters to current. Counters are never
/// lowered: a row at a newer version than this build keeps it.
pub(crate) fn run(row: &mut InteractionRow) {
    for rule in BASE_RULES {
        if rule.introduced_in > row.schema_version {
            (rule.fill)(row);
        }
    }
    row.schema_version = row.schema_version.max(BASE_SCHEMA_VERSION);

    for rule in INFO_RULES {
        if rule.introduced_in > row.info_schema_version {
            (rule.fill)(row);
        }
    }
    row.info_schema_version = row.info_schema_version.max(INFO_SCHEMA_VERSION);
}

fn backfill_received_at(row: &mut InteractionRow) {
    if row.received_at.is_none() {
        row.received_at = Some(row.timestamp);
    }
}

fn default_created_in_existing_group(row: &mut InteractionRow) {
    if row.kind == tag::DISAPPEARING_MESSAGES_UPDATE && row.created_in_existing_group.is_none() {
        row.created_in_existing_group = Some(false);
    }
}
