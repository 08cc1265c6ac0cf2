mod common;

use common::{FixedClock, Threads};
use pretty_assertions::assert_eq;
use threadline_model::{
    BASE_SCHEMA_VERSION, INFO_SCHEMA_VERSION, InfoBody, InfoEvent, Interaction, InteractionBody,
    ModelError,
};
use threadline_types::{DisappearingMessagesConfiguration, ThreadId};

fn info_body() -> InteractionBody {
    InteractionBody::Info(InfoEvent::new(InfoBody::SessionEnded))
}

// ── Base construction ─────────────────────────────────────────────

#[test]
fn fresh_construction_assigns_identity_and_versions() {
    let event = Interaction::new(ThreadId::new("T1"), 1000, 1200, info_body()).unwrap();

    assert_eq!(event.thread_id().as_str(), "T1");
    assert_eq!(event.timestamp(), 1000);
    assert_eq!(event.received_at(), 1200);
    assert_eq!(event.schema_version(), BASE_SCHEMA_VERSION);
    assert_eq!(event.sort_position(), None);
}

#[test]
fn fresh_construction_ids_are_unique() {
    let a = Interaction::new(ThreadId::new("T1"), 1, 1, info_body()).unwrap();
    let b = Interaction::new(ThreadId::new("T1"), 1, 1, info_body()).unwrap();
    assert_ne!(a.unique_id(), b.unique_id());
}

#[test]
fn empty_thread_id_is_invalid_reference() {
    let err = Interaction::new(ThreadId::new(""), 1000, 1000, info_body()).unwrap_err();
    assert!(matches!(err, ModelError::InvalidReference(_)));
}

#[test]
fn timestamps_may_differ() {
    // An event synced from another device: logical time well before receipt.
    let event = Interaction::new(ThreadId::new("T1"), 5_000, 900_000, info_body()).unwrap();
    assert_eq!(event.timestamp(), 5_000);
    assert_eq!(event.received_at(), 900_000);
}

#[test]
fn with_sort_position_stamps_position() {
    let event = Interaction::new(ThreadId::new("T1"), 1, 1, info_body()).unwrap();
    let stamped = event.with_sort_position(7);
    assert_eq!(stamped.sort_position(), Some(7));
}

// ── Info events ───────────────────────────────────────────────────

#[test]
fn fresh_info_event_defaults() {
    let info = InfoEvent::new(InfoBody::GroupQuit);
    assert_eq!(info.schema_version(), INFO_SCHEMA_VERSION);
    assert!(!info.is_read());
    assert_eq!(info.fallback_text(), None);
}

#[test]
fn info_event_fallback_text() {
    let info = InfoEvent::new(InfoBody::GroupUpdated).with_fallback_text("Group was renamed");
    assert_eq!(info.fallback_text(), Some("Group was renamed"));
}

#[test]
fn non_config_event_has_no_config_payload() {
    let event = Interaction::new(ThreadId::new("T1"), 1, 1, info_body()).unwrap();
    assert!(event.as_config_change().is_none());
}

#[test]
fn config_change_requires_resolvable_thread() {
    let threads = Threads::with(&["T1"]);
    let err = Interaction::record_config_change(
        &threads,
        &FixedClock(1),
        ThreadId::new("T2"),
        1000,
        &DisappearingMessagesConfiguration::enabled(60),
        None,
        false,
    )
    .unwrap_err();
    assert!(matches!(err, ModelError::InvalidArgument(_)));
}
