use proptest::prelude::*;
use std::collections::HashSet;
use std::str::FromStr;
use threadline_types::{InteractionId, ThreadId};

// ── InteractionId ─────────────────────────────────────────────────

#[test]
fn interaction_id_new_is_unique() {
    let a = InteractionId::new();
    let b = InteractionId::new();
    assert_ne!(a, b);
}

#[test]
fn interaction_id_from_uuid_roundtrip() {
    let uuid = uuid::Uuid::new_v4();
    let id = InteractionId::from_uuid(uuid);
    assert_eq!(id.as_uuid(), uuid);
}

#[test]
fn interaction_id_display_and_parse() {
    let id = InteractionId::new();
    let s = id.to_string();
    let parsed = InteractionId::parse(&s).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn interaction_id_from_str() {
    let id = InteractionId::new();
    let parsed = InteractionId::from_str(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn interaction_id_parse_invalid() {
    assert!(InteractionId::parse("not-a-uuid").is_err());
}

#[test]
fn interaction_id_default_is_unique() {
    let a = InteractionId::default();
    let b = InteractionId::default();
    assert_ne!(a, b);
}

#[test]
fn interaction_id_hash_and_eq() {
    let id = InteractionId::new();
    let mut set = HashSet::new();
    set.insert(id);
    set.insert(id); // duplicate
    assert_eq!(set.len(), 1);
}

#[test]
fn interaction_id_serialization_roundtrip() {
    let id = InteractionId::new();
    let json = serde_json::to_string(&id).unwrap();
    let parsed: InteractionId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn interaction_id_serializes_transparent() {
    let id = InteractionId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{id}\""));
}

// ── ThreadId ──────────────────────────────────────────────────────

#[test]
fn thread_id_is_opaque_string() {
    let id = ThreadId::new("thread/abc+123");
    assert_eq!(id.as_str(), "thread/abc+123");
    assert_eq!(id.to_string(), "thread/abc+123");
}

#[test]
fn thread_id_empty() {
    assert!(ThreadId::new("").is_empty());
    assert!(!ThreadId::new("t").is_empty());
}

#[test]
fn thread_id_from_impls() {
    let a: ThreadId = "t1".into();
    let b: ThreadId = String::from("t1").into();
    assert_eq!(a, b);
}

#[test]
fn thread_id_serialization_roundtrip() {
    let id = ThreadId::new("t-42");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"t-42\"");
    let parsed: ThreadId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, parsed);
}

// ── Properties ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn interaction_id_display_parse_roundtrip_for_any_uuid(bytes: [u8; 16]) {
        let id = InteractionId::from_uuid(uuid::Uuid::from_bytes(bytes));
        let parsed = InteractionId::parse(&id.to_string()).unwrap();
        prop_assert_eq!(id, parsed);
    }

    #[test]
    fn thread_id_preserves_arbitrary_strings(s in ".*") {
        let id = ThreadId::new(s.clone());
        prop_assert_eq!(id.as_str(), s.as_str());
    }
}
