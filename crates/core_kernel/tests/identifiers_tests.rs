//! Tests for strongly-typed identifiers

use core_kernel::{BillId, GroupId, TransactionId, UserId};
use uuid::Uuid;

#[test]
fn test_prefixes_are_distinct() {
    assert_eq!(UserId::prefix(), "USR");
    assert_eq!(GroupId::prefix(), "GRP");
    assert_eq!(BillId::prefix(), "BIL");
    assert_eq!(TransactionId::prefix(), "TXN");
}

#[test]
fn test_new_ids_are_unique() {
    let a = UserId::new();
    let b = UserId::new();
    assert_ne!(a, b);
}

#[test]
fn test_v7_ids_are_time_ordered() {
    let a = TransactionId::new_v7();
    let b = TransactionId::new_v7();
    assert!(a.as_uuid() <= b.as_uuid());
}

#[test]
fn test_display_and_parse_round_trip() {
    let id = GroupId::new();
    let display = id.to_string();
    assert!(display.starts_with("GRP-"));

    let parsed: GroupId = display.parse().unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn test_uuid_conversions() {
    let uuid = Uuid::new_v4();
    let id = BillId::from_uuid(uuid);
    let back: Uuid = id.into();
    assert_eq!(uuid, back);
}

#[test]
fn test_serde_is_transparent() {
    let id = UserId::new();
    let json = serde_json::to_string(&id).unwrap();
    // Serialized form is the bare UUID, without the display prefix.
    assert_eq!(json, format!("\"{}\"", id.as_uuid()));

    let parsed: UserId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn test_parse_rejects_garbage() {
    assert!("not-a-uuid".parse::<UserId>().is_err());
}
