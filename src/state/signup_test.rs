use super::*;
use crate::util::storage::MemoryStorage;

fn payload() -> StagedSignup {
    StagedSignup {
        phone: "555-1234".to_owned(),
        notification_days: 3,
        min_snow_amount: 6,
        resorts: vec!["Whistler".to_owned(), "Alta".to_owned()],
    }
}

// =============================================================
// stage / take
// =============================================================

#[test]
fn stage_then_take_round_trips() {
    let storage = MemoryStorage::new();
    stage(&storage, &payload());
    assert_eq!(take(&storage), Some(payload()));
}

#[test]
fn take_removes_the_slot() {
    let storage = MemoryStorage::new();
    stage(&storage, &payload());
    let _ = take(&storage);
    assert!(storage.get(SIGNUP_DATA_KEY).is_none());
    assert!(take(&storage).is_none());
}

#[test]
fn take_from_empty_storage_is_none() {
    let storage = MemoryStorage::new();
    assert!(take(&storage).is_none());
}

#[test]
fn take_removes_corrupt_data_and_returns_none() {
    let storage = MemoryStorage::new();
    storage.set(SIGNUP_DATA_KEY, "{not json");
    assert!(take(&storage).is_none());
    assert!(storage.get(SIGNUP_DATA_KEY).is_none());
}

#[test]
fn stage_overwrites_a_previous_payload() {
    let storage = MemoryStorage::new();
    stage(&storage, &payload());

    let mut second = payload();
    second.resorts = vec!["Jackson Hole".to_owned()];
    stage(&storage, &second);

    assert_eq!(take(&storage), Some(second));
}

// =============================================================
// Serialized form
// =============================================================

#[test]
fn payload_serializes_camel_case() {
    let storage = MemoryStorage::new();
    stage(&storage, &payload());

    let json = storage.get(SIGNUP_DATA_KEY).expect("staged slot");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["notificationDays"], 3);
    assert_eq!(value["minSnowAmount"], 6);
    assert_eq!(value["resorts"][0], "Whistler");
}
