use std::rc::Rc;

use super::*;
use crate::util::storage::MemoryStorage;

fn user() -> User {
    User {
        id: 1,
        uuid: "user-1".to_owned(),
        email: "skier@example.com".to_owned(),
        phone: Some("555-1234".to_owned()),
        created_at: "2026-01-02T03:04:05Z".to_owned(),
        email_verified: true,
        verified_at: Some("2026-01-02T03:05:00Z".to_owned()),
    }
}

// =============================================================
// Hydration
// =============================================================

#[test]
fn empty_storage_hydrates_to_empty_session() {
    let store = SessionStore::new(Rc::new(MemoryStorage::new()));
    assert!(!store.is_authenticated());
    assert!(store.token().is_none());
    assert!(store.user().is_none());
    assert!(!store.is_loading());
}

#[test]
fn corrupt_user_json_clears_persisted_state() {
    let storage = Rc::new(MemoryStorage::new());
    storage.set(TOKEN_KEY, "tok-1");
    storage.set(USER_KEY, "{not json");

    let store = SessionStore::new(storage.clone());
    assert!(!store.is_authenticated());
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(storage.get(USER_KEY).is_none());
}

#[test]
fn token_without_user_is_treated_as_corrupt() {
    let storage = Rc::new(MemoryStorage::new());
    storage.set(TOKEN_KEY, "tok-1");

    let store = SessionStore::new(storage.clone());
    assert!(!store.is_authenticated());
    assert!(storage.get(TOKEN_KEY).is_none());
}

#[test]
fn login_then_hydrate_in_a_fresh_instance_round_trips() {
    let storage = Rc::new(MemoryStorage::new());
    let mut store = SessionStore::new(storage.clone());
    store.login("tok-1".to_owned(), user());

    let fresh = SessionStore::new(storage);
    assert!(fresh.is_authenticated());
    assert_eq!(fresh.token(), Some("tok-1"));
    assert_eq!(fresh.user(), Some(&user()));
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_sets_both_fields_and_persists() {
    let storage = Rc::new(MemoryStorage::new());
    let mut store = SessionStore::new(storage.clone());
    store.login("tok-1".to_owned(), user());

    assert!(store.is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok-1"));
    assert!(storage.get(USER_KEY).is_some());
}

#[test]
fn login_overwrites_a_previous_session() {
    let storage = Rc::new(MemoryStorage::new());
    let mut store = SessionStore::new(storage.clone());
    store.login("tok-1".to_owned(), user());

    let mut other = user();
    other.uuid = "user-2".to_owned();
    store.login("tok-2".to_owned(), other);

    assert_eq!(store.token(), Some("tok-2"));
    assert_eq!(store.user().map(|u| u.uuid.as_str()), Some("user-2"));
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok-2"));
}

#[test]
fn logout_clears_state_and_storage() {
    let storage = Rc::new(MemoryStorage::new());
    let mut store = SessionStore::new(storage.clone());
    store.login("tok-1".to_owned(), user());

    futures::executor::block_on(store.logout());

    assert!(!store.is_authenticated());
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(storage.get(USER_KEY).is_none());
}

#[test]
fn logout_without_a_token_clears_without_a_network_call() {
    // No token present, so the remote-invalidation branch is never taken.
    let storage = Rc::new(MemoryStorage::new());
    let mut store = SessionStore::new(storage.clone());
    storage.set(USER_KEY, "stale");

    futures::executor::block_on(store.logout());

    assert!(!store.is_authenticated());
    assert!(storage.get(USER_KEY).is_none());
}
