use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_get_missing_is_none() {
    let storage = MemoryStorage::new();
    assert!(storage.get("auth_token").is_none());
}

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set("auth_token", "tok-1");
    assert_eq!(storage.get("auth_token").as_deref(), Some("tok-1"));
}

#[test]
fn memory_storage_set_overwrites_wholesale() {
    let storage = MemoryStorage::new();
    storage.set("signup_data", "old");
    storage.set("signup_data", "new");
    assert_eq!(storage.get("signup_data").as_deref(), Some("new"));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_remove_clears_slot() {
    let storage = MemoryStorage::new();
    storage.set("user", "{}");
    storage.remove("user");
    assert!(storage.get("user").is_none());
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_remove_missing_is_noop() {
    let storage = MemoryStorage::new();
    storage.remove("user");
    assert!(storage.is_empty());
}

// =============================================================
// Rc forwarding
// =============================================================

#[test]
fn rc_backend_shares_slots_between_clones() {
    let storage = std::rc::Rc::new(MemoryStorage::new());
    let alias = storage.clone();
    storage.set("auth_token", "tok-2");
    assert_eq!(alias.get("auth_token").as_deref(), Some("tok-2"));
}

// =============================================================
// BrowserStorage (native stub)
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_empty_outside_the_browser() {
    let storage = BrowserStorage;
    storage.set("auth_token", "tok-3");
    assert!(storage.get("auth_token").is_none());
    storage.remove("auth_token");
}
