//! Staged signup payload.
//!
//! The signup form persists its data before the user leaves to check email;
//! the verification flow consumes it exactly once when the magic link comes
//! back with purpose `signup`. The slot is removed the moment it is read,
//! whether or not the later alert-creation call succeeds.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::StorageBackend;

/// Persisted slot holding the serialized payload.
pub const SIGNUP_DATA_KEY: &str = "signup_data";

/// Signup form data staged across the email round-trip. Resorts are kept as
/// display names; UUID resolution happens at redemption time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StagedSignup {
    pub phone: String,
    pub notification_days: u32,
    pub min_snow_amount: u32,
    pub resorts: Vec<String>,
}

/// Persist the payload, replacing any previously staged one.
pub fn stage(storage: &impl StorageBackend, payload: &StagedSignup) {
    if let Ok(json) = serde_json::to_string(payload) {
        storage.set(SIGNUP_DATA_KEY, &json);
    }
}

/// Read and delete the staged payload. The slot is removed even when the
/// stored data fails to parse.
pub fn take(storage: &impl StorageBackend) -> Option<StagedSignup> {
    let json = storage.get(SIGNUP_DATA_KEY)?;
    storage.remove(SIGNUP_DATA_KEY);
    serde_json::from_str(&json).ok()
}
