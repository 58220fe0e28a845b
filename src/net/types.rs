//! Request/response types for the Pow Hunter REST API.
//!
//! The backend serializes optional columns as Go `sql.Null*` wrappers
//! (`{"String": "...", "Valid": true}`), so resort and alert records come in
//! as [`ResortRecord`]/[`UserAlert`] wire shapes and are converted to
//! `Option`-typed domain structs before use.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated user record, as returned by the token exchange.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub uuid: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub created_at: String,
    pub email_verified: bool,
    #[serde(default)]
    pub verified_at: Option<String>,
}

/// Successful `POST /api/auth/verify` response: a session token plus the
/// verified user.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VerifySession {
    pub token: String,
    pub user: User,
}

/// Error body shape shared by the auth endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Go `sql.NullString` as serialized by the backend.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NullableString {
    #[serde(rename = "String")]
    pub value: String,
    #[serde(rename = "Valid")]
    pub valid: bool,
}

impl NullableString {
    #[must_use]
    pub fn into_option(self) -> Option<String> {
        self.valid.then_some(self.value)
    }
}

/// Go `sql.NullFloat64` as serialized by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct NullableFloat {
    #[serde(rename = "Float64")]
    pub value: f64,
    #[serde(rename = "Valid")]
    pub valid: bool,
}

impl NullableFloat {
    #[must_use]
    pub fn into_option(self) -> Option<f64> {
        self.valid.then_some(self.value)
    }
}

/// Go `sql.NullTime` as serialized by the backend.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NullableTime {
    #[serde(rename = "Time")]
    pub value: String,
    #[serde(rename = "Valid")]
    pub valid: bool,
}

impl NullableTime {
    #[must_use]
    pub fn into_option(self) -> Option<String> {
        self.valid.then_some(self.value)
    }
}

/// Resort row as returned by `GET /api/resorts`.
#[derive(Clone, Debug, Deserialize)]
pub struct ResortRecord {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub url_host: NullableString,
    #[serde(default)]
    pub url_pathname: NullableString,
    #[serde(default)]
    pub latitude: NullableFloat,
    #[serde(default)]
    pub longitude: NullableFloat,
}

/// Resort with nullable columns unwrapped for the UI.
#[derive(Clone, Debug, PartialEq)]
pub struct Resort {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    pub url_host: Option<String>,
    pub url_pathname: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<ResortRecord> for Resort {
    fn from(record: ResortRecord) -> Self {
        Self {
            id: record.id,
            uuid: record.uuid,
            name: record.name,
            url_host: record.url_host.into_option(),
            url_pathname: record.url_pathname.into_option(),
            latitude: record.latitude.into_option(),
            longitude: record.longitude.into_option(),
        }
    }
}

/// `POST /api/alerts` body. Field names are the backend's camelCase contract.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlertsRequest {
    pub phone: String,
    pub notification_days: u32,
    pub min_snow_amount: u32,
    pub resorts_uuids: Vec<String>,
}

/// `POST /api/auth/magic-link` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MagicLinkRequest {
    pub email: String,
    pub purpose: String,
}

/// `POST /api/auth/verify` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VerifyRequest {
    pub token: String,
}

/// Alert subscription row from `GET /api/user/alerts`.
#[derive(Clone, Debug, Deserialize)]
pub struct UserAlert {
    pub id: i64,
    pub resort_uuid: String,
    pub resort_name: String,
    pub min_snow_amount: u32,
    pub notification_days: u32,
    #[serde(default)]
    pub created_at: NullableTime,
}

/// `POST /api/contact` body.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}
