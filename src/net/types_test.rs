use super::*;

// =============================================================
// Nullable wrappers
// =============================================================

#[test]
fn nullable_string_valid_unwraps() {
    let n: NullableString =
        serde_json::from_value(serde_json::json!({"String": "whistler.com", "Valid": true}))
            .expect("nullable string");
    assert_eq!(n.into_option().as_deref(), Some("whistler.com"));
}

#[test]
fn nullable_string_invalid_is_none() {
    let n: NullableString =
        serde_json::from_value(serde_json::json!({"String": "", "Valid": false}))
            .expect("nullable string");
    assert!(n.into_option().is_none());
}

#[test]
fn nullable_float_invalid_drops_value() {
    let n: NullableFloat =
        serde_json::from_value(serde_json::json!({"Float64": 50.1, "Valid": false}))
            .expect("nullable float");
    assert!(n.into_option().is_none());
}

// =============================================================
// Resort wire → domain conversion
// =============================================================

#[test]
fn resort_record_converts_valid_columns() {
    let record: ResortRecord = serde_json::from_value(serde_json::json!({
        "id": 1,
        "uuid": "u1",
        "name": "Whistler",
        "url_host": {"String": "whistler.com", "Valid": true},
        "url_pathname": {"String": "", "Valid": false},
        "latitude": {"Float64": 50.11, "Valid": true},
        "longitude": {"Float64": 0.0, "Valid": false}
    }))
    .expect("resort record");

    let resort = Resort::from(record);
    assert_eq!(resort.uuid, "u1");
    assert_eq!(resort.name, "Whistler");
    assert_eq!(resort.url_host.as_deref(), Some("whistler.com"));
    assert!(resort.url_pathname.is_none());
    assert_eq!(resort.latitude, Some(50.11));
    assert!(resort.longitude.is_none());
}

#[test]
fn resort_record_tolerates_missing_nullable_columns() {
    let record: ResortRecord = serde_json::from_value(serde_json::json!({
        "id": 2,
        "uuid": "u2",
        "name": "Alta"
    }))
    .expect("resort record");

    let resort = Resort::from(record);
    assert!(resort.url_host.is_none());
    assert!(resort.latitude.is_none());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn create_alerts_request_uses_backend_field_names() {
    let request = CreateAlertsRequest {
        phone: "555-1234".to_owned(),
        notification_days: 3,
        min_snow_amount: 6,
        resorts_uuids: vec!["u1".to_owned()],
    };

    let body = serde_json::to_value(&request).expect("serialize");
    assert_eq!(
        body,
        serde_json::json!({
            "phone": "555-1234",
            "notificationDays": 3,
            "minSnowAmount": 6,
            "resortsUuids": ["u1"]
        })
    );
}

#[test]
fn user_deserializes_without_optional_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 7,
        "uuid": "user-7",
        "email": "a@b.com",
        "created_at": "2026-01-02T03:04:05Z",
        "email_verified": true
    }))
    .expect("user");

    assert!(user.phone.is_none());
    assert!(user.verified_at.is_none());
    assert!(user.email_verified);
}

#[test]
fn user_alert_reads_nullable_created_at() {
    let alert: UserAlert = serde_json::from_value(serde_json::json!({
        "id": 9,
        "resort_uuid": "u1",
        "resort_name": "Whistler",
        "min_snow_amount": 6,
        "notification_days": 3,
        "created_at": {"Time": "2026-01-02T03:04:05Z", "Valid": true}
    }))
    .expect("user alert");

    assert_eq!(
        alert.created_at.into_option().as_deref(),
        Some("2026-01-02T03:04:05Z")
    );
}
