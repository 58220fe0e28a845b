use super::*;

// =============================================================
// ApiError
// =============================================================

#[test]
fn server_message_is_absent_for_network_errors() {
    assert_eq!(ApiError::Network.server_message(), None);
}

#[test]
fn server_message_surfaces_the_body_message() {
    let err = ApiError::Server {
        status: 401,
        message: Some("Invalid or expired token".to_owned()),
    };
    assert_eq!(err.server_message(), Some("Invalid or expired token"));
}

#[test]
fn server_message_is_absent_when_the_body_had_none() {
    let err = ApiError::Server {
        status: 500,
        message: None,
    };
    assert_eq!(err.server_message(), None);
}

#[test]
fn display_uses_the_server_message_when_present() {
    let err = ApiError::Server {
        status: 400,
        message: Some("Email is required".to_owned()),
    };
    assert_eq!(err.to_string(), "Email is required");
}

#[test]
fn display_falls_back_when_the_server_sent_no_message() {
    let err = ApiError::Server {
        status: 502,
        message: None,
    };
    assert_eq!(err.to_string(), "request failed");
}
