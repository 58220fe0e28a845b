//! Magic-link verification flow.
//!
//! Drives the redemption screen: exchange the one-shot token for a session,
//! replay a staged signup payload when the link was issued for signup, then
//! land on a terminal status. Progress is strictly forward; `Error` is
//! terminal per attempt and a fresh link must be requested to retry.
//!
//! ORDERING
//! ========
//! The token exchange completes (either way) before any staged-alert work
//! runs, and staged-alert work completes (or is abandoned) before the
//! terminal `Success`. Each outbound call is attempted exactly once.

#[cfg(test)]
#[path = "verify_test.rs"]
mod verify_test;

use crate::net::api::{ApiError, VerifyApi};
use crate::net::types::{CreateAlertsRequest, Resort};
use crate::state::session::SessionStore;
use crate::state::signup::{self, StagedSignup};
use crate::util::storage::StorageBackend;

/// How long the success screen is shown before navigating onward.
pub const SUCCESS_REDIRECT_DELAY_MS: u32 = 2000;

/// Shown when the URL carries no token. No network call is made.
pub const INVALID_LINK_MESSAGE: &str = "Invalid verification link";

/// Shown when the exchange produced no response at all.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Shown when the server rejected the exchange without a message of its own.
pub const VERIFY_FALLBACK_MESSAGE: &str = "Failed to verify magic link";

/// Outcome of a verification attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum VerifyStatus {
    #[default]
    Verifying,
    CreatingAlerts,
    Success,
    Error(String),
}

/// Flow discriminator carried through the magic-link URL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Purpose {
    #[default]
    Login,
    Signup,
}

impl Purpose {
    /// Parse the `purpose` query parameter. Anything but `signup` is a
    /// plain login.
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("signup") => Self::Signup,
            _ => Self::Login,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
        }
    }

    /// Where the success screen navigates after the display delay.
    #[must_use]
    pub fn redirect_path(self) -> &'static str {
        match self {
            Self::Login => "/manage",
            Self::Signup => "/success",
        }
    }
}

/// Run one verification attempt. `observe` sees every transition after the
/// initial `Verifying`; the terminal status is also returned.
///
/// Alert-creation failures are logged and swallowed: the user has already
/// authenticated, so they never alter the outcome.
pub async fn run<S, A, F>(
    api: &A,
    session: &mut SessionStore<S>,
    token: Option<&str>,
    purpose: Purpose,
    mut observe: F,
) -> VerifyStatus
where
    S: StorageBackend,
    A: VerifyApi,
    F: FnMut(&VerifyStatus),
{
    let Some(token) = token else {
        let status = VerifyStatus::Error(INVALID_LINK_MESSAGE.to_owned());
        observe(&status);
        return status;
    };

    let verified = match api.verify_magic_link(token).await {
        Ok(session_data) => session_data,
        Err(err) => {
            let message = match err {
                ApiError::Network => NETWORK_ERROR_MESSAGE.to_owned(),
                ApiError::Server { message, .. } => {
                    message.unwrap_or_else(|| VERIFY_FALLBACK_MESSAGE.to_owned())
                }
            };
            let status = VerifyStatus::Error(message);
            observe(&status);
            return status;
        }
    };

    let fresh_token = verified.token.clone();
    session.login(verified.token, verified.user);

    if purpose == Purpose::Signup {
        // The slot is consumed here regardless of what happens next.
        if let Some(staged) = signup::take(session.storage()) {
            let status = VerifyStatus::CreatingAlerts;
            observe(&status);
            if let Err(err) = create_staged_alerts(api, &fresh_token, staged).await {
                log::error!("failed to create signup alerts: {err}");
            }
        }
    }

    let status = VerifyStatus::Success;
    observe(&status);
    status
}

async fn create_staged_alerts<A: VerifyApi>(
    api: &A,
    token: &str,
    staged: StagedSignup,
) -> Result<(), ApiError> {
    let resorts = api.fetch_resorts().await?;
    let request = alerts_request_from_staged(staged, &resorts);
    api.create_alerts(token, &request).await
}

/// Resolve staged resort names to backend UUIDs by exact name match. Names
/// with no match (renamed or removed server-side since staging) are dropped.
#[must_use]
pub fn resolve_resort_uuids(names: &[String], resorts: &[Resort]) -> Vec<String> {
    names
        .iter()
        .filter_map(|name| {
            resorts
                .iter()
                .find(|resort| resort.name == *name)
                .map(|resort| resort.uuid.clone())
        })
        .collect()
}

/// Build the alert-creation request from a staged payload and the current
/// resort list. An empty resolved list still yields a request.
#[must_use]
pub fn alerts_request_from_staged(
    staged: StagedSignup,
    resorts: &[Resort],
) -> CreateAlertsRequest {
    CreateAlertsRequest {
        resorts_uuids: resolve_resort_uuids(&staged.resorts, resorts),
        phone: staged.phone,
        notification_days: staged.notification_days,
        min_snow_amount: staged.min_snow_amount,
    }
}
