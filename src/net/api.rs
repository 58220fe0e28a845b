//! REST API client for the Pow Hunter backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs that report a transport failure, since the endpoints
//! are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call maps to [`ApiError`]: `Server` when the backend answered with a
//! non-2xx status (carrying its `{message}` body when present), `Network`
//! when no response was received at all. Calls are single-attempt; retry is
//! the user's job (request a new magic link).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{
    ContactRequest, CreateAlertsRequest, Resort, UserAlert, VerifySession,
};

/// Failure of a single API call.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// The request could not be completed; no response was received.
    #[error("network error")]
    Network,
    /// The backend rejected the request. `message` is absent when the error
    /// body carried no parseable `{message}`; callers pick the user-facing
    /// fallback for their flow.
    #[error("{}", .message.as_deref().unwrap_or("request failed"))]
    Server {
        status: u16,
        message: Option<String>,
    },
}

impl ApiError {
    /// Server-provided message, if the backend answered with one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Network => None,
            Self::Server { message, .. } => message.as_deref(),
        }
    }
}

/// Collaborator seam for the verification flow: the three calls the
/// magic-link redemption screen makes. Implemented by [`HttpApi`] and by
/// scripted fakes in tests.
#[allow(async_fn_in_trait)]
pub trait VerifyApi {
    /// Exchange a one-shot magic-link token for a session.
    async fn verify_magic_link(&self, token: &str) -> Result<VerifySession, ApiError>;

    /// Fetch the full resort list.
    async fn fetch_resorts(&self) -> Result<Vec<Resort>, ApiError>;

    /// Create alert subscriptions for the authenticated user.
    async fn create_alerts(
        &self,
        token: &str,
        request: &CreateAlertsRequest,
    ) -> Result<(), ApiError>;
}

/// HTTP implementation of the Pow Hunter API.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

#[cfg(feature = "csr")]
mod http {
    use super::ApiError;
    use crate::net::types::ApiMessage;
    use gloo_net::http::{RequestBuilder, Response};

    pub fn bearer(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", &format!("Bearer {token}"))
    }

    /// Build an [`ApiError::Server`] from a non-2xx response. A missing or
    /// unparseable `{message}` body yields `message: None`.
    pub async fn server_error(resp: Response) -> ApiError {
        let status = resp.status();
        let message = resp.json::<ApiMessage>().await.ok().map(|body| body.message);
        ApiError::Server { status, message }
    }

    pub async fn send_json<T: serde::Serialize>(
        builder: RequestBuilder,
        body: &T,
    ) -> Result<Response, ApiError> {
        builder
            .json(body)
            .map_err(|_| ApiError::Network)?
            .send()
            .await
            .map_err(|_| ApiError::Network)
    }

    pub async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        builder
            .build()
            .map_err(|_| ApiError::Network)?
            .send()
            .await
            .map_err(|_| ApiError::Network)
    }
}

impl VerifyApi for HttpApi {
    async fn verify_magic_link(&self, token: &str) -> Result<VerifySession, ApiError> {
        #[cfg(feature = "csr")]
        {
            use crate::net::types::VerifyRequest;
            let body = VerifyRequest { token: token.to_owned() };
            let resp =
                http::send_json(gloo_net::http::Request::post("/api/auth/verify"), &body).await?;
            if !resp.ok() {
                return Err(http::server_error(resp).await);
            }
            resp.json::<VerifySession>().await.map_err(|_| ApiError::Network)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(ApiError::Network)
        }
    }

    async fn fetch_resorts(&self) -> Result<Vec<Resort>, ApiError> {
        #[cfg(feature = "csr")]
        {
            use crate::net::types::ResortRecord;
            let resp = http::send(gloo_net::http::Request::get("/api/resorts")).await?;
            if !resp.ok() {
                return Err(http::server_error(resp).await);
            }
            let records = resp
                .json::<Vec<ResortRecord>>()
                .await
                .map_err(|_| ApiError::Network)?;
            Ok(records.into_iter().map(Resort::from).collect())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Network)
        }
    }

    async fn create_alerts(
        &self,
        token: &str,
        request: &CreateAlertsRequest,
    ) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = http::bearer(gloo_net::http::Request::post("/api/alerts"), token);
            let resp = http::send_json(builder, request).await?;
            if !resp.ok() {
                return Err(http::server_error(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, request);
            Err(ApiError::Network)
        }
    }
}

impl HttpApi {
    /// Request a magic-link email via `POST /api/auth/magic-link`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the backend rejects the request or is
    /// unreachable.
    pub async fn request_magic_link(&self, email: &str, purpose: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            use crate::net::types::MagicLinkRequest;
            let body = MagicLinkRequest {
                email: email.to_owned(),
                purpose: purpose.to_owned(),
            };
            let resp =
                http::send_json(gloo_net::http::Request::post("/api/auth/magic-link"), &body)
                    .await?;
            if !resp.ok() {
                return Err(http::server_error(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, purpose);
            Err(ApiError::Network)
        }
    }

    /// Invalidate the session server-side. Callers ignore the outcome;
    /// local logout proceeds regardless.
    pub async fn logout(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let builder = http::bearer(gloo_net::http::Request::post("/api/auth/logout"), token);
            let _ = http::send(builder).await;
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    /// Fetch a user's alert subscriptions. A 404 means "no subscriptions",
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any other non-2xx status or transport failure.
    pub async fn fetch_user_alerts(&self, email: &str) -> Result<Vec<UserAlert>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = format!("/api/user/alerts?email={}", urlencode(email));
            let resp = http::send(gloo_net::http::Request::get(&url)).await?;
            if resp.status() == 404 {
                return Ok(Vec::new());
            }
            if !resp.ok() {
                return Err(http::server_error(resp).await);
            }
            resp.json::<Vec<UserAlert>>().await.map_err(|_| ApiError::Network)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = email;
            Err(ApiError::Network)
        }
    }

    /// Delete one alert subscription by resort.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the backend rejects the request or is
    /// unreachable.
    pub async fn delete_alert(&self, email: &str, resort_uuid: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = format!(
                "/api/user/alerts/delete?email={}&resort_uuid={}",
                urlencode(email),
                urlencode(resort_uuid)
            );
            let resp = http::send(gloo_net::http::Request::delete(&url)).await?;
            if !resp.ok() {
                return Err(http::server_error(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, resort_uuid);
            Err(ApiError::Network)
        }
    }

    /// Delete every alert subscription for an email address.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the backend rejects the request or is
    /// unreachable.
    pub async fn delete_all_alerts(&self, email: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = format!("/api/user/alerts/delete-all?email={}", urlencode(email));
            let resp = http::send(gloo_net::http::Request::delete(&url)).await?;
            if !resp.ok() {
                return Err(http::server_error(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = email;
            Err(ApiError::Network)
        }
    }

    /// Submit the contact form via `POST /api/contact`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the backend rejects the request or is
    /// unreachable.
    pub async fn send_contact(&self, request: &ContactRequest) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp =
                http::send_json(gloo_net::http::Request::post("/api/contact"), request).await?;
            if !resp.ok() {
                return Err(http::server_error(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Network)
        }
    }
}

/// Percent-encode a query parameter value.
#[cfg(feature = "csr")]
fn urlencode(value: &str) -> String {
    js_sys::encode_uri_component(value).as_string().unwrap_or_default()
}
