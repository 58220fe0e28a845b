//! # powhunter
//!
//! Client-side web application for the Pow Hunter powder-day alert service:
//! magic-link sign-in, signup with staged alert creation, and subscription
//! management over the Pow Hunter REST API.
//!
//! The interesting logic lives in `state` (session store, staged signup,
//! verification flow) and runs natively under `cargo test`; everything
//! browser-specific sits behind the `csr` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
