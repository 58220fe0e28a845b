//! Shared client-side state and flow logic.
//!
//! DESIGN
//! ======
//! Everything here is plain Rust over the storage/API seams in `util` and
//! `net`, so the session and verification logic run natively under
//! `cargo test` without a browser.

pub mod session;
pub mod signup;
pub mod verify;
