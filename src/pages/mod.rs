//! Route components, one module per page.

pub mod contact;
pub mod home;
pub mod login;
pub mod manage;
pub mod signup;
pub mod success;
pub mod verify;
