//! Shared presentational components.

pub mod footer;
pub mod nav_bar;
