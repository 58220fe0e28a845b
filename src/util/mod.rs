//! Small shared utilities: storage abstraction and scheduled tasks.

pub mod schedule;
pub mod storage;
