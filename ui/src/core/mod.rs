//! Platform-agnostic helpers shared by tasks and views.

pub mod config;
pub mod format;
pub mod platform;
pub mod timing;
