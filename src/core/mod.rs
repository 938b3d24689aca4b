//! Core module for `GpaAdvisor`

pub mod config;
pub mod evaluator;
pub mod models;
pub mod report;
pub mod transcript;

/// Returns the current version of the `GpaAdvisor` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
