//! Shared library for `GpaAdvisor`
//! Contains the academic evaluator, transcript parsing, reporting, and configuration

pub mod core;
pub mod logger;

pub use crate::core::config;
