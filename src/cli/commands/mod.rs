//! CLI command handlers for `GpaAdvisor`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod evaluate;
pub mod report;
