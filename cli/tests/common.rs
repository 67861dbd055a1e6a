//! # Dated CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` to pull these in.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;

/// # Get Dated Command (`dated_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `dated` binary.
///
/// ## Panics
/// Panics if the `dated` binary cannot be found via `Command::cargo_bin`.
pub fn dated_cmd() -> Command {
    Command::cargo_bin("dated").expect("Failed to find dated binary for testing")
}

/// Today's `YYYY-MM-DD` stamp as the binary will compute it.
///
/// The binary reads the clock on its own, so a test that straddles local
/// midnight can see a different date here than the binary did. Tests that
/// only check failures or the shape of stdout do not depend on this.
pub fn today_stamp() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
