//! # Dated Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Command handlers invoked from `main.rs`. The tool has a single command, so
//! its arguments are flattened straight into the top-level CLI.
//!
//! - `dated`: applies the dating convention to one file or directory.
//!

/// Arguments, filesystem flow and handler for `dated <PATH>`.
pub mod dated;
