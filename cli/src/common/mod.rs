//! # Dated Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utility modules used by the command layer. Keeps filesystem plumbing
//! apart from the naming logic in `core::` and the command flow in
//! `commands::`.
//!

/// Utilities for filesystem operations (checks, moves, copies).
pub mod fs;
