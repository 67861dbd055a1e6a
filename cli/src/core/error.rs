//! # Dated Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout `dated`. The naming core
//! (`core::filename`, `core::plan`) returns `DatedError` directly, while the
//! filesystem and command layers work with `anyhow::Result` so they can attach
//! context to raw I/O failures.
//!
//! ## Architecture
//!
//! - `DatedError`: a `thiserror` enum with one variant per failure kind the
//!   tool reports (missing input, occupied destination, unsupported input,
//!   version letter overflow).
//! - `Result<T>`: alias for `anyhow::Result<T>`.
//!
//! A `DatedError` wrapped in an `anyhow::Error` can be recovered with
//! `downcast_ref`:
//!
//! ```rust,ignore
//! match make_dated(path, today) {
//!     Err(e) if matches!(e.downcast_ref::<DatedError>(), Some(DatedError::AlreadyExists { .. })) => {
//!         eprintln!("Pick another day.");
//!     }
//!     other => other?,
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the `dated` tool.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatedError {
    #[error("{} doesn't exist", path.display())]
    NotFound { path: PathBuf },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{} already exists", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("No version letter after '{letter}'; rename the file by hand to start a new sequence")]
    OutOfRange { letter: char },
}

/// Type alias for Result using anyhow::Error for context-rich propagation.
pub type Result<T> = anyhow::Result<T>;
