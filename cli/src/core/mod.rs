//! # Dated Core
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! The pure naming core of `dated` plus the shared error types. Nothing in
//! here touches the filesystem or reads the clock; "today" is always passed in.
//!
//! ## Architecture
//!
//! - `error`: `DatedError` and the `Result` alias.
//! - `filename`: classifies a filename into `FilenameParts`.
//! - `plan`: turns a filename and today's date into a `RenamePlan`.
//!
//! ```rust,ignore
//! use crate::core::plan::plan;
//!
//! let planned = plan("report.txt", today)?;
//! // planned.rename_to == "2025-01-01_a_report.txt"
//! // planned.copy_to   == "2025-01-01_b_report.txt"
//! ```
//!
pub mod error;
pub mod filename;
pub mod plan;
