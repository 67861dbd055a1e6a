//! # Dated Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! The side-effect layer of `dated`: everything that inspects or changes the
//! filesystem lives here, so the naming core stays pure.
//!
//! ## Architecture
//!
//! - **`io`**: entry classification (`entry_kind`), vacancy checks
//!   (`ensure_vacant`) and moves (`move_entry`).
//! - **`copy`**: metadata-preserving file copy (`copy_file_preserving`) and
//!   recursive directory copy via `fs_extra` (`copy_directory_recursive`).
//!
//! Callers import the specific submodule, e.g. `crate::common::fs::io::move_entry`.
//!

/// Copying files and directory trees without overwriting.
pub mod copy;
/// Existence/kind checks and moves.
pub mod io;
