//! # Dated Filesystem Checks and Moves
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Small wrappers around `std::fs` used before and during a dating run:
//!
//! - **`entry_kind`**: classifies a path as a file or a directory, following
//!   symlinks. Missing paths are `DatedError::NotFound`; sockets, FIFOs,
//!   devices and dangling links are `DatedError::InvalidInput`.
//! - **`ensure_vacant`**: fails with `DatedError::AlreadyExists` if anything,
//!   including a dangling symlink, already sits at a path.
//! - **`move_entry`**: renames a file or directory after checking the
//!   destination is vacant. `std::fs::rename` would silently replace a file
//!   on Unix, so the check is required.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::common::fs::io;
//!
//! let kind = io::entry_kind(Path::new("notes.txt"))?;
//! io::move_entry(Path::new("notes.txt"), Path::new("2025-01-01_a_notes.txt"))?;
//! ```
//!
use crate::core::error::{DatedError, Result};
use anyhow::{bail, Context};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// What kind of filesystem entry a path names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Classifies `path` as a regular file or a directory.
///
/// Symlinks are followed, so a link to a directory counts as a directory.
///
/// # Arguments
///
/// * `path` - The input entry to inspect.
///
/// # Returns
///
/// * `Result<EntryKind>` - `File` or `Directory`.
///
/// # Errors
///
/// - `DatedError::NotFound` if nothing exists at `path`.
/// - `DatedError::InvalidInput` if `path` is a dangling symlink or neither a
///   file nor a directory (FIFO, socket, device).
/// - Any other I/O error while reading metadata, with context.
pub fn entry_kind(path: &Path) -> Result<EntryKind> {
    // Nothing at all (not even a dangling link) means the input is missing.
    if path.symlink_metadata().is_err() {
        bail!(DatedError::NotFound {
            path: path.to_path_buf(),
        });
    }

    // Follow links to find out what the entry really is.
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        // A link whose target is gone.
        Err(e) if e.kind() == ErrorKind::NotFound => {
            bail!(DatedError::InvalidInput(format!(
                "{} is a dangling symlink",
                path.display()
            )));
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read metadata of {:?}", path));
        }
    };

    let kind = if metadata.is_file() {
        EntryKind::File
    } else if metadata.is_dir() {
        EntryKind::Directory
    } else {
        bail!(DatedError::InvalidInput(format!(
            "{} is neither a file nor a directory",
            path.display()
        )));
    };
    debug!("{:?} is a {:?}", path, kind);
    Ok(kind)
}

/// Ensures nothing exists at `path`.
///
/// Uses `symlink_metadata` so a dangling symlink still counts as occupied.
///
/// # Arguments
///
/// * `path` - A destination about to be created.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` if the name is free.
///
/// # Errors
///
/// `DatedError::AlreadyExists` if `path` is taken.
pub fn ensure_vacant(path: &Path) -> Result<()> {
    if path.symlink_metadata().is_ok() {
        bail!(DatedError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Moves (renames) the entry at `from` to `to`.
///
/// # Arguments
///
/// * `from` - The existing file or directory.
/// * `to` - Its new path; must not exist yet.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` once the entry lives at `to`.
///
/// # Errors
///
/// - `DatedError::NotFound` if `from` has vanished.
/// - `DatedError::AlreadyExists` if `to` is taken.
/// - Any I/O error from the rename itself, with context.
pub fn move_entry(from: &Path, to: &Path) -> Result<()> {
    // The source may have gone away since it was classified.
    if from.symlink_metadata().is_err() {
        bail!(DatedError::NotFound {
            path: from.to_path_buf(),
        });
    }
    // `fs::rename` replaces files on Unix, so check first.
    ensure_vacant(to)?;

    fs::rename(from, to).with_context(|| format!("Failed to move {:?} to {:?}", from, to))?;
    info!("Moved {:?} to {:?}", from, to);
    Ok(())
}
