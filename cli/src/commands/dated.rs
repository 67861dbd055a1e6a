//! # Dated Command
//!
//! File: cli/src/commands/dated.rs
//!
//! ## Overview
//!
//! Applies the dating convention to one file or directory on disk:
//!
//! 1. Classify the input (file or directory) and fail early if it is missing
//!    or something else.
//! 2. Ask the planner for `rename_to` / `copy_to` using the injected date.
//! 3. Move the original to `rename_to` if its name changes.
//! 4. Copy whatever now sits at `rename_to` to `copy_to`.
//!
//! Each step is announced on stderr as it runs, and the path of the new copy
//! is printed on stdout at the end.
//!
//! There is no rollback. If the move succeeds and the copy fails, the
//! original stays at `rename_to` and the old path no longer exists, so running
//! `dated` again on the old path fails with `NotFound`. Re-run it on the
//! `rename_to` path instead, after removing any partial copy left at `copy_to`.
//!
//! ## Examples
//!
//! ```bash
//! # On 2025-01-01:
//! dated notes.txt
//! # move notes.txt -> 2025-01-01_a_notes.txt
//! # copy 2025-01-01_a_notes.txt -> 2025-01-01_b_notes.txt
//! # 2025-01-01_b_notes.txt
//! ```
//!
use crate::common::fs::copy;
use crate::common::fs::io::{self, EntryKind};
use crate::core::error::{DatedError, Result};
use crate::core::plan::plan;
use chrono::NaiveDate;
use clap::Parser;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// # Dated Arguments (`DatedArgs`)
///
/// The single positional input of the tool.
#[derive(Parser, Debug)]
pub struct DatedArgs {
    /// Input file or directory to date.
    #[arg(required = true)]
    pub path: PathBuf,
}

/// One filesystem step performed while dating an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Rename the original entry.
    Move { from: PathBuf, to: PathBuf },
    /// Copy a regular file, keeping its metadata.
    CopyFile { from: PathBuf, to: PathBuf },
    /// Copy a directory tree.
    CopyTree { from: PathBuf, to: PathBuf },
}

impl Operation {
    fn copy_for(kind: EntryKind, from: PathBuf, to: PathBuf) -> Self {
        match kind {
            EntryKind::File => Self::CopyFile { from, to },
            EntryKind::Directory => Self::CopyTree { from, to },
        }
    }

    fn perform(&self) -> Result<()> {
        match self {
            Self::Move { from, to } => io::move_entry(from, to),
            Self::CopyFile { from, to } => copy::copy_file_preserving(from, to),
            Self::CopyTree { from, to } => copy::copy_directory_recursive(from, to),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (verb, from, to) = match self {
            Self::Move { from, to } => ("move", from, to),
            Self::CopyFile { from, to } => ("copy", from, to),
            Self::CopyTree { from, to } => ("copytree", from, to),
        };
        write!(f, "{verb} {} -> {}", from.display(), to.display())
    }
}

/// What `make_dated` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Operations that completed, in order.
    pub operations: Vec<Operation>,
    /// Where the original entry lives now.
    pub original: PathBuf,
    /// The new dated copy.
    pub copy: PathBuf,
}

/// Moves and copies `inpath` as needed to apply the dating convention for `today`.
///
/// Destinations are siblings of `inpath`. Every check that can be made up
/// front (kind, file name, version letter, copy destination) runs before the
/// first change on disk.
///
/// # Arguments
///
/// * `inpath` - The file or directory to date.
/// * `today` - The date to stamp new names with, read once by the caller.
///
/// # Returns
///
/// * `Result<Outcome>` - The operations performed and the final paths.
///
/// # Errors
///
/// - `DatedError::NotFound` if `inpath` does not exist.
/// - `DatedError::InvalidInput` if it is neither a file nor a directory, or has
///   no UTF-8 file name.
/// - `DatedError::OutOfRange` if today's version letter is already `z`.
/// - `DatedError::AlreadyExists` if a destination is occupied.
/// - Any I/O error raised while moving or copying.
pub fn make_dated(inpath: &Path, today: NaiveDate) -> Result<Outcome> {
    // --- Validate the input ---
    let kind = io::entry_kind(inpath)?;
    let filename = inpath
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            DatedError::InvalidInput(format!("{} has no usable file name", inpath.display()))
        })?;

    // --- Plan the destination names ---
    let planned = plan(filename, today)?;
    let parent = inpath.parent().unwrap_or_else(|| Path::new(""));
    let original = parent.join(&planned.rename_to);
    let copy = parent.join(&planned.copy_to);

    // Refuse before moving anything.
    io::ensure_vacant(&copy)?;

    let mut steps = Vec::with_capacity(2);
    if !planned.keeps_original(filename) {
        steps.push(Operation::Move {
            from: inpath.to_path_buf(),
            to: original.clone(),
        });
    }
    steps.push(Operation::copy_for(kind, original.clone(), copy.clone()));
    debug!("Planned {} operation(s) for {:?}", steps.len(), inpath);

    // --- Perform, announcing each step first ---
    let mut operations = Vec::with_capacity(steps.len());
    for step in steps {
        eprintln!("{step}");
        step.perform()?;
        operations.push(step);
    }

    info!("Dated {:?} as {:?}", inpath, copy);
    Ok(Outcome {
        operations,
        original,
        copy,
    })
}

/// # Handle Dated Command (`handle_dated`)
///
/// Runs `make_dated` for the parsed arguments and prints the new copy's path
/// on stdout.
///
/// ## Arguments
///
/// * `args`: The parsed `DatedArgs` holding the input path.
/// * `today`: The date read from the clock in `main`.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` on success, or the first error from `make_dated`.
pub fn handle_dated(args: DatedArgs, today: NaiveDate) -> Result<()> {
    let outcome = make_dated(&args.path, today)?;
    debug!(
        "Original now at {:?} after {} operation(s)",
        outcome.original,
        outcome.operations.len()
    );
    println!("{}", outcome.copy.display());
    Ok(())
}
