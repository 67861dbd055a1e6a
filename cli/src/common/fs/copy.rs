//! # Dated Filesystem Copy Operations
//!
//! File: cli/src/common/fs/copy.rs
//!
//! ## Overview
//!
//! Produces the new dated copy of an entry. Neither function ever overwrites:
//! both fail with `DatedError::AlreadyExists` when the target is taken.
//!
//! ## Architecture
//!
//! - **`copy_file_preserving`**: `std::fs::copy` (contents and permissions),
//!   followed by a best-effort copy of the access and modification times. A
//!   failure to set the times is logged as a warning, the copy itself stands.
//! - **`copy_directory_recursive`**: delegates the tree walk to `fs_extra`,
//!   configured with `copy_inside` so the target directory *becomes* the copy
//!   instead of receiving the source as a child.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::common::fs::copy;
//!
//! copy::copy_file_preserving(Path::new("2025-01-01_a_notes.txt"), Path::new("2025-01-01_b_notes.txt"))?;
//! copy::copy_directory_recursive(Path::new("2024-06-01_photos"), Path::new("2025-01-01_photos"))?;
//! ```
//!
use crate::common::fs::io::ensure_vacant;
use crate::core::error::Result;
use anyhow::Context;
use std::fs::{self, File, FileTimes};
use std::path::Path;
use tracing::{debug, info, warn};

/// Copies the file at `source` to `target`, keeping permissions and timestamps.
///
/// # Arguments
///
/// * `source` - The existing regular file.
/// * `target` - Path of the new copy; must not exist yet.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` once the contents are in place. Timestamps are
///   best effort and only logged on failure.
///
/// # Errors
///
/// Returns an `Err` if:
/// - `target` already exists (`DatedError::AlreadyExists`).
/// - The contents cannot be copied (I/O error, with context).
pub fn copy_file_preserving(source: &Path, target: &Path) -> Result<()> {
    // `fs::copy` truncates an existing target, so refuse first.
    ensure_vacant(target)?;

    // Contents and permission bits.
    let bytes = fs::copy(source, target)
        .with_context(|| format!("Failed to copy file {:?} to {:?}", source, target))?;
    debug!("Copied {} bytes from {:?} to {:?}", bytes, source, target);

    // Access and modification times.
    if let Err(e) = copy_file_times(source, target) {
        warn!("Could not preserve timestamps on {:?}: {}", target, e);
    }

    info!("Copied file {:?} to {:?}", source, target);
    Ok(())
}

/// Copies access/modification times from `source` onto `target`.
fn copy_file_times(source: &Path, target: &Path) -> std::io::Result<()> {
    let metadata = fs::metadata(source)?;
    let times = FileTimes::new()
        .set_accessed(metadata.accessed()?)
        .set_modified(metadata.modified()?);
    // Read-only handle: permissions were already copied and may forbid writing.
    File::open(target)?.set_times(times)
}

/// Copies the directory `source` and everything below it to a new directory
/// at `target`.
///
/// # Arguments
///
/// * `source` - The existing directory to copy.
/// * `target` - Path of the new directory; must not exist yet. Its parent must.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` once the whole tree has been copied.
///
/// # Errors
///
/// Returns an `Err` if:
/// - `target` already exists (`DatedError::AlreadyExists`).
/// - `fs_extra` fails anywhere in the tree (wrapped with context).
pub fn copy_directory_recursive(source: &Path, target: &Path) -> Result<()> {
    ensure_vacant(target)?;
    info!("Starting recursive copy from {:?} to {:?}", source, target);

    let mut options = fs_extra::dir::CopyOptions::new();
    // Create `target` itself and copy the contents of `source` into it.
    options.copy_inside = true;
    options.overwrite = false;
    options.skip_exist = false;

    // Map the `fs_extra` error into the application's `Result` with context.
    let bytes = fs_extra::dir::copy(source, target, &options).map_err(|e| {
        anyhow::anyhow!(e).context(format!("Failed to copy dir {:?} to {:?}", source, target))
    })?;

    info!(
        "Finished recursive copy from {:?} to {:?} ({} bytes)",
        source, target, bytes
    );
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::DatedError;
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    #[test]
    fn test_copy_file_preserving_contents_and_mtime() -> Result<()> {
        let base_dir = tempdir()?;
        let source = base_dir.path().join("source.txt");
        let target = base_dir.path().join("target.txt");
        fs::write(&source, "dated")?;

        let an_hour_ago = SystemTime::now() - Duration::from_secs(3600);
        File::options()
            .write(true)
            .open(&source)?
            .set_modified(an_hour_ago)?;

        copy_file_preserving(&source, &target)?;

        assert_eq!(fs::read_to_string(&target)?, "dated");
        assert_eq!(
            fs::metadata(&target)?.modified()?,
            fs::metadata(&source)?.modified()?
        );
        Ok(())
    }

    #[test]
    fn test_copy_file_refuses_to_overwrite() -> Result<()> {
        let base_dir = tempdir()?;
        let source = base_dir.path().join("source.txt");
        let target = base_dir.path().join("target.txt");
        fs::write(&source, "new")?;
        fs::write(&target, "old")?;

        let err = copy_file_preserving(&source, &target).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DatedError>(),
            Some(DatedError::AlreadyExists { .. })
        ));
        assert_eq!(fs::read_to_string(&target)?, "old");
        Ok(())
    }

    #[test]
    fn test_copy_directory_recursive() -> Result<()> {
        let base_dir = tempdir()?;
        let source = base_dir.path().join("source");
        let target = base_dir.path().join("target");
        fs::create_dir_all(source.join("nested/deeper"))?;
        fs::write(source.join("a.txt"), "a")?;
        fs::write(source.join("nested/b.txt"), "b")?;
        fs::create_dir(source.join("empty"))?;

        copy_directory_recursive(&source, &target)?;

        assert_eq!(fs::read_to_string(target.join("a.txt"))?, "a");
        assert_eq!(fs::read_to_string(target.join("nested/b.txt"))?, "b");
        assert!(target.join("nested/deeper").is_dir());
        assert!(target.join("empty").is_dir());
        // Not nested one level down as `target/source`.
        assert!(!target.join("source").exists());
        // Source untouched.
        assert!(source.join("a.txt").is_file());
        Ok(())
    }

    #[test]
    fn test_copy_directory_refuses_existing_target() -> Result<()> {
        let base_dir = tempdir()?;
        let source = base_dir.path().join("source");
        let target = base_dir.path().join("target");
        fs::create_dir(&source)?;
        fs::create_dir(&target)?;

        let err = copy_directory_recursive(&source, &target).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DatedError>(),
            Some(&DatedError::AlreadyExists { path: target })
        );
        Ok(())
    }
}
