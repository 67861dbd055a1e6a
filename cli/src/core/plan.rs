//! # Dated Rename Planner
//!
//! File: cli/src/core/plan.rs
//!
//! ## Overview
//!
//! Decides, from a filename and today's date, where the existing entry should
//! end up (`rename_to`) and what the new dated copy is called (`copy_to`).
//! The planner is pure: it never reads the clock or the filesystem.
//!
//! ## Rules
//!
//! | Input                  | Date       | rename_to            | copy_to              |
//! |------------------------|------------|----------------------|----------------------|
//! | `name`                 | unknown    | `TODAY_a_name`       | `TODAY_b_name`       |
//! | `DATE_name`            | not today  | unchanged            | `TODAY_name`         |
//! | `DATE_name`            | today      | `TODAY_a_name`       | `TODAY_b_name`       |
//! | `DATE_x_name`          | not today  | unchanged            | `TODAY_name`         |
//! | `DATE_x_name`          | today      | unchanged            | `TODAY_{x+1}_name`   |
//!
//! A bare name carries no date, so today may already be in use for it; it
//! always starts a fresh `a`/`b` pair. Older dated entries are history and are
//! left where they are.
//!
use crate::core::error::DatedError;
use crate::core::filename::{parse, stamp, FilenameParts};
use chrono::NaiveDate;
use tracing::debug;

/// The two names produced for one input filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    /// Name the existing entry must end up under (may equal the input).
    pub rename_to: String,
    /// Name of the new dated copy.
    pub copy_to: String,
}

impl RenamePlan {
    /// True when the entry named `filename` can stay where it is.
    pub fn keeps_original(&self, filename: &str) -> bool {
        self.rename_to == filename
    }
}

/// Computes the `RenamePlan` for `filename` on day `today`.
///
/// # Errors
///
/// Returns `DatedError::OutOfRange` when today's entry is already at version `z`.
pub fn plan(filename: &str, today: NaiveDate) -> Result<RenamePlan, DatedError> {
    let now = stamp(today);
    let parts = parse(filename);
    debug!("Parsed {:?} as {:?}", filename, parts.style());

    let (rename_to, copy_to) = match parts {
        // No date known: give the original today's date and start a letter pair.
        FilenameParts::Bare { basename } => (
            format!("{now}_a_{basename}"),
            format!("{now}_b_{basename}"),
        ),
        FilenameParts::WithDate { date, basename }
        | FilenameParts::WithDateAndLetter { date, basename, .. }
            if date != today =>
        {
            (filename.to_string(), format!("{now}_{basename}"))
        }
        FilenameParts::WithDate { basename, .. } => (
            format!("{now}_a_{basename}"),
            format!("{now}_b_{basename}"),
        ),
        FilenameParts::WithDateAndLetter {
            letter, basename, ..
        } => {
            let next = next_letter(letter)?;
            (filename.to_string(), format!("{now}_{next}_{basename}"))
        }
    };

    debug!(
        "Planned {:?}: rename_to={:?}, copy_to={:?}",
        filename, rename_to, copy_to
    );
    Ok(RenamePlan { rename_to, copy_to })
}

/// Returns the version letter after `letter`.
///
/// # Errors
///
/// `DatedError::OutOfRange` for `z` (there is no wrap-around back to `a`) and
/// for anything outside `a`..=`z`.
pub fn next_letter(letter: char) -> Result<char, DatedError> {
    match letter {
        'a'..='y' => Ok((letter as u8 + 1) as char),
        _ => Err(DatedError::OutOfRange { letter }),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn assert_plan(filename: &str, rename_to: &str, copy_to: &str) {
        let planned = plan(filename, now()).unwrap();
        assert_eq!(
            planned,
            RenamePlan {
                rename_to: rename_to.into(),
                copy_to: copy_to.into(),
            },
            "plan({filename:?})"
        );
        assert_ne!(planned.rename_to, planned.copy_to);
    }

    #[test]
    fn test_plan_bare() {
        assert_plan("some_file.txt", "2025-01-01_a_some_file.txt", "2025-01-01_b_some_file.txt");
        assert_plan("fear.jpg", "2025-01-01_a_fear.jpg", "2025-01-01_b_fear.jpg");
        assert_plan("fine", "2025-01-01_a_fine", "2025-01-01_b_fine");
    }

    #[test]
    fn test_plan_with_date() {
        // Original date != today: no letter.
        assert_plan("1999-01-02_file.docx", "1999-01-02_file.docx", "2025-01-01_file.docx");
        assert_plan("2999-01-02_future.py", "2999-01-02_future.py", "2025-01-01_future.py");
        // Original date == today: add a letter, and don't trip up on "a".
        assert_plan("2025-01-01_a.jpg", "2025-01-01_a_a.jpg", "2025-01-01_b_a.jpg");
    }

    #[test]
    fn test_plan_with_date_and_letter() {
        // Original date != today: drop the letter.
        assert_plan("1999-01-02_c_file.docx", "1999-01-02_c_file.docx", "2025-01-01_file.docx");
        assert_plan("2999-01-02_b_future.py", "2999-01-02_b_future.py", "2025-01-01_future.py");
        // Original date == today: advance the letter.
        assert_plan("2025-01-01_a_img.jpg", "2025-01-01_a_img.jpg", "2025-01-01_b_img.jpg");
        assert_plan("2025-01-01_y_img.jpg", "2025-01-01_y_img.jpg", "2025-01-01_z_img.jpg");
    }

    #[test]
    fn test_plan_invalid_date_is_bare() {
        assert_plan(
            "2025-13-40_x.txt",
            "2025-01-01_a_2025-13-40_x.txt",
            "2025-01-01_b_2025-13-40_x.txt",
        );
    }

    #[test]
    fn test_plan_letter_overflow() {
        assert_eq!(
            plan("2025-01-01_z_img.jpg", now()),
            Err(DatedError::OutOfRange { letter: 'z' })
        );
        // A `z` from another day is history and needs no next letter.
        assert!(plan("2024-12-31_z_img.jpg", now()).is_ok());
    }

    #[test]
    fn test_keeps_original() {
        let planned = plan("1999-01-02_file.docx", now()).unwrap();
        assert!(planned.keeps_original("1999-01-02_file.docx"));
        let planned = plan("file.docx", now()).unwrap();
        assert!(!planned.keeps_original("file.docx"));
    }

    #[test]
    fn test_next_letter() {
        let letters: Vec<char> = ('a'..='y').map(|c| next_letter(c).unwrap()).collect();
        let expected: Vec<char> = ('b'..='z').collect();
        assert_eq!(letters, expected);

        assert_eq!(next_letter('z'), Err(DatedError::OutOfRange { letter: 'z' }));
        assert!(next_letter('A').is_err());
    }
}
