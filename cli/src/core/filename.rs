//! # Dated Filename Parser
//!
//! File: cli/src/core/filename.rs
//!
//! ## Overview
//!
//! Splits a filename into the parts of the dating convention. Three shapes are
//! recognised, most specific first:
//!
//! 1. `2025-01-01_b_report.txt`: date stamp, version letter, basename.
//! 2. `2025-01-01_report.txt`: date stamp, basename.
//! 3. `report.txt`: anything else, the whole name is the basename.
//!
//! Parsing is total. A prefix that looks like a date but is not a real calendar
//! day (`2025-13-40_x`) simply falls through to the next shape, and joining the
//! parts back together always reproduces the input.
//!
//! ## Examples
//!
//! ```rust,ignore
//! let parts = FilenameParts::parse("2025-01-01_a_img.jpg");
//! assert_eq!(parts.style(), FilenameStyle::WithDateAndLetter);
//! assert_eq!(parts.letter(), Some('a'));
//! assert_eq!(parts.basename(), "img.jpg");
//! assert_eq!(parts.to_string(), "2025-01-01_a_img.jpg");
//! ```
//!
use chrono::NaiveDate;
use std::fmt;

/// Width of a `YYYY-MM-DD` stamp.
const STAMP_LEN: usize = 10;
/// Separator between stamp, letter and basename.
const SEPARATOR: char = '_';

/// Which of the naming conventions a filename follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilenameStyle {
    /// E.g. `something.txt`.
    Bare,
    /// E.g. `2025-01-01_something.txt`.
    WithDate,
    /// E.g. `2025-01-01_b_something.txt` (version `b` from that day).
    WithDateAndLetter,
}

/// A filename decomposed according to its `FilenameStyle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilenameParts {
    Bare {
        basename: String,
    },
    WithDate {
        date: NaiveDate,
        basename: String,
    },
    WithDateAndLetter {
        date: NaiveDate,
        letter: char,
        basename: String,
    },
}

#[allow(dead_code)] // Accessors are part of the parser's API; the planner matches on variants directly.
impl FilenameParts {
    /// Classifies `filename` and extracts its parts. Never fails; anything that
    /// is not a dated name comes back as `Bare` with the whole name as basename.
    pub fn parse(filename: &str) -> Self {
        let Some((date, rest)) = split_stamp(filename) else {
            return Self::Bare {
                basename: filename.to_string(),
            };
        };

        match split_letter(rest) {
            Some((letter, basename)) => Self::WithDateAndLetter {
                date,
                letter,
                basename: basename.to_string(),
            },
            None => Self::WithDate {
                date,
                basename: rest.to_string(),
            },
        }
    }

    pub fn style(&self) -> FilenameStyle {
        match self {
            Self::Bare { .. } => FilenameStyle::Bare,
            Self::WithDate { .. } => FilenameStyle::WithDate,
            Self::WithDateAndLetter { .. } => FilenameStyle::WithDateAndLetter,
        }
    }

    /// The embedded date, present unless the name is `Bare`.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Bare { .. } => None,
            Self::WithDate { date, .. } | Self::WithDateAndLetter { date, .. } => Some(*date),
        }
    }

    /// The version letter, present only for `WithDateAndLetter`.
    pub fn letter(&self) -> Option<char> {
        match self {
            Self::WithDateAndLetter { letter, .. } => Some(*letter),
            _ => None,
        }
    }

    /// The filename with any date/letter prefix removed.
    pub fn basename(&self) -> &str {
        match self {
            Self::Bare { basename }
            | Self::WithDate { basename, .. }
            | Self::WithDateAndLetter { basename, .. } => basename,
        }
    }

    /// Joins the parts back into the filename they came from.
    pub fn to_filename(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FilenameParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bare { basename } => f.write_str(basename),
            Self::WithDate { date, basename } => {
                write!(f, "{}{SEPARATOR}{basename}", stamp(*date))
            }
            Self::WithDateAndLetter {
                date,
                letter,
                basename,
            } => write!(f, "{}{SEPARATOR}{letter}{SEPARATOR}{basename}", stamp(*date)),
        }
    }
}

/// Shorthand for `FilenameParts::parse`.
pub fn parse(filename: &str) -> FilenameParts {
    FilenameParts::parse(filename)
}

/// Formats `date` as a `YYYY-MM-DD` stamp.
pub fn stamp(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Splits a leading `YYYY-MM-DD_` off `filename`, returning the date and the
/// remainder. The stamp must be fixed-width digits and a real calendar day.
fn split_stamp(filename: &str) -> Option<(NaiveDate, &str)> {
    let token = filename.get(..STAMP_LEN)?;
    let rest = filename[STAMP_LEN..].strip_prefix(SEPARATOR)?;

    let well_formed = token.bytes().enumerate().all(|(i, b)| match i {
        4 | 7 => b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !well_formed {
        return None;
    }

    let year: i32 = token[0..4].parse().ok()?;
    let month: u32 = token[5..7].parse().ok()?;
    let day: u32 = token[8..10].parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some((date, rest))
}

/// Splits a leading `x_` (one lowercase ASCII letter) off the text after a stamp.
fn split_letter(rest: &str) -> Option<(char, &str)> {
    let mut chars = rest.chars();
    let letter = chars.next().filter(char::is_ascii_lowercase)?;
    let basename = chars.as_str().strip_prefix(SEPARATOR)?;
    Some((letter, basename))
}
