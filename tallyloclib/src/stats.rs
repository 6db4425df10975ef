//! Line count data structures.
//!
//! - [`Tally`]: counts for a single file
//! - [`Summary`]: counts for a whole scan, plus how many files were seen
//!
//! Every line lands in exactly one of blank, comment or code, so
//! `total == blank + comment + code` holds for both types.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::classify::LineKind;

/// Line counts for one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// All lines in the file
    pub total: u64,
    /// Lines matching a blank marker
    pub blank: u64,
    /// Lines starting with a comment marker
    pub comment: u64,
    /// Everything else
    pub code: u64,
}

impl Tally {
    /// Create a new Tally with all zeros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one classified line.
    pub fn record(&mut self, kind: LineKind) {
        self.total += 1;
        match kind {
            LineKind::Blank => self.blank += 1,
            LineKind::Comment => self.comment += 1,
            LineKind::Code => self.code += 1,
        }
    }

    /// Whether the categories add up to the total.
    pub fn is_consistent(&self) -> bool {
        self.total == self.blank + self.comment + self.code
    }
}

impl Add for Tally {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            total: self.total + other.total,
            blank: self.blank + other.blank,
            comment: self.comment + other.comment,
            code: self.code + other.code,
        }
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, other: Self) {
        self.total += other.total;
        self.blank += other.blank;
        self.comment += other.comment;
        self.code += other.code;
    }
}

impl Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), Add::add)
    }
}

/// Totals across every file dispatched during a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Files matched and dispatched, counted before they are read
    pub file_count: u64,
    /// Matched files that could not be read; they contribute no lines
    pub failed: u64,
    /// Sum of all file tallies
    pub lines: Tally,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one file's tally. Order of merges does not affect the result.
    pub fn merge(&mut self, tally: Tally) {
        self.lines += tally;
    }

    pub fn total(&self) -> u64 {
        self.lines.total
    }

    pub fn blank(&self) -> u64 {
        self.lines.blank
    }

    pub fn comment(&self) -> u64 {
        self.lines.comment
    }

    pub fn code(&self) -> u64 {
        self.lines.code
    }
}
