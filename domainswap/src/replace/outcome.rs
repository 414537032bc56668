use serde::{Deserialize, Serialize};
use std::io;

/// What happened to a single candidate file.
///
/// Read problems are not errors: they are recorded here so that callers
/// can tell a file with no matches apart from one that could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was read; this many occurrences were found in its original content
    Counted(usize),
    /// The file was read but is not valid UTF-8
    SkippedUndecodable,
    /// The file could not be read at all
    SkippedUnreadable(io::ErrorKind),
}

impl FileOutcome {
    /// Occurrences found, zero for skipped files
    pub fn occurrences(&self) -> usize {
        match self {
            FileOutcome::Counted(n) => *n,
            _ => 0,
        }
    }

    pub fn is_skipped(&self) -> bool {
        !matches!(self, FileOutcome::Counted(_))
    }
}

/// Per-category counts of files that produced no record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipCounts {
    pub undecodable: usize,
    pub unreadable: usize,
}

impl SkipCounts {
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::SkippedUndecodable => self.undecodable += 1,
            FileOutcome::SkippedUnreadable(_) => self.unreadable += 1,
            FileOutcome::Counted(_) => {}
        }
    }

    pub fn total(&self) -> usize {
        self.undecodable + self.unreadable
    }
}
