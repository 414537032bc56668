use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::RunMode;
use crate::replace::{FileOutcome, SkipCounts};

/// Trailer printed after a dry run
pub const DRY_RUN_TRAILER: &str = "Dry-run complete. Rerun with --apply to modify files.";

/// A file that contained at least one occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub occurrences: usize,
}

/// Outcome of a whole run, in the order files were visited
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwapSummary {
    pub mode: RunMode,
    pub file_records: Vec<FileRecord>,
    pub total_occurrences: usize,
    pub files_scanned: usize,
    pub skipped: SkipCounts,
}

impl SwapSummary {
    pub fn new(mode: RunMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Folds one file's outcome into the summary. Only non-zero counts become records.
    pub fn record(&mut self, path: &Path, outcome: FileOutcome) {
        self.files_scanned += 1;
        self.skipped.record(&outcome);

        let occurrences = outcome.occurrences();
        if occurrences > 0 {
            self.total_occurrences += occurrences;
            self.file_records.push(FileRecord {
                path: display_path(path),
                occurrences,
            });
        }
    }

    pub fn files_with_matches(&self) -> usize {
        self.file_records.len()
    }

    /// The plain-text report: one line per file, the total, then the dry-run trailer
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .file_records
            .iter()
            .map(|r| format!("{} occurrence(s) in {}", r.occurrences, r.path.display()))
            .collect();
        lines.push(format!("Total replacements found: {}", self.total_occurrences));
        if !self.mode.is_apply() {
            lines.push(DRY_RUN_TRAILER.to_string());
        }
        lines
    }
}

/// Drops a leading `./` so paths under the default root read as `a.md`
fn display_path(path: &Path) -> PathBuf {
    path.strip_prefix(".").unwrap_or(path).to_path_buf()
}
