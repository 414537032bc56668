use std::fs;
use std::path::Path;
use tracing::{debug, trace};

use crate::config::{ReplacementSpec, RunMode};
use crate::errors::{SwapError, SwapResult};

mod outcome;
pub use outcome::{FileOutcome, SkipCounts};

/// Counts non-overlapping occurrences of `from`, scanning left to right.
///
/// An empty `from` matches at every char boundary, so `"abc"` yields 4.
pub fn count_occurrences(content: &str, from: &str) -> usize {
    content.matches(from).count()
}

/// Replaces every non-overlapping occurrence of `from` with `to`
pub fn replace_all(content: &str, spec: &ReplacementSpec) -> String {
    content.replace(&spec.from, &spec.to)
}

/// Reads a file as UTF-8, classifying failures instead of returning them
fn read_text(path: &Path) -> Result<String, FileOutcome> {
    let bytes = fs::read(path).map_err(|e| {
        debug!("Skipping unreadable file {}: {}", path.display(), e);
        FileOutcome::SkippedUnreadable(e.kind())
    })?;

    String::from_utf8(bytes).map_err(|e| {
        debug!("Skipping undecodable file {}: {}", path.display(), e);
        FileOutcome::SkippedUndecodable
    })
}

/// Counts occurrences in one file and, in apply mode, rewrites it in place.
///
/// The count always reflects the original content. Nothing is written when
/// the count is zero. The write is a plain overwrite with no backup and no
/// temporary file; a failure is returned and should end the run.
pub fn replace_in_file(path: &Path, spec: &ReplacementSpec, mode: RunMode) -> SwapResult<FileOutcome> {
    let content = match read_text(path) {
        Ok(content) => content,
        Err(outcome) => return Ok(outcome),
    };

    let count = count_occurrences(&content, &spec.from);
    if count == 0 {
        trace!("No occurrences in {}", path.display());
        return Ok(FileOutcome::Counted(0));
    }

    if mode.is_apply() {
        let updated = replace_all(&content, spec);
        fs::write(path, updated).map_err(|e| SwapError::write_failed(path, e))?;
        debug!("Rewrote {} ({} occurrences)", path.display(), count);
    }

    Ok(FileOutcome::Counted(count))
}

/// Returns the original and replaced content of a file, or `None` when the
/// file is skipped or has no occurrences. Never writes.
pub fn preview_file(path: &Path, spec: &ReplacementSpec) -> Option<(String, String)> {
    let content = read_text(path).ok()?;
    if count_occurrences(&content, &spec.from) == 0 {
        return None;
    }
    let updated = replace_all(&content, spec);
    Some((content, updated))
}
