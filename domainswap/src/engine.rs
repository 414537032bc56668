use tracing::{debug, info, warn};

use crate::config::SwapConfig;
use crate::errors::SwapResult;
use crate::replace::replace_in_file;
use crate::results::SwapSummary;
use crate::walker::FileEnumerator;

/// Runs a swap over every candidate file under the configured root.
///
/// Files are handled one at a time in traversal order. Unreadable and
/// undecodable files are counted as skipped; the first write failure
/// aborts the run, leaving files already rewritten as they are.
pub fn run(config: &SwapConfig) -> SwapResult<SwapSummary> {
    let spec = &config.replacement;
    info!(
        "Starting {:?} run: '{}' -> '{}' under {}",
        config.mode,
        spec.from,
        spec.to,
        config.root_path.display()
    );

    if spec.from.is_empty() {
        warn!("Source string is empty; it matches at every character boundary");
    } else if spec.from == spec.to {
        warn!("Source and target strings are identical; files will be rewritten unchanged");
    }

    let enumerator = FileEnumerator::from_config(config)?;
    debug!(
        "Matching {} file patterns, pruning {:?}",
        config.file_patterns.len(),
        config.skip_dirs
    );

    let mut summary = SwapSummary::new(config.mode);
    for path in enumerator.candidates() {
        let outcome = replace_in_file(&path, spec, config.mode)?;
        summary.record(&path, outcome);
    }

    info!(
        "Run complete. Found {} occurrences in {} of {} files ({} skipped)",
        summary.total_occurrences,
        summary.files_with_matches(),
        summary.files_scanned,
        summary.skipped.total()
    );

    Ok(summary)
}
