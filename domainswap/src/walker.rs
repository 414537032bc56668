use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::config::SwapConfig;
use crate::errors::SwapResult;
use crate::filters::{is_skipped_dir, FilePatternSet};

/// Lazily enumerates candidate files under a root directory.
///
/// Traversal is depth-first and sees every file: gitignore rules, hidden
/// file filtering and parent ignore files are all switched off. Directories
/// named in the skip set are pruned, so their subtrees are never read.
#[derive(Debug, Clone)]
pub struct FileEnumerator {
    root: PathBuf,
    patterns: FilePatternSet,
    skip_dirs: Vec<String>,
    sort_paths: bool,
}

impl FileEnumerator {
    pub fn new(root: impl Into<PathBuf>, patterns: FilePatternSet, skip_dirs: Vec<String>) -> Self {
        Self {
            root: root.into(),
            patterns,
            skip_dirs,
            sort_paths: false,
        }
    }

    /// Builds an enumerator from a run configuration, compiling its globs
    pub fn from_config(config: &SwapConfig) -> SwapResult<Self> {
        let patterns = FilePatternSet::new(config.file_patterns.as_slice(), config.case_insensitive)?;
        Ok(Self::new(&config.root_path, patterns, config.skip_dirs.clone())
            .sorted(config.sort_paths))
    }

    /// Visit directory entries in file-name order instead of filesystem order
    pub fn sorted(mut self, sort_paths: bool) -> Self {
        self.sort_paths = sort_paths;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the candidate files. Each call starts a fresh traversal.
    pub fn candidates(&self) -> impl Iterator<Item = PathBuf> + '_ {
        let mut builder = WalkBuilder::new(&self.root);
        builder.standard_filters(false).follow_links(false);

        let skip_dirs = self.skip_dirs.clone();
        builder.filter_entry(move |entry| !is_pruned(entry, &skip_dirs));

        if self.sort_paths {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }

        builder
            .build()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(is_file_like)
            .filter(move |entry| {
                let eligible = self.patterns.matches(entry.path());
                if !eligible {
                    trace!("Not eligible: {}", entry.path().display());
                }
                eligible
            })
            .map(DirEntry::into_path)
    }
}

/// The root is never pruned, only directories found beneath it
fn is_pruned(entry: &DirEntry, skip_dirs: &[String]) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
        return false;
    }
    let pruned = entry
        .file_name()
        .to_str()
        .is_some_and(|name| is_skipped_dir(name, skip_dirs));
    if pruned {
        debug!("Pruning directory: {}", entry.path().display());
    }
    pruned
}

/// Regular files, plus symlinks that resolve to one
fn is_file_like(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => entry.path().is_file(),
        _ => false,
    }
}
