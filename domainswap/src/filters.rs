use glob::{MatchOptions, Pattern};
use std::path::Path;

use crate::errors::{SwapError, SwapResult};

/// Compiled set of filename globs deciding which files are eligible.
///
/// Patterns are matched against the file name only, never the full path,
/// so `*.md` selects `docs/guide/intro.md` at any depth.
#[derive(Debug, Clone)]
pub struct FilePatternSet {
    patterns: Vec<Pattern>,
    options: MatchOptions,
}

impl FilePatternSet {
    /// Compiles the given globs, failing on the first malformed one
    pub fn new<S: AsRef<str>>(patterns: &[S], case_insensitive: bool) -> SwapResult<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                let p = p.as_ref();
                Pattern::new(p).map_err(|e| SwapError::invalid_glob(p, e.msg))
            })
            .collect::<SwapResult<Vec<_>>>()?;

        Ok(Self {
            patterns,
            options: MatchOptions {
                case_sensitive: !case_insensitive,
                require_literal_separator: false,
                require_literal_leading_dot: false,
            },
        })
    }

    /// Returns true if the file name of `path` matches at least one pattern
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.patterns
            .iter()
            .any(|p| p.matches_with(name, self.options))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Checks if a directory name is one whose subtree must be pruned
pub fn is_skipped_dir(name: &str, skip_dirs: &[String]) -> bool {
    skip_dirs.iter().any(|d| d == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_FILE_PATTERNS;

    #[test]
    fn test_default_patterns() {
        let set = FilePatternSet::new(DEFAULT_FILE_PATTERNS, false).unwrap();
        assert_eq!(set.len(), 10);

        assert!(set.matches(Path::new("a.md")));
        assert!(set.matches(Path::new("src/lib.rs")));
        assert!(set.matches(Path::new("deep/nested/config.yaml")));
        assert!(set.matches(Path::new(".github/workflows/ci.yml")));

        assert!(!set.matches(Path::new("b.png")));
        assert!(!set.matches(Path::new("Makefile")));
        assert!(!set.matches(Path::new("archive.md.gz")));
    }

    #[test]
    fn test_case_sensitivity() {
        let sensitive = FilePatternSet::new(&["*.md"], false).unwrap();
        assert!(!sensitive.matches(Path::new("README.MD")));

        let insensitive = FilePatternSet::new(&["*.md"], true).unwrap();
        assert!(insensitive.matches(Path::new("README.MD")));
    }

    #[test]
    fn test_dotfiles_match_wildcards() {
        let set = FilePatternSet::new(&["*.toml"], false).unwrap();
        assert!(set.matches(Path::new(".rustfmt.toml")));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = FilePatternSet::new(&["*.rs", "[unclosed"], false).unwrap_err();
        assert!(matches!(err, SwapError::InvalidGlob { ref pattern, .. } if pattern == "[unclosed"));
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let set = FilePatternSet::new::<&str>(&[], false).unwrap();
        assert!(set.is_empty());
        assert!(!set.matches(Path::new("a.md")));
    }

    #[test]
    fn test_is_skipped_dir() {
        let skip = vec![".git".to_string(), "node_modules".to_string()];
        assert!(is_skipped_dir(".git", &skip));
        assert!(is_skipped_dir("node_modules", &skip));
        assert!(!is_skipped_dir(".github", &skip));
        assert!(!is_skipped_dir(".git2", &skip));
    }
}
