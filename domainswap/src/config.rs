//! Run configuration.
//!
//! A run is normally described entirely by command-line flags. An explicit
//! config file can supply the ambient settings (root, patterns, skip dirs,
//! logging), but the replacement pair and the run mode only ever come from
//! the command line.

use config::{Config as ConfigBuilder, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{SwapError, SwapResult};

/// Directory name that is always pruned from traversal.
pub const VCS_DIR: &str = ".git";

/// Filename globs eligible for replacement when nothing else is configured.
pub const DEFAULT_FILE_PATTERNS: &[&str] = &[
    "*.py", "*.rs", "*.toml", "*.json", "*.md", "*.txt", "*.html", "*.lua", "*.yml", "*.yaml",
];

/// Whether a run only reports or also rewrites files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunMode {
    #[default]
    DryRun,
    Apply,
}

impl RunMode {
    pub fn is_apply(self) -> bool {
        matches!(self, RunMode::Apply)
    }
}

/// The literal pair being swapped.
///
/// Neither side is validated: an empty `from` or `from == to` is accepted
/// and only warned about when a run starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementSpec {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
}

impl ReplacementSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Configuration for a swap run.
///
/// Every field has a default, so a run driven only by command-line flags
/// never needs a file. When `--config <PATH>` is given, the file is read
/// with [`SwapConfig::load_from`] and the flags are layered on top with
/// [`SwapConfig::merge_with_cli`]. Example YAML:
///
/// ```yaml
/// root_path: "services"
/// file_patterns: ["*.rs", "*.toml", "*.conf"]
/// skip_dirs: [".git", "node_modules"]
/// sort_paths: true
/// log_level: "info"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapConfig {
    /// Literal source and target strings
    #[serde(flatten)]
    pub replacement: ReplacementSpec,

    /// Root directory to start traversal from
    #[serde(default = "default_root_path")]
    pub root_path: PathBuf,

    /// Dry-run (default) or apply. Never read from a file.
    #[serde(skip)]
    pub mode: RunMode,

    /// Shell-style globs matched against file names
    #[serde(default = "default_file_patterns")]
    pub file_patterns: Vec<String>,

    /// Directory names whose subtrees are never descended into
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,

    /// Match file patterns ignoring ASCII case
    #[serde(default)]
    pub case_insensitive: bool,

    /// Visit directory entries in file-name order for a reproducible report
    #[serde(default)]
    pub sort_paths: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_root_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_file_patterns() -> Vec<String> {
    DEFAULT_FILE_PATTERNS.iter().map(|p| p.to_string()).collect()
}

fn default_skip_dirs() -> Vec<String> {
    vec![VCS_DIR.to_string()]
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Values taken from the command line.
///
/// `None` means the flag was absent and the file (or the default) stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub replacement: ReplacementSpec,
    pub root_path: Option<PathBuf>,
    pub mode: RunMode,
    pub file_patterns: Vec<String>,
    pub skip_dirs: Vec<String>,
    pub case_insensitive: bool,
    pub sort_paths: bool,
    pub log_level: Option<String>,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            replacement: ReplacementSpec::default(),
            root_path: default_root_path(),
            mode: RunMode::default(),
            file_patterns: default_file_patterns(),
            skip_dirs: default_skip_dirs(),
            case_insensitive: false,
            sort_paths: false,
            log_level: default_log_level(),
        }
    }
}

impl SwapConfig {
    /// Builds a config for `from -> to` under `root` with every other field defaulted
    pub fn new(root: impl Into<PathBuf>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            replacement: ReplacementSpec::new(from, to),
            root_path: root.into(),
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }

    /// Loads configuration from an explicit YAML or JSON file
    pub fn load_from(config_path: &Path) -> SwapResult<Self> {
        let config: SwapConfig = ConfigBuilder::builder()
            .add_source(File::from(config_path))
            .build()?
            .try_deserialize()?;
        if config.file_patterns.is_empty() {
            return Err(SwapError::config_error(format!(
                "{}: file_patterns must list at least one glob",
                config_path.display()
            )));
        }
        Ok(config.with_vcs_dir_skipped())
    }

    /// Merges CLI arguments into configuration file values.
    ///
    /// The replacement pair and the run mode always come from the CLI.
    /// Root and log level override the file whenever they were given, even
    /// when they equal the defaults. Patterns and skip dirs given on the CLI
    /// extend the file's lists rather than replace them.
    pub fn merge_with_cli(mut self, cli: CliOverrides) -> Self {
        self.replacement = cli.replacement;
        self.mode = cli.mode;
        if let Some(root_path) = cli.root_path {
            self.root_path = root_path;
        }
        for pattern in cli.file_patterns {
            if !self.file_patterns.contains(&pattern) {
                self.file_patterns.push(pattern);
            }
        }
        for dir in cli.skip_dirs {
            if !self.skip_dirs.contains(&dir) {
                self.skip_dirs.push(dir);
            }
        }
        self.case_insensitive |= cli.case_insensitive;
        self.sort_paths |= cli.sort_paths;
        if let Some(log_level) = cli.log_level {
            self.log_level = log_level;
        }
        self.with_vcs_dir_skipped()
    }

    /// Builds a config from CLI arguments alone, with no file underneath
    pub fn from_cli(cli: CliOverrides) -> Self {
        Self::default().merge_with_cli(cli)
    }

    fn with_vcs_dir_skipped(mut self) -> Self {
        if !self.skip_dirs.iter().any(|d| d == VCS_DIR) {
            self.skip_dirs.push(VCS_DIR.to_string());
        }
        self
    }
}
