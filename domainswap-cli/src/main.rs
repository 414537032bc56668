use anyhow::{Context, Result};
use clap::Parser;
use domainswap::{
    replace::preview_file, run, CliOverrides, FileEnumerator, ReplacementSpec, RunMode,
    SwapConfig, SwapSummary,
};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod diff_utils;

/// Swap a literal string (usually a domain) across the text files of a tree.
/// Runs as a dry run unless --apply is given.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Literal string to search for
    #[arg(long = "from", value_name = "STRING", allow_hyphen_values = true)]
    from: String,

    /// Literal string to replace it with
    #[arg(long = "to", value_name = "STRING", allow_hyphen_values = true)]
    to: String,

    /// Write the changes; without this only counts are reported
    #[arg(long)]
    apply: bool,

    /// Root directory to walk [default: .]
    #[arg(long, value_name = "PATH")]
    root: Option<PathBuf>,

    /// Extra filename glob to include (e.g. '*.conf'), may be repeated
    #[arg(long = "include", value_name = "GLOB")]
    include: Vec<String>,

    /// Extra directory name to prune alongside .git, may be repeated
    #[arg(long = "skip-dir", value_name = "NAME")]
    skip_dirs: Vec<String>,

    /// Match filename globs case-insensitively
    #[arg(long)]
    ignore_case: bool,

    /// Walk directories in file-name order for a reproducible report
    #[arg(long)]
    sort: bool,

    /// Print a unified diff of every pending change before the report
    #[arg(long, conflicts_with = "json")]
    diff: bool,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Disable colored diff output
    #[arg(long)]
    no_color: bool,

    /// Log level for diagnostics on stderr (trace, debug, info, warn, error) [default: warn]
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Read additional settings from a YAML or JSON file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            replacement: ReplacementSpec::new(&self.from, &self.to),
            root_path: self.root.clone(),
            mode: if self.apply {
                RunMode::Apply
            } else {
                RunMode::DryRun
            },
            file_patterns: self.include.clone(),
            skip_dirs: self.skip_dirs.clone(),
            case_insensitive: self.ignore_case,
            sort_paths: self.sort,
            log_level: self.log_level.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = match &cli.config {
        Some(path) => SwapConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?
            .merge_with_cli(cli.overrides()),
        None => SwapConfig::from_cli(cli.overrides()),
    };

    init_tracing(&config.log_level);
    debug!("Effective configuration: {:?}", config);

    if cli.diff {
        print_pending_diffs(&config)?;
    }

    let summary = run(&config).with_context(|| {
        format!(
            "Swap run failed under {}",
            config.root_path.display()
        )
    })?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?
        );
    } else {
        print_report(&summary);
    }
    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Diffs are computed from the original content, before any write happens
fn print_pending_diffs(config: &SwapConfig) -> Result<()> {
    let enumerator = FileEnumerator::from_config(config)?;
    for path in enumerator.candidates() {
        if let Some((old, new)) = preview_file(&path, &config.replacement) {
            for line in diff_utils::unified_diff(&path, &old, &new) {
                println!("{}", line);
            }
            println!();
        }
    }
    Ok(())
}

fn print_report(summary: &SwapSummary) {
    for line in summary.report_lines() {
        println!("{}", line);
    }
}
