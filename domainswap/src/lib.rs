pub mod config;
pub mod engine;
pub mod errors;
pub mod filters;
pub mod replace;
pub mod results;
pub mod walker;

pub use config::{CliOverrides, ReplacementSpec, RunMode, SwapConfig};
pub use engine::run;
pub use errors::{SwapError, SwapResult};
pub use replace::FileOutcome;
pub use results::{FileRecord, SwapSummary};
pub use walker::FileEnumerator;
