// State module - Run results handed over by the forking subsystem

pub mod result;

pub use result::RunResult;

use anyhow::{Context, Result};
use std::path::Path;

/// Load a run result summary from a JSON file
pub fn load_run_result(path: &Path) -> Result<RunResult> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read run result: {}", path.display()))?;
    parse_run_result(&content)
        .with_context(|| format!("Invalid run result: {}", path.display()))
}

/// Parse a run result summary from a JSON string
pub fn parse_run_result(content: &str) -> Result<RunResult> {
    Ok(serde_json::from_str(content)?)
}

/// Load and aggregate the run results of several forks
pub fn load_run_results(paths: &[impl AsRef<Path>]) -> Result<RunResult> {
    let mut aggregated = RunResult::no_tests_run();
    for path in paths {
        aggregated = aggregated.aggregate(&load_run_result(path.as_ref())?);
    }
    Ok(aggregated)
}
