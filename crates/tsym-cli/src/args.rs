use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use tsym_index::IndexOptions;

/// CLI arguments for the tsym binary.
#[derive(Parser, Debug)]
#[command(
    name = "tsym",
    version,
    about = "Index named declarations in parsed TypeScript/JavaScript snapshots"
)]
pub struct CliArgs {
    /// Snapshot files, or directories searched recursively for `*.json` snapshots.
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Read indexing options from a JSON file.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Collect top-level declarations of each file in parallel.
    #[arg(long)]
    pub parallel: bool,

    /// Skip files matching this glob (repeatable).
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Index `no-default-lib` system files too.
    #[arg(long = "includeDefaultLib", alias = "include-default-lib")]
    pub include_default_lib: bool,

    /// Report file paths relative to this directory.
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

impl CliArgs {
    /// Options from `--config` (or defaults), with command-line flags applied
    /// on top. Flags only ever add: `--exclude` extends the configured list.
    pub fn index_options(&self) -> Result<IndexOptions> {
        let mut options = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("failed to parse config {}", path.display()))?
            }
            None => IndexOptions::default(),
        };

        options.parallel |= self.parallel;
        options.include_default_lib |= self.include_default_lib;
        options.exclude.extend(self.exclude.iter().cloned());
        Ok(options)
    }
}

#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod args_tests;
