//! Snapshot discovery and loading.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use tsym_syntax::{SourceFile, load_snapshots};

/// Expand inputs into snapshot files. Explicit files are kept as given;
/// directories are walked recursively for `*.json` in file-name order, so the
/// resulting file order (and hence first-match resolution) is stable.
pub fn discover_snapshots(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for input in inputs {
        if input.is_file() {
            found.push(input.clone());
        } else if input.is_dir() {
            for entry in WalkDir::new(input).follow_links(true).sort_by_file_name() {
                let entry = entry
                    .with_context(|| format!("failed to walk {}", input.display()))?;
                if entry.file_type().is_file() && is_snapshot(entry.path()) {
                    found.push(entry.into_path());
                }
            }
        } else {
            bail!("input {} does not exist", input.display());
        }
    }
    debug!(snapshots = found.len(), "discovered snapshots");
    Ok(found)
}

fn is_snapshot(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Load every snapshot, keeping file order.
pub fn load_files(paths: &[PathBuf]) -> Result<Vec<SourceFile>> {
    let mut files = Vec::new();
    for path in paths {
        files.extend(load_snapshots(path)?);
    }
    Ok(files)
}
