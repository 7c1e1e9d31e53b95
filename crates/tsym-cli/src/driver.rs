use anyhow::{Context, Result};
use tracing::info;

use crate::args::{CliArgs, OutputFormat};
use crate::{inputs, reporter};
use tsym_index::WorkspaceIndexer;

/// Run one indexing invocation and return the rendered output.
pub fn run(args: &CliArgs, color: bool) -> Result<String> {
    let options = args.index_options()?;
    let indexer = WorkspaceIndexer::new(&options).context("invalid index options")?;

    let paths = inputs::discover_snapshots(&args.inputs)?;
    let files = inputs::load_files(&paths)?;
    let skipped = files
        .iter()
        .filter(|file| !indexer.filter().includes(*file))
        .count();
    let mut declarations = indexer.collect_declarations(&files);
    info!(
        files = files.len(),
        skipped,
        declarations = declarations.len(),
        "indexed workspace"
    );

    if let Some(root) = &args.root {
        reporter::relativize(&mut declarations, &root.to_string_lossy());
    }

    match args.format {
        OutputFormat::Json => reporter::render_json(&declarations, args.pretty),
        OutputFormat::Text => Ok(reporter::render_text(&declarations, color)),
    }
}
