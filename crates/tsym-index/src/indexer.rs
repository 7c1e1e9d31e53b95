//! The two-pass indexing pipeline.

use rayon::prelude::*;
use tracing::{Level, debug, span};
use tsym_syntax::SyntaxTree;

use crate::collector::{Discoveries, TopLevelCollector, TopLevelPass};
use crate::declaration::{Declaration, TopLevelTable};
use crate::filter::FileFilter;
use crate::linker::link_file;
use crate::options::{IndexOptions, OptionsError};

/// Builds the declaration index for a set of parsed files.
///
/// The first pass must see every file before the second starts, because a
/// prototype member in one file may attach to a type declared in another.
/// `link_prototype_members` therefore takes the table that only
/// `collect_top_level` produces.
#[derive(Debug, Clone)]
pub struct WorkspaceIndexer {
    filter: FileFilter,
    parallel: bool,
}

impl Default for WorkspaceIndexer {
    fn default() -> Self {
        WorkspaceIndexer {
            filter: FileFilter::new(
                IndexOptions::default().dependency_markers,
                globset::GlobSet::empty(),
                false,
            ),
            parallel: false,
        }
    }
}

impl WorkspaceIndexer {
    pub fn new(options: &IndexOptions) -> Result<Self, OptionsError> {
        Ok(WorkspaceIndexer {
            filter: options.file_filter()?,
            parallel: options.parallel,
        })
    }

    pub fn filter(&self) -> &FileFilter {
        &self.filter
    }

    /// Run both passes and return every declaration: first-pass results in
    /// file order, then synthesized properties in file order.
    pub fn collect_declarations<T: SyntaxTree + Sync>(&self, files: &[T]) -> Vec<Declaration> {
        let _span = span!(Level::DEBUG, "collect_declarations", files = files.len()).entered();

        let TopLevelPass {
            mut declarations,
            table,
        } = self.collect_top_level(files);
        let top_level = declarations.len();
        declarations.extend(self.link_prototype_members(files, &table));

        debug!(
            top_level,
            properties = declarations.len() - top_level,
            "indexed workspace"
        );
        declarations
    }

    /// First pass. With `parallel` set, files are processed on the rayon pool
    /// and their results concatenated in input order.
    pub fn collect_top_level<T: SyntaxTree + Sync>(&self, files: &[T]) -> TopLevelPass {
        let per_file: Vec<Discoveries> = if self.parallel {
            files.par_iter().map(|file| self.collect_file(file)).collect()
        } else {
            files.iter().map(|file| self.collect_file(file)).collect()
        };
        TopLevelPass::merge(per_file)
    }

    /// Second pass. Returns only the synthesized property declarations.
    pub fn link_prototype_members<T: SyntaxTree>(
        &self,
        files: &[T],
        table: &TopLevelTable,
    ) -> Vec<Declaration> {
        let mut properties = Vec::new();
        for file in files.iter().filter(|file| self.filter.includes(*file)) {
            link_file(file, table, &mut properties);
        }
        properties
    }

    fn collect_file<T: SyntaxTree>(&self, file: &T) -> Discoveries {
        let mut found = Discoveries::default();
        if let Some(reason) = self.filter.skip_reason(file) {
            debug!(file = file.file_name(), ?reason, "skipping file");
            return found;
        }
        TopLevelCollector::new(file, &mut found).collect_file();
        debug!(
            file = file.file_name(),
            declarations = found.declarations.len(),
            "collected top-level declarations"
        );
        found
    }
}

/// Index `files` with default options.
pub fn collect_declarations<T: SyntaxTree + Sync>(files: &[T]) -> Vec<Declaration> {
    WorkspaceIndexer::default().collect_declarations(files)
}
