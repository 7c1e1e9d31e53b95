//! Which files take part in indexing.

use globset::GlobSet;
use tsym_common::{is_dependency_path, normalize_path};
use tsym_syntax::SyntaxTree;

/// Why a file was left out of the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// System library file (`no-default-lib`).
    DefaultLib,
    /// Path contains a dependency directory marker.
    Dependency,
    /// Path matches an exclude glob.
    Excluded,
}

#[derive(Debug, Clone)]
pub struct FileFilter {
    dependency_markers: Vec<String>,
    exclude: GlobSet,
    include_default_lib: bool,
}

impl FileFilter {
    pub(crate) fn new(
        dependency_markers: Vec<String>,
        exclude: GlobSet,
        include_default_lib: bool,
    ) -> Self {
        Self {
            dependency_markers,
            exclude,
            include_default_lib,
        }
    }

    pub fn skip_reason<T: SyntaxTree + ?Sized>(&self, file: &T) -> Option<SkipReason> {
        if file.has_no_default_lib() && !self.include_default_lib {
            return Some(SkipReason::DefaultLib);
        }
        let name = file.file_name();
        if is_dependency_path(name, &self.dependency_markers) {
            return Some(SkipReason::Dependency);
        }
        if !self.exclude.is_empty() && self.exclude.is_match(normalize_path(name)) {
            return Some(SkipReason::Excluded);
        }
        None
    }

    pub fn includes<T: SyntaxTree + ?Sized>(&self, file: &T) -> bool {
        self.skip_reason(file).is_none()
    }
}
