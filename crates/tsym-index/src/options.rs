//! Indexing options.
//!
//! Deserialized from JSON with camelCase keys, e.g.
//!
//! ```json
//! { "dependencyMarkers": ["node_modules", "bower_components"],
//!   "exclude": ["**/*.min.js"],
//!   "parallel": true }
//! ```
//!
//! Missing keys take their defaults.

use std::fmt;

use globset::{GlobBuilder, GlobSetBuilder};
use serde::Deserialize;

use crate::filter::FileFilter;

/// Directory marker for third-party code.
pub const NODE_MODULES: &str = "node_modules";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct IndexOptions {
    /// A file whose path contains any of these is skipped.
    pub dependency_markers: Vec<String>,
    /// Extra glob patterns for files to skip.
    pub exclude: Vec<String>,
    /// Index `no-default-lib` system files too.
    pub include_default_lib: bool,
    /// Run the top-level pass on the rayon pool.
    pub parallel: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        IndexOptions {
            dependency_markers: vec![NODE_MODULES.to_string()],
            exclude: Vec::new(),
            include_default_lib: false,
            parallel: false,
        }
    }
}

#[derive(Debug)]
pub enum OptionsError {
    InvalidGlob {
        pattern: String,
        source: globset::Error,
    },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::InvalidGlob { pattern, source } => {
                write!(f, "invalid exclude pattern '{pattern}': {source}")
            }
        }
    }
}

impl std::error::Error for OptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptionsError::InvalidGlob { source, .. } => Some(source),
        }
    }
}

impl IndexOptions {
    /// Compile the file-selection options.
    pub fn file_filter(&self) -> Result<FileFilter, OptionsError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exclude {
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|source| OptionsError::InvalidGlob {
                    pattern: pattern.clone(),
                    source,
                })?;
            builder.add(glob);
        }
        let exclude = builder.build().map_err(|source| OptionsError::InvalidGlob {
            pattern: self.exclude.join(","),
            source,
        })?;

        Ok(FileFilter::new(
            self.dependency_markers.clone(),
            exclude,
            self.include_default_lib,
        ))
    }
}
