//! Declaration model.
//!
//! The index is a flat, ordered `Vec<Declaration>`. Order is discovery order
//! and is part of the contract: the first-match lookup in `TopLevelTable`
//! depends on it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tsym_common::Location;

/// What a declaration is. Serialized as the short names search clients expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Method,
    #[serde(rename = "fn")]
    Function,
    Class,
    #[serde(rename = "var")]
    Variable,
    Enum,
    Interface,
    /// Synthesized from a `Type.prototype.member` access.
    Property,
}

impl DeclarationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Method => "method",
            Self::Function => "fn",
            Self::Class => "class",
            Self::Variable => "var",
            Self::Enum => "enum",
            Self::Interface => "interface",
            Self::Property => "property",
        }
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One discovered symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Identifier text.
    pub name: String,
    pub kind: DeclarationKind,
    /// Dotted container chain ending in `name`, fixed at discovery.
    pub path: String,
    /// Span of the name token only.
    pub location: Location,
}

impl Declaration {
    pub fn new(name: String, kind: DeclarationKind, path: String, location: Location) -> Self {
        Self {
            name,
            kind,
            path,
            location,
        }
    }
}

/// Name and path of a declaration found by the top-level pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopLevelEntry {
    pub name: String,
    pub path: String,
}

/// Top-level entries in discovery order, with a first-match name lookup.
///
/// Names are not unique across a workspace. `find_first` deliberately
/// returns the earliest entry, so reordering input files can change which
/// path a prototype member attaches to.
#[derive(Debug, Clone, Default)]
pub struct TopLevelTable {
    entries: Vec<TopLevelEntry>,
    first_by_name: FxHashMap<String, usize>,
}

impl TopLevelTable {
    /// Only the top-level pass builds tables; see `TopLevelPass`.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: TopLevelEntry) {
        let index = self.entries.len();
        self.first_by_name.entry(entry.name.clone()).or_insert(index);
        self.entries.push(entry);
    }

    pub fn find_first(&self, name: &str) -> Option<&TopLevelEntry> {
        self.first_by_name
            .get(name)
            .and_then(|&index| self.entries.get(index))
    }

    pub fn entries(&self) -> &[TopLevelEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
