//! Syntax trees consumed by the tsym indexer.
//!
//! Trees are produced by an external parser; this crate only stores them:
//! - `SyntaxKind` - closed set of node kinds the indexer distinguishes
//! - `NodeArena` / `Node` / `NodeIndex` - arena storage with parent links
//! - `SourceFile` - one parsed file with its text and line map
//! - `SyntaxTree` - the read-only interface the indexer is written against
//! - `TreeBuilder` - programmatic construction, mainly for tests
//! - `snapshot` - JSON snapshot format written by external parsers

pub mod kind;
pub use kind::SyntaxKind;

pub mod node;
pub use node::{Node, NodeData, NodeIndex, PropertyAccess};

pub mod arena;
pub use arena::NodeArena;

pub mod source_file;
pub use source_file::SourceFile;

pub mod tree;
pub use tree::SyntaxTree;

pub mod builder;
pub use builder::TreeBuilder;

pub mod snapshot;
pub use snapshot::{FileSnapshot, NodeSnapshot, SnapshotError, load_snapshots, parse_snapshots};
