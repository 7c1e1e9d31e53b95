//! Workspace declaration index.
//!
//! Turns a set of parsed files into a flat list of named declarations with
//! dotted qualified paths, for workspace symbol search:
//! - `collector` - first pass: classes, functions, methods, variables, enums
//!   and interfaces, qualified by their syntactic container
//! - `linker` - second pass: `Type.prototype.member` accesses become
//!   `property` declarations under `Type`'s path
//! - `filter` / `options` - which files are indexed and how
//! - `indexer` - the pipeline tying both passes together
//!
//! ```
//! use tsym_index::{DeclarationKind, collect_declarations};
//! use tsym_syntax::TreeBuilder;
//!
//! let mut b = TreeBuilder::new("a.ts", "class Foo {\n  bar() {}\n}\n");
//! let foo = b.identifier("Foo");
//! let bar = b.identifier("bar");
//! let method = b.method_declaration(bar, vec![]);
//! let class = b.class_declaration(foo, vec![method]);
//! let file = b.finish(vec![class]);
//!
//! let declarations = collect_declarations(&[file]);
//! assert_eq!(declarations[1].path, "Foo.bar");
//! assert_eq!(declarations[1].kind, DeclarationKind::Method);
//! ```

pub mod declaration;
pub use declaration::{Declaration, DeclarationKind, TopLevelEntry, TopLevelTable};

mod collector;
pub use collector::TopLevelPass;

mod linker;

pub mod filter;
pub use filter::{FileFilter, SkipReason};

pub mod options;
pub use options::{IndexOptions, OptionsError};

pub mod indexer;
pub use indexer::{WorkspaceIndexer, collect_declarations};
