//! The read-only tree interface the indexer is written against.

use tsym_common::PositionResolver;

use crate::kind::SyntaxKind;
use crate::node::{NodeIndex, PropertyAccess};

/// One parsed file, viewed as a tree of indexed nodes.
///
/// Every query takes a `NodeIndex` and answers `None` (or an empty slice) for
/// indices that do not name a node, so callers never need to pre-validate.
pub trait SyntaxTree: PositionResolver {
    /// File name as reported by the parser.
    fn file_name(&self) -> &str;

    /// Whether this is a system library file (`/// <reference no-default-lib="true"/>`).
    fn has_no_default_lib(&self) -> bool;

    fn root(&self) -> NodeIndex;

    fn kind(&self, node: NodeIndex) -> Option<SyntaxKind>;

    /// Ordered children, including wrapping `SyntaxList` nodes.
    fn children(&self, node: NodeIndex) -> &[NodeIndex];

    fn parent(&self, node: NodeIndex) -> Option<NodeIndex>;

    /// Name node of a declaration (not necessarily an identifier).
    fn name_node(&self, node: NodeIndex) -> Option<NodeIndex>;

    /// Text of an identifier node.
    fn identifier_text(&self, node: NodeIndex) -> Option<&str>;

    /// `[start, end)` byte offsets of a node.
    fn span(&self, node: NodeIndex) -> Option<(u32, u32)>;

    fn property_access(&self, node: NodeIndex) -> Option<PropertyAccess>;

    /// Declarators of a `VariableStatement`; empty for anything else.
    fn variable_declarations(&self, statement: NodeIndex) -> &[NodeIndex];
}
