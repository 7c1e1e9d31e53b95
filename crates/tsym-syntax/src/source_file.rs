//! A parsed file: text, line map and node arena.

use tsym_common::{LineMap, Position, PositionResolver};

use crate::arena::NodeArena;
use crate::kind::SyntaxKind;
use crate::node::{NodeIndex, PropertyAccess};
use crate::tree::SyntaxTree;

#[derive(Debug, Clone)]
pub struct SourceFile {
    file_name: String,
    text: String,
    line_map: LineMap,
    arena: NodeArena,
    root: NodeIndex,
    has_no_default_lib: bool,
}

impl SourceFile {
    /// Wrap an arena whose parent links are already set.
    pub fn new(file_name: String, text: String, arena: NodeArena, root: NodeIndex) -> Self {
        let line_map = LineMap::build(&text);
        SourceFile {
            file_name,
            text,
            line_map,
            arena,
            root,
            has_no_default_lib: false,
        }
    }

    pub fn with_no_default_lib(mut self, value: bool) -> Self {
        self.has_no_default_lib = value;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn line_map(&self) -> &LineMap {
        &self.line_map
    }
}

impl PositionResolver for SourceFile {
    fn resolve(&self, offset: u32) -> Position {
        self.line_map.offset_to_position(offset, &self.text)
    }
}

impl SyntaxTree for SourceFile {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn has_no_default_lib(&self) -> bool {
        self.has_no_default_lib
    }

    fn root(&self) -> NodeIndex {
        self.root
    }

    fn kind(&self, node: NodeIndex) -> Option<SyntaxKind> {
        self.arena.get(node).map(|n| n.kind)
    }

    fn children(&self, node: NodeIndex) -> &[NodeIndex] {
        self.arena
            .get(node)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    fn parent(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.arena
            .get(node)
            .map(|n| n.parent)
            .filter(|parent| parent.is_some())
    }

    fn name_node(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.arena.get(node).and_then(|n| self.arena.get_name(n))
    }

    fn identifier_text(&self, node: NodeIndex) -> Option<&str> {
        self.arena
            .get(node)
            .and_then(|n| self.arena.get_identifier(n))
    }

    fn span(&self, node: NodeIndex) -> Option<(u32, u32)> {
        self.arena.get(node).map(|n| (n.pos, n.end))
    }

    fn property_access(&self, node: NodeIndex) -> Option<PropertyAccess> {
        self.arena
            .get(node)
            .and_then(|n| self.arena.get_access_expr(n))
    }

    fn variable_declarations(&self, statement: NodeIndex) -> &[NodeIndex] {
        match self.arena.get(statement) {
            Some(node) => self.arena.get_variable_declarations(node),
            None => &[],
        }
    }
}
