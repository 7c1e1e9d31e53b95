//! Node storage types.

use crate::kind::SyntaxKind;

/// Index of a node inside a `NodeArena`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    #[inline]
    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// Kind-specific payload. Every index stored here is also one of the node's
/// `children`; the payload only names the role a child plays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NodeData {
    #[default]
    None,
    Identifier {
        text: String,
    },
    /// A declaration with a name node (class, function, variable, member...).
    Named {
        name: NodeIndex,
    },
    PropertyAccess {
        expression: NodeIndex,
        name: NodeIndex,
    },
    VariableStatement {
        declaration_list: NodeIndex,
    },
    VariableDeclarationList {
        declarations: Vec<NodeIndex>,
    },
}

/// The two halves of `expression.name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyAccess {
    pub expression: NodeIndex,
    pub name: NodeIndex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: SyntaxKind,
    /// Start byte offset (inclusive)
    pub pos: u32,
    /// End byte offset (exclusive)
    pub end: u32,
    pub parent: NodeIndex,
    pub children: Vec<NodeIndex>,
    pub data: NodeData,
}

impl Node {
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Self {
        Node {
            kind,
            pos,
            end,
            parent: NodeIndex::NONE,
            children: Vec::new(),
            data: NodeData::None,
        }
    }

    pub fn with_children(mut self, children: Vec<NodeIndex>) -> Self {
        self.children = children;
        self
    }

    pub fn with_data(mut self, data: NodeData) -> Self {
        self.data = data;
        self
    }
}
