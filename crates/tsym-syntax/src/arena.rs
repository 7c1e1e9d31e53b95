//! NodeArena: flat node storage plus typed accessors.

use crate::kind::SyntaxKind;
use crate::node::{Node, NodeData, NodeIndex, PropertyAccess};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Append a node and return its index.
    pub fn add(&mut self, node: Node) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(node);
        index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeIndex(i as u32), node))
    }

    /// Identifier text. Returns None if the node is not an identifier.
    #[inline]
    pub fn get_identifier<'a>(&self, node: &'a Node) -> Option<&'a str> {
        match &node.data {
            NodeData::Identifier { text } if node.kind == SyntaxKind::Identifier => {
                Some(text.as_str())
            }
            _ => None,
        }
    }

    /// Expression and name of a property access (`a.b`).
    #[inline]
    pub fn get_access_expr(&self, node: &Node) -> Option<PropertyAccess> {
        match node.data {
            NodeData::PropertyAccess { expression, name }
                if node.kind == SyntaxKind::PropertyAccessExpression =>
            {
                Some(PropertyAccess { expression, name })
            }
            _ => None,
        }
    }

    /// Name node of a declaration, if it has one.
    #[inline]
    pub fn get_name(&self, node: &Node) -> Option<NodeIndex> {
        match node.data {
            NodeData::Named { name } if name.is_some() => Some(name),
            _ => None,
        }
    }

    /// Declarators of a variable statement, looked up through its declaration list.
    pub fn get_variable_declarations(&self, node: &Node) -> &[NodeIndex] {
        let NodeData::VariableStatement { declaration_list } = node.data else {
            return &[];
        };
        match self.get(declaration_list).map(|list| &list.data) {
            Some(NodeData::VariableDeclarationList { declarations }) => declarations,
            _ => &[],
        }
    }

    /// Point every child's `parent` at the node that lists it.
    pub fn link_parents(&mut self) {
        let links: Vec<(NodeIndex, NodeIndex)> = self
            .iter()
            .flat_map(|(parent, node)| node.children.iter().map(move |&child| (child, parent)))
            .collect();
        for (child, parent) in links {
            if let Some(node) = self.get_mut(child) {
                node.parent = parent;
            }
        }
    }
}

#[cfg(test)]
mod arena_tests {
    use super::*;

    fn identifier(text: &str) -> Node {
        Node::new(SyntaxKind::Identifier, 0, text.len() as u32).with_data(NodeData::Identifier {
            text: text.to_string(),
        })
    }

    #[test]
    fn test_identifier_text_borrows_from_node() {
        let node = identifier("Foo");
        // The arena is dropped before the text is used.
        let text = {
            let arena = NodeArena::new();
            arena.get_identifier(&node)
        };
        assert_eq!(text, Some("Foo"));
    }

    #[test]
    fn test_identifier_requires_identifier_kind() {
        let arena = NodeArena::new();
        let mut node = identifier("Foo");
        node.kind = SyntaxKind::StringLiteral;
        assert_eq!(arena.get_identifier(&node), None);
    }
}
