//! Programmatic tree construction.
//!
//! `TreeBuilder` assembles a `SourceFile` bottom-up against a fixed source
//! text. Identifiers are located in the text by searching forward from a
//! cursor, so they must be created in source order. Composite nodes span
//! their children.
//!
//! ```
//! use tsym_syntax::{SyntaxTree, TreeBuilder};
//!
//! let mut b = TreeBuilder::new("a.ts", "class Foo {\n  bar() {}\n}\n");
//! let foo = b.identifier("Foo");
//! let bar = b.identifier("bar");
//! let method = b.method_declaration(bar, vec![]);
//! let class = b.class_declaration(foo, vec![method]);
//! let file = b.finish(vec![class]);
//! assert_eq!(file.file_name(), "a.ts");
//! ```

use crate::arena::NodeArena;
use crate::kind::SyntaxKind;
use crate::node::{Node, NodeData, NodeIndex};
use crate::source_file::SourceFile;

pub struct TreeBuilder {
    file_name: String,
    text: String,
    arena: NodeArena,
    cursor: usize,
    no_default_lib: bool,
}

impl TreeBuilder {
    pub fn new(file_name: impl Into<String>, text: impl Into<String>) -> Self {
        TreeBuilder {
            file_name: file_name.into(),
            text: text.into(),
            arena: NodeArena::new(),
            cursor: 0,
            no_default_lib: false,
        }
    }

    /// Flag the file as a system library file.
    pub fn set_no_default_lib(&mut self, value: bool) {
        self.no_default_lib = value;
    }

    /// Create an identifier for the next whole-word occurrence of `text`
    /// after the cursor, and advance the cursor past it.
    ///
    /// # Panics
    /// Panics if `text` does not occur after the cursor.
    pub fn identifier(&mut self, text: &str) -> NodeIndex {
        let pos = match find_word(&self.text, text, self.cursor) {
            Some(pos) => pos,
            None => panic!(
                "identifier `{text}` not found after offset {} in {}",
                self.cursor, self.file_name
            ),
        };
        let end = pos + text.len();
        self.cursor = end;
        self.arena.add(
            Node::new(SyntaxKind::Identifier, pos as u32, end as u32).with_data(
                NodeData::Identifier {
                    text: text.to_string(),
                },
            ),
        )
    }

    /// A node of any kind with no payload.
    pub fn node(&mut self, kind: SyntaxKind, children: Vec<NodeIndex>) -> NodeIndex {
        self.push(kind, children, NodeData::None)
    }

    /// A node of any kind whose first child is its name.
    pub fn named(
        &mut self,
        kind: SyntaxKind,
        name: NodeIndex,
        rest: Vec<NodeIndex>,
    ) -> NodeIndex {
        let mut children = Vec::with_capacity(rest.len() + 1);
        children.push(name);
        children.extend(rest);
        self.push(kind, children, NodeData::Named { name })
    }

    pub fn syntax_list(&mut self, children: Vec<NodeIndex>) -> NodeIndex {
        self.node(SyntaxKind::SyntaxList, children)
    }

    /// `{ statements }` with the statements wrapped in a syntax list.
    pub fn block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        let list = self.syntax_list(statements);
        self.node(SyntaxKind::Block, vec![list])
    }

    pub fn class_declaration(&mut self, name: NodeIndex, members: Vec<NodeIndex>) -> NodeIndex {
        self.named(SyntaxKind::ClassDeclaration, name, members)
    }

    pub fn interface_declaration(
        &mut self,
        name: NodeIndex,
        members: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.named(SyntaxKind::InterfaceDeclaration, name, members)
    }

    pub fn enum_declaration(&mut self, name: NodeIndex, members: Vec<NodeIndex>) -> NodeIndex {
        self.named(SyntaxKind::EnumDeclaration, name, members)
    }

    pub fn function_declaration(&mut self, name: NodeIndex, body: Vec<NodeIndex>) -> NodeIndex {
        let block = self.block(body);
        self.named(SyntaxKind::FunctionDeclaration, name, vec![block])
    }

    pub fn method_declaration(&mut self, name: NodeIndex, body: Vec<NodeIndex>) -> NodeIndex {
        let block = self.block(body);
        self.named(SyntaxKind::MethodDeclaration, name, vec![block])
    }

    pub fn function_expression(&mut self, body: Vec<NodeIndex>) -> NodeIndex {
        let block = self.block(body);
        self.node(SyntaxKind::FunctionExpression, vec![block])
    }

    pub fn variable_declaration(
        &mut self,
        name: NodeIndex,
        initializer: Option<NodeIndex>,
    ) -> NodeIndex {
        self.named(
            SyntaxKind::VariableDeclaration,
            name,
            initializer.into_iter().collect(),
        )
    }

    /// `var a = ..., b = ...;`
    pub fn variable_statement(&mut self, declarations: Vec<NodeIndex>) -> NodeIndex {
        let list = self.push(
            SyntaxKind::VariableDeclarationList,
            declarations.clone(),
            NodeData::VariableDeclarationList { declarations },
        );
        self.push(
            SyntaxKind::VariableStatement,
            vec![list],
            NodeData::VariableStatement {
                declaration_list: list,
            },
        )
    }

    /// `expression.name`
    pub fn property_access(&mut self, expression: NodeIndex, name: NodeIndex) -> NodeIndex {
        self.push(
            SyntaxKind::PropertyAccessExpression,
            vec![expression, name],
            NodeData::PropertyAccess { expression, name },
        )
    }

    /// `left = right;` as an expression statement.
    pub fn assignment(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        let binary = self.node(SyntaxKind::BinaryExpression, vec![left, right]);
        self.node(SyntaxKind::ExpressionStatement, vec![binary])
    }

    /// Wrap the top-level statements and produce the file:
    /// `SourceFile [SyntaxList [statements..], EndOfFileToken]`.
    pub fn finish(mut self, statements: Vec<NodeIndex>) -> SourceFile {
        let list = self.syntax_list(statements);
        let len = self.text.len() as u32;
        let eof = self.arena.add(Node::new(SyntaxKind::EndOfFileToken, len, len));
        let root = self.arena.add(
            Node::new(SyntaxKind::SourceFile, 0, len).with_children(vec![list, eof]),
        );
        self.arena.link_parents();
        SourceFile::new(self.file_name, self.text, self.arena, root)
            .with_no_default_lib(self.no_default_lib)
    }

    fn push(&mut self, kind: SyntaxKind, children: Vec<NodeIndex>, data: NodeData) -> NodeIndex {
        let (pos, end) = self.covering_span(&children);
        self.arena.add(
            Node::new(kind, pos, end)
                .with_children(children)
                .with_data(data),
        )
    }

    fn covering_span(&self, children: &[NodeIndex]) -> (u32, u32) {
        let spans = children
            .iter()
            .filter_map(|&child| self.arena.get(child))
            .map(|node| (node.pos, node.end));
        spans
            .reduce(|(pos, end), (p, e)| (pos.min(p), end.max(e)))
            .unwrap_or((self.cursor as u32, self.cursor as u32))
    }
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

/// Byte offset of the first whole-word occurrence of `word` at or after `from`.
fn find_word(text: &str, word: &str, from: usize) -> Option<usize> {
    if word.is_empty() {
        return None;
    }
    let mut start = from;
    while let Some(found) = text.get(start..)?.find(word) {
        let pos = start + found;
        let end = pos + word.len();
        let clear_before = text[..pos]
            .chars()
            .next_back()
            .is_none_or(|ch| !is_identifier_char(ch));
        let clear_after = text[end..]
            .chars()
            .next()
            .is_none_or(|ch| !is_identifier_char(ch));
        if clear_before && clear_after {
            return Some(pos);
        }
        start = end;
    }
    None
}

#[cfg(test)]
#[path = "tests/builder_tests.rs"]
mod builder_tests;
