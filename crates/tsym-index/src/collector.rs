//! Top-level declaration collection (first pass).
//!
//! Walks each file from the children of its root and records every named
//! declaration it reaches, building dotted paths from the syntactic parent
//! chain. Scoping is purely structural:
//!
//! - a `SyntaxList` re-enables recursion for its children and drops the
//!   inherited path;
//! - a `VariableStatement` is flattened into its declarators;
//! - an accepted declaration visited with `recurse_into_children` visits every
//!   direct child once more, with recursion off and its own path as prefix.
//!
//! So `class Foo { bar() {} }` yields `Foo` and `Foo.bar`, while anything
//! nested below `bar` is not reached unless a syntax list re-enables it.

use tracing::trace;
use tsym_common::Location;
use tsym_syntax::{NodeIndex, SyntaxKind, SyntaxTree};

use crate::declaration::{Declaration, DeclarationKind, TopLevelEntry, TopLevelTable};

/// How the collector treats a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeClass {
    SyntaxList,
    VariableStatement,
    Declaration(DeclarationKind),
    Other,
}

/// Total over `SyntaxKind`: a new kind must be placed here explicitly.
pub(crate) fn classify(kind: SyntaxKind) -> NodeClass {
    match kind {
        SyntaxKind::SyntaxList => NodeClass::SyntaxList,
        SyntaxKind::VariableStatement => NodeClass::VariableStatement,
        SyntaxKind::MethodDeclaration => NodeClass::Declaration(DeclarationKind::Method),
        SyntaxKind::FunctionDeclaration => NodeClass::Declaration(DeclarationKind::Function),
        SyntaxKind::ClassDeclaration => NodeClass::Declaration(DeclarationKind::Class),
        SyntaxKind::VariableDeclaration => NodeClass::Declaration(DeclarationKind::Variable),
        SyntaxKind::EnumDeclaration => NodeClass::Declaration(DeclarationKind::Enum),
        SyntaxKind::InterfaceDeclaration => NodeClass::Declaration(DeclarationKind::Interface),
        SyntaxKind::SourceFile
        | SyntaxKind::EndOfFileToken
        | SyntaxKind::Identifier
        | SyntaxKind::VariableDeclarationList
        | SyntaxKind::ModuleDeclaration
        | SyntaxKind::Block
        | SyntaxKind::ExpressionStatement
        | SyntaxKind::ReturnStatement
        | SyntaxKind::PropertyDeclaration
        | SyntaxKind::Constructor
        | SyntaxKind::MethodSignature
        | SyntaxKind::PropertySignature
        | SyntaxKind::EnumMember
        | SyntaxKind::Parameter
        | SyntaxKind::PropertyAccessExpression
        | SyntaxKind::ElementAccessExpression
        | SyntaxKind::BinaryExpression
        | SyntaxKind::CallExpression
        | SyntaxKind::FunctionExpression
        | SyntaxKind::ArrowFunction
        | SyntaxKind::ObjectLiteralExpression
        | SyntaxKind::StringLiteral
        | SyntaxKind::NumericLiteral
        | SyntaxKind::ThisKeyword
        | SyntaxKind::Unknown => NodeClass::Other,
    }
}

/// Declarations and entries found in one file, in discovery order.
#[derive(Debug, Default)]
pub(crate) struct Discoveries {
    pub(crate) declarations: Vec<Declaration>,
    pub(crate) entries: Vec<TopLevelEntry>,
}

/// Output of the first pass over the whole workspace.
///
/// Holding one of these is the only way to obtain a populated
/// `TopLevelTable`, which the prototype-member pass requires.
#[derive(Debug)]
pub struct TopLevelPass {
    pub declarations: Vec<Declaration>,
    pub table: TopLevelTable,
}

impl TopLevelPass {
    /// Concatenate per-file results in the given order.
    pub(crate) fn merge(per_file: impl IntoIterator<Item = Discoveries>) -> Self {
        let mut declarations = Vec::new();
        let mut table = TopLevelTable::new();
        for found in per_file {
            declarations.extend(found.declarations);
            for entry in found.entries {
                table.push(entry);
            }
        }
        TopLevelPass {
            declarations,
            table,
        }
    }
}

/// Collects named declarations from one file into `Discoveries`.
pub(crate) struct TopLevelCollector<'a, T: SyntaxTree + ?Sized> {
    file: &'a T,
    found: &'a mut Discoveries,
}

impl<'a, T: SyntaxTree + ?Sized> TopLevelCollector<'a, T> {
    pub(crate) fn new(file: &'a T, found: &'a mut Discoveries) -> Self {
        Self { file, found }
    }

    pub(crate) fn collect_file(&mut self) {
        let file = self.file;
        for &child in file.children(file.root()) {
            self.collect(child, true, None);
        }
    }

    fn collect(&mut self, node: NodeIndex, recurse_into_children: bool, parent_path: Option<&str>) {
        let file = self.file;
        let Some(kind) = file.kind(node) else {
            return;
        };
        match classify(kind) {
            NodeClass::SyntaxList => {
                for &child in file.children(node) {
                    self.collect(child, true, None);
                }
            }
            NodeClass::VariableStatement => {
                for &declarator in file.variable_declarations(node) {
                    self.collect_named(declarator, recurse_into_children, parent_path);
                }
            }
            NodeClass::Declaration(_) | NodeClass::Other => {
                self.collect_named(node, recurse_into_children, parent_path);
            }
        }
    }

    /// Record `node` if it is a named declaration, then optionally visit its
    /// direct children one level deeper.
    fn collect_named(
        &mut self,
        node: NodeIndex,
        recurse_into_children: bool,
        parent_path: Option<&str>,
    ) {
        let file = self.file;
        let Some(NodeClass::Declaration(kind)) = file.kind(node).map(classify) else {
            return;
        };
        let Some(name_node) = file.name_node(node) else {
            return;
        };
        if !file.kind(name_node).is_some_and(SyntaxKind::is_identifier) {
            return;
        }
        let (Some(name), Some((start, end))) =
            (file.identifier_text(name_node), file.span(name_node))
        else {
            return;
        };

        let path = qualify(parent_path, name);
        trace!(declaration = name, path = %path, kind = kind.as_str(), "collected");

        let location = Location::new(file.file_name().to_string(), file.resolve_span(start, end));
        self.found.entries.push(TopLevelEntry {
            name: name.to_string(),
            path: path.clone(),
        });
        self.found.declarations.push(Declaration::new(
            name.to_string(),
            kind,
            path.clone(),
            location,
        ));

        if recurse_into_children {
            for &child in file.children(node) {
                self.collect(child, false, Some(path.as_str()));
            }
        }
    }
}

/// `parent.name`, or just `name` at the top level. An empty parent path
/// counts as no parent.
pub(crate) fn qualify(parent_path: Option<&str>, name: &str) -> String {
    match parent_path {
        Some(parent) if !parent.is_empty() => format!("{parent}.{name}"),
        _ => name.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/collector_tests.rs"]
mod collector_tests;
