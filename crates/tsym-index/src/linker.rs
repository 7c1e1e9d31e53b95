//! Prototype-member linking (second pass).
//!
//! Recognizes `Base.prototype.member` anywhere in a file and, when `Base`
//! names a declaration from the first pass, records `member` as a property
//! of it. The match is syntactic: reads and writes both qualify.

use tracing::trace;
use tsym_common::Location;
use tsym_syntax::{NodeIndex, SyntaxKind, SyntaxTree};

use crate::declaration::{Declaration, DeclarationKind, TopLevelTable};

const PROTOTYPE: &str = "prototype";

/// Walk every node of `file` in pre-order and append a property declaration
/// for each resolved prototype member.
pub(crate) fn link_file<T: SyntaxTree + ?Sized>(
    file: &T,
    table: &TopLevelTable,
    out: &mut Vec<Declaration>,
) {
    // Explicit stack: full-depth descent over arbitrary expression nesting.
    let mut stack: Vec<NodeIndex> = file.children(file.root()).iter().rev().copied().collect();
    while let Some(node) = stack.pop() {
        if let Some(declaration) = prototype_member(file, node, table) {
            trace!(path = %declaration.path, "linked prototype member");
            out.push(declaration);
        }
        stack.extend(file.children(node).iter().rev().copied());
    }
}

/// The synthesized declaration for `node` if it is the `member` identifier
/// of `Base.prototype.member` and `Base` resolves in `table`.
fn prototype_member<T: SyntaxTree + ?Sized>(
    file: &T,
    node: NodeIndex,
    table: &TopLevelTable,
) -> Option<Declaration> {
    if !file.kind(node).is_some_and(SyntaxKind::is_identifier) {
        return None;
    }
    let outer = file.property_access(file.parent(node)?)?;
    if outer.name != node {
        return None;
    }
    let inner = file.property_access(outer.expression)?;
    if !file.kind(inner.expression).is_some_and(SyntaxKind::is_identifier)
        || !file.kind(inner.name).is_some_and(SyntaxKind::is_identifier)
        || file.identifier_text(inner.name)? != PROTOTYPE
    {
        return None;
    }

    let base = file.identifier_text(inner.expression)?;
    let entry = table.find_first(base)?;
    let member = file.identifier_text(node)?;
    let (start, end) = file.span(node)?;

    Some(Declaration::new(
        member.to_string(),
        DeclarationKind::Property,
        format!("{}.{member}", entry.path),
        Location::new(file.file_name().to_string(), file.resolve_span(start, end)),
    ))
}

#[cfg(test)]
#[path = "tests/linker_tests.rs"]
mod linker_tests;
