//! Node kinds.
//!
//! Names follow TypeScript's `SyntaxKind` so snapshot producers can emit
//! `ts.SyntaxKind[node.kind]` directly. Kinds the indexer never looks at
//! deserialize to `Unknown`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SyntaxKind {
    SourceFile,
    /// Wrapper around a statement list (file statements, block bodies).
    SyntaxList,
    EndOfFileToken,
    Identifier,

    // Statements
    VariableStatement,
    VariableDeclarationList,
    VariableDeclaration,
    FunctionDeclaration,
    ClassDeclaration,
    InterfaceDeclaration,
    EnumDeclaration,
    ModuleDeclaration,
    Block,
    ExpressionStatement,
    ReturnStatement,

    // Members
    MethodDeclaration,
    PropertyDeclaration,
    Constructor,
    MethodSignature,
    PropertySignature,
    EnumMember,
    Parameter,

    // Expressions
    PropertyAccessExpression,
    ElementAccessExpression,
    BinaryExpression,
    CallExpression,
    FunctionExpression,
    ArrowFunction,
    ObjectLiteralExpression,
    StringLiteral,
    NumericLiteral,
    ThisKeyword,

    #[serde(other)]
    Unknown,
}

impl SyntaxKind {
    #[inline]
    pub fn is_identifier(self) -> bool {
        self == SyntaxKind::Identifier
    }
}
