use std::io::Write;

use tsym_common::{Position, PositionResolver};
use tsym_syntax::{
    FileSnapshot, NodeIndex, SnapshotError, SyntaxKind, SyntaxTree, TreeBuilder, load_snapshots,
    parse_snapshots,
};

const CLASS_SNAPSHOT: &str = r#"{
  "fileName": "src/a.ts",
  "text": "class Foo {}",
  "root": 3,
  "nodes": [
    { "kind": "Identifier", "pos": 6, "end": 9, "text": "Foo" },
    { "kind": "ClassDeclaration", "pos": 0, "end": 12, "name": 0, "children": [0] },
    { "kind": "SyntaxList", "pos": 0, "end": 12, "children": [1] },
    { "kind": "SourceFile", "pos": 0, "end": 12, "children": [2] }
  ]
}"#;

#[test]
fn test_parse_single_file() {
    let files = parse_snapshots(CLASS_SNAPSHOT).unwrap();
    assert_eq!(files.len(), 1);

    let file = &files[0];
    assert_eq!(file.file_name(), "src/a.ts");
    assert!(!file.has_no_default_lib());
    assert_eq!(file.root(), NodeIndex(3));
    assert_eq!(file.kind(NodeIndex(1)), Some(SyntaxKind::ClassDeclaration));
    assert_eq!(file.name_node(NodeIndex(1)), Some(NodeIndex(0)));
    assert_eq!(file.identifier_text(NodeIndex(0)), Some("Foo"));
    assert_eq!(file.parent(NodeIndex(0)), Some(NodeIndex(1)));
    assert_eq!(file.parent(NodeIndex(3)), None);
    assert_eq!(file.resolve(6), Position::new(0, 6));
}

#[test]
fn test_parse_array_document() {
    let json = format!("[{CLASS_SNAPSHOT}, {CLASS_SNAPSHOT}]");
    let files = parse_snapshots(&json).unwrap();
    assert_eq!(files.len(), 2);
}

#[test]
fn test_unknown_kinds_are_tolerated() {
    let json = r#"{
      "fileName": "a.ts", "text": "x", "root": 1,
      "nodes": [
        { "kind": "JsxSelfClosingElement", "pos": 0, "end": 1 },
        { "kind": "SourceFile", "pos": 0, "end": 1, "children": [0] }
      ]
    }"#;
    let files = parse_snapshots(json).unwrap();
    assert_eq!(files[0].kind(NodeIndex(0)), Some(SyntaxKind::Unknown));
}

#[test]
fn test_rejects_root_out_of_range() {
    let json = r#"{ "fileName": "a.ts", "text": "", "root": 4, "nodes": [] }"#;
    let err = parse_snapshots(json).unwrap_err();
    assert!(matches!(err, SnapshotError::RootOutOfRange { root: 4, .. }));
}

#[test]
fn test_rejects_dangling_reference() {
    let json = r#"{
      "fileName": "a.ts", "text": "abc", "root": 0,
      "nodes": [ { "kind": "SourceFile", "pos": 0, "end": 3, "children": [7] } ]
    }"#;
    let err = parse_snapshots(json).unwrap_err();
    assert!(matches!(
        err,
        SnapshotError::DanglingReference {
            node: 0,
            target: 7,
            ..
        }
    ));
    assert_eq!(err.to_string(), "a.ts: node 0 refers to missing node 7");
}

#[test]
fn test_rejects_span_outside_text() {
    let json = r#"{
      "fileName": "a.ts", "text": "abc", "root": 0,
      "nodes": [ { "kind": "SourceFile", "pos": 0, "end": 9 } ]
    }"#;
    let err = parse_snapshots(json).unwrap_err();
    assert!(matches!(err, SnapshotError::InvalidSpan { end: 9, .. }));
}

#[test]
fn test_rejects_span_inside_multibyte_char() {
    // `é` is two UTF-8 bytes; offset 1 splits it.
    let json = r#"{
      "fileName": "a.ts", "text": "é", "root": 0,
      "nodes": [ { "kind": "SourceFile", "pos": 0, "end": 1 } ]
    }"#;
    let err = parse_snapshots(json).unwrap_err();
    assert!(matches!(
        err,
        SnapshotError::InvalidSpan {
            node: 0,
            pos: 0,
            end: 1,
            ..
        }
    ));
}

#[test]
fn test_rejects_role_outside_children() {
    // Node 7 re-uses the outer declaration list, which would send the
    // collector back around the same declarator forever.
    let json = r#"{
      "fileName": "a.ts", "text": "var a;", "root": 5,
      "nodes": [
        { "kind": "Identifier", "pos": 4, "end": 5, "text": "a" },
        { "kind": "VariableDeclaration", "pos": 4, "end": 5, "name": 0, "children": [0, 6] },
        { "kind": "VariableDeclarationList", "pos": 0, "end": 5, "declarations": [1], "children": [1] },
        { "kind": "VariableStatement", "pos": 0, "end": 6, "declarationList": 2, "children": [2] },
        { "kind": "SyntaxList", "pos": 0, "end": 6, "children": [3] },
        { "kind": "SourceFile", "pos": 0, "end": 6, "children": [4] },
        { "kind": "SyntaxList", "pos": 4, "end": 5, "children": [7] },
        { "kind": "VariableStatement", "pos": 4, "end": 5, "declarationList": 2 }
      ]
    }"#;
    let err = parse_snapshots(json).unwrap_err();
    assert!(matches!(
        err,
        SnapshotError::RoleNotChild {
            node: 7,
            role: 2,
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "a.ts: node 7 refers to node 2, which is not its child"
    );
}

#[test]
fn test_rejects_name_outside_children() {
    let json = r#"{
      "fileName": "a.ts", "text": "class Foo {}", "root": 3,
      "nodes": [
        { "kind": "Identifier", "pos": 6, "end": 9, "text": "Foo" },
        { "kind": "ClassDeclaration", "pos": 0, "end": 12, "name": 0 },
        { "kind": "SyntaxList", "pos": 0, "end": 12, "children": [1, 0] },
        { "kind": "SourceFile", "pos": 0, "end": 12, "children": [2] }
      ]
    }"#;
    let err = parse_snapshots(json).unwrap_err();
    assert!(matches!(
        err,
        SnapshotError::RoleNotChild {
            node: 1,
            role: 0,
            ..
        }
    ));
}

#[test]
fn test_rejects_shared_child() {
    let json = r#"{
      "fileName": "a.ts", "text": "a", "root": 2,
      "nodes": [
        { "kind": "Identifier", "pos": 0, "end": 1, "text": "a" },
        { "kind": "SyntaxList", "pos": 0, "end": 1, "children": [0] },
        { "kind": "SourceFile", "pos": 0, "end": 1, "children": [1, 0] }
      ]
    }"#;
    let err = parse_snapshots(json).unwrap_err();
    assert!(matches!(err, SnapshotError::NotATree { node: 0, .. }));
}

#[test]
fn test_rejects_root_as_child() {
    let json = r#"{
      "fileName": "a.ts", "text": "", "root": 0,
      "nodes": [ { "kind": "SourceFile", "pos": 0, "end": 0, "children": [0] } ]
    }"#;
    let err = parse_snapshots(json).unwrap_err();
    assert!(matches!(err, SnapshotError::NotATree { node: 0, .. }));
}

#[test]
fn test_rejects_malformed_json() {
    let err = parse_snapshots("{ not json").unwrap_err();
    assert!(matches!(err, SnapshotError::Json { path: None, .. }));
}

#[test]
fn test_builder_tree_survives_snapshot() {
    let mut b = TreeBuilder::new("a.js", "var a = 1, b = 2;\nFoo.prototype.x = a;");
    let a = b.identifier("a");
    let a_decl = b.variable_declaration(a, None);
    let b_name = b.identifier("b");
    let b_decl = b.variable_declaration(b_name, None);
    let stmt = b.variable_statement(vec![a_decl, b_decl]);
    let foo = b.identifier("Foo");
    let prototype = b.identifier("prototype");
    let inner = b.property_access(foo, prototype);
    let x = b.identifier("x");
    let outer = b.property_access(inner, x);
    let rhs = b.identifier("a");
    let assign = b.assignment(outer, rhs);
    b.set_no_default_lib(true);
    let file = b.finish(vec![stmt, assign]);

    let snapshot = FileSnapshot::from_source_file(&file);
    let json = serde_json::to_string(&snapshot).unwrap();
    let reloaded = parse_snapshots(&json).unwrap().remove(0);

    assert_eq!(FileSnapshot::from_source_file(&reloaded), snapshot);
    assert!(reloaded.has_no_default_lib());
    assert_eq!(reloaded.variable_declarations(stmt), &[a_decl, b_decl]);
    assert_eq!(reloaded.property_access(outer).map(|p| p.name), Some(x));
    assert_eq!(reloaded.parent(x), Some(outer));
}

#[test]
fn test_load_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CLASS_SNAPSHOT.as_bytes()).unwrap();

    let files = load_snapshots(file.path()).unwrap();
    assert_eq!(files[0].file_name(), "src/a.ts");
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let err = load_snapshots(&missing).unwrap_err();
    assert!(matches!(err, SnapshotError::Io { .. }));
    assert!(err.to_string().starts_with("cannot read snapshot"));
}
