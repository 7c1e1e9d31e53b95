use super::*;
use tsym_common::{Position, Range};
use tsym_syntax::{SourceFile, TreeBuilder};

fn collect(file: &SourceFile) -> Discoveries {
    let mut found = Discoveries::default();
    TopLevelCollector::new(file, &mut found).collect_file();
    found
}

fn paths(found: &Discoveries) -> Vec<&str> {
    found
        .declarations
        .iter()
        .map(|d| d.path.as_str())
        .collect()
}

#[test]
fn test_every_declaration_kind_at_top_level() {
    let source = "class C {}\nfunction f() {}\ninterface I {}\nenum E {}\nvar v;\nfunction m() {}";
    let mut b = TreeBuilder::new("kinds.ts", source);
    let c = b.identifier("C");
    let class = b.class_declaration(c, vec![]);
    let f = b.identifier("f");
    let func = b.function_declaration(f, vec![]);
    let i = b.identifier("I");
    let interface = b.interface_declaration(i, vec![]);
    let e = b.identifier("E");
    let enumeration = b.enum_declaration(e, vec![]);
    let v = b.identifier("v");
    let v_decl = b.variable_declaration(v, None);
    let var = b.variable_statement(vec![v_decl]);
    let m = b.identifier("m");
    let method = b.method_declaration(m, vec![]);
    let file = b.finish(vec![class, func, interface, enumeration, var, method]);

    let found = collect(&file);
    let summary: Vec<(&str, DeclarationKind, &str)> = found
        .declarations
        .iter()
        .map(|d| (d.name.as_str(), d.kind, d.path.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("C", DeclarationKind::Class, "C"),
            ("f", DeclarationKind::Function, "f"),
            ("I", DeclarationKind::Interface, "I"),
            ("E", DeclarationKind::Enum, "E"),
            ("v", DeclarationKind::Variable, "v"),
            ("m", DeclarationKind::Method, "m"),
        ]
    );
    assert_eq!(
        found.declarations[3].location.range,
        Range::new(Position::new(3, 5), Position::new(3, 6))
    );
}

#[test]
fn test_method_in_class_is_qualified() {
    let mut b = TreeBuilder::new("foo.ts", "class Foo {\n  bar() {}\n}\n");
    let foo = b.identifier("Foo");
    let bar = b.identifier("bar");
    let method = b.method_declaration(bar, vec![]);
    let class = b.class_declaration(foo, vec![method]);
    let file = b.finish(vec![class]);

    let found = collect(&file);
    assert_eq!(paths(&found), vec!["Foo", "Foo.bar"]);

    let bar_decl = &found.declarations[1];
    assert_eq!(bar_decl.kind, DeclarationKind::Method);
    assert_eq!(bar_decl.location.file_path, "foo.ts");
    // Only the name token, not the method body.
    assert_eq!(
        bar_decl.location.range,
        Range::new(Position::new(1, 2), Position::new(1, 5))
    );
}

#[test]
fn test_variable_statement_is_flattened() {
    let mut b = TreeBuilder::new("vars.js", "var a = 1, b = 2;");
    let a = b.identifier("a");
    let a_decl = b.variable_declaration(a, None);
    let b_name = b.identifier("b");
    let b_decl = b.variable_declaration(b_name, None);
    let stmt = b.variable_statement(vec![a_decl, b_decl]);
    let file = b.finish(vec![stmt]);

    let found = collect(&file);
    assert_eq!(paths(&found), vec!["a", "b"]);
    assert!(
        found
            .declarations
            .iter()
            .all(|d| d.kind == DeclarationKind::Variable)
    );
}

#[test]
fn test_recursion_stops_one_level_below_accepted_declaration() {
    let source = "class Foo {\n  bar() {\n    class Inner { deep() {} }\n  }\n}";
    let mut b = TreeBuilder::new("nested.ts", source);
    let foo = b.identifier("Foo");
    let bar = b.identifier("bar");
    let inner = b.identifier("Inner");
    let deep = b.identifier("deep");
    let deep_method = b.method_declaration(deep, vec![]);
    let inner_class = b.class_declaration(inner, vec![deep_method]);
    let method = b.method_declaration(bar, vec![inner_class]);
    let class = b.class_declaration(foo, vec![method]);
    let file = b.finish(vec![class]);

    assert_eq!(paths(&collect(&file)), vec!["Foo", "Foo.bar"]);
}

#[test]
fn test_direct_child_declaration_does_not_recurse() {
    // A class hung directly off a class: found one level down, its own
    // members are not.
    let mut b = TreeBuilder::new("a.ts", "class Outer { class Mid { leaf() {} } }");
    let outer = b.identifier("Outer");
    let mid = b.identifier("Mid");
    let leaf = b.identifier("leaf");
    let leaf_method = b.method_declaration(leaf, vec![]);
    let mid_class = b.class_declaration(mid, vec![leaf_method]);
    let outer_class = b.class_declaration(outer, vec![mid_class]);
    let file = b.finish(vec![outer_class]);

    assert_eq!(paths(&collect(&file)), vec!["Outer", "Outer.Mid"]);
}

#[test]
fn test_function_body_is_not_indexed() {
    let mut b = TreeBuilder::new("a.js", "function f() { var x = 1; }");
    let f = b.identifier("f");
    let x = b.identifier("x");
    let x_decl = b.variable_declaration(x, None);
    let stmt = b.variable_statement(vec![x_decl]);
    let func = b.function_declaration(f, vec![stmt]);
    let file = b.finish(vec![func]);

    assert_eq!(paths(&collect(&file)), vec!["f"]);
}

#[test]
fn test_variable_statement_under_declaration_inherits_path() {
    let mut b = TreeBuilder::new("a.js", "function f() var x, y");
    let f = b.identifier("f");
    let x = b.identifier("x");
    let x_decl = b.variable_declaration(x, None);
    let y = b.identifier("y");
    let y_decl = b.variable_declaration(y, None);
    let stmt = b.variable_statement(vec![x_decl, y_decl]);
    let func = b.named(SyntaxKind::FunctionDeclaration, f, vec![stmt]);
    let file = b.finish(vec![func]);

    assert_eq!(paths(&collect(&file)), vec!["f", "f.x", "f.y"]);
}

#[test]
fn test_syntax_list_drops_parent_path() {
    let mut b = TreeBuilder::new("a.ts", "class Foo { baz() {} qux() {} }");
    let foo = b.identifier("Foo");
    let baz = b.identifier("baz");
    let baz_method = b.method_declaration(baz, vec![]);
    let qux = b.identifier("qux");
    let qux_method = b.method_declaration(qux, vec![]);
    let members = b.syntax_list(vec![baz_method, qux_method]);
    let class = b.class_declaration(foo, vec![members]);
    let file = b.finish(vec![class]);

    // Recursion is re-enabled but the container path is not inherited.
    assert_eq!(paths(&collect(&file)), vec!["Foo", "baz", "qux"]);
}

#[test]
fn test_nested_syntax_lists_keep_recursing() {
    let mut b = TreeBuilder::new("a.ts", "class A { b() {} }");
    let a = b.identifier("A");
    let b_name = b.identifier("b");
    let method = b.method_declaration(b_name, vec![]);
    let class = b.class_declaration(a, vec![method]);
    let inner = b.syntax_list(vec![class]);
    let outer = b.syntax_list(vec![inner]);
    let file = b.finish(vec![outer]);

    assert_eq!(paths(&collect(&file)), vec!["A", "A.b"]);
}

#[test]
fn test_non_identifier_name_is_ignored() {
    let mut b = TreeBuilder::new("a.ts", "class 'quoted' {}");
    let literal = b.node(SyntaxKind::StringLiteral, vec![]);
    let class = b.named(SyntaxKind::ClassDeclaration, literal, vec![]);
    let file = b.finish(vec![class]);

    assert!(collect(&file).declarations.is_empty());
}

#[test]
fn test_unrecognized_named_kinds_are_ignored() {
    let mut b = TreeBuilder::new("a.ts", "namespace N { class K {} }\nclass P { prop = 1; }");
    let n = b.identifier("N");
    let k = b.identifier("K");
    let k_class = b.class_declaration(k, vec![]);
    let body = b.syntax_list(vec![k_class]);
    let block = b.node(SyntaxKind::Unknown, vec![body]);
    let namespace = b.named(SyntaxKind::ModuleDeclaration, n, vec![block]);
    let p = b.identifier("P");
    let prop = b.identifier("prop");
    let prop_decl = b.named(SyntaxKind::PropertyDeclaration, prop, vec![]);
    let class = b.class_declaration(p, vec![prop_decl]);
    let file = b.finish(vec![namespace, class]);

    assert_eq!(paths(&collect(&file)), vec!["P"]);
}

#[test]
fn test_entries_mirror_declarations() {
    let mut b = TreeBuilder::new("a.ts", "class Foo { bar() {} }\nvar Foo;");
    let foo = b.identifier("Foo");
    let bar = b.identifier("bar");
    let method = b.method_declaration(bar, vec![]);
    let class = b.class_declaration(foo, vec![method]);
    let foo_var = b.identifier("Foo");
    let var_decl = b.variable_declaration(foo_var, None);
    let stmt = b.variable_statement(vec![var_decl]);
    let file = b.finish(vec![class, stmt]);

    let found = collect(&file);
    let entries: Vec<(&str, &str)> = found
        .entries
        .iter()
        .map(|e| (e.name.as_str(), e.path.as_str()))
        .collect();
    assert_eq!(entries, vec![("Foo", "Foo"), ("bar", "Foo.bar"), ("Foo", "Foo")]);
    assert_eq!(found.entries.len(), found.declarations.len());
}

#[test]
fn test_merge_preserves_file_order() {
    let first = Discoveries {
        declarations: vec![],
        entries: vec![TopLevelEntry {
            name: "Dup".to_string(),
            path: "Dup".to_string(),
        }],
    };
    let second = Discoveries {
        declarations: vec![],
        entries: vec![TopLevelEntry {
            name: "Dup".to_string(),
            path: "Other.Dup".to_string(),
        }],
    };

    let pass = TopLevelPass::merge(vec![first, second]);
    assert_eq!(pass.table.len(), 2);
    assert_eq!(pass.table.find_first("Dup").unwrap().path, "Dup");
}

#[test]
fn test_classify_declaration_kinds() {
    assert_eq!(classify(SyntaxKind::SyntaxList), NodeClass::SyntaxList);
    assert_eq!(
        classify(SyntaxKind::VariableStatement),
        NodeClass::VariableStatement
    );
    assert_eq!(
        classify(SyntaxKind::FunctionDeclaration),
        NodeClass::Declaration(DeclarationKind::Function)
    );
    assert_eq!(classify(SyntaxKind::PropertyDeclaration), NodeClass::Other);
    assert_eq!(classify(SyntaxKind::Unknown), NodeClass::Other);
}

#[test]
fn test_qualify() {
    assert_eq!(qualify(None, "x"), "x");
    assert_eq!(qualify(Some("A.B"), "x"), "A.B.x");
    assert_eq!(qualify(Some(""), "x"), "x");
}
