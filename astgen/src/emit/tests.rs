use super::*;

fn expr_request() -> GenerationRequest {
    GenerationRequest::parse(
        "Expr",
        [
            ("Binary", vec!["Box<Expr> left", "Token operator", "Box<Expr> right"]),
            ("Grouping", vec!["Box<Expr> expression"]),
            ("Literal", vec!["Object value"]),
            ("Unary", vec!["Token operator", "Box<Expr> right"]),
        ],
    )
    .unwrap()
}

#[test]
fn literal_expr() {
    let request = GenerationRequest::parse("Expr", [("Literal", ["Object value"])]).unwrap();
    let out = emit(&request).unwrap();
    insta::assert_snapshot!(out);
}

#[test]
fn output_is_deterministic() {
    let options = EmitOptions::default().with_prelude("use crate::token::{Object, Token};");
    let a = emit_with(&expr_request(), &options).unwrap();
    let b = emit_with(&expr_request(), &options).unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_request() {
    let request = GenerationRequest::new("Expr", vec![]).unwrap();
    assert_eq!(
        emit(&request),
        Err(Error::EmptyRequest {
            base_name: "Expr".to_owned()
        })
    );
}

#[test]
fn one_visit_method_per_kind_in_order() {
    let out = emit(&expr_request()).unwrap();

    let start = out.find("pub trait ExprVisitor {").unwrap();
    let end = start + out[start..].find("\n}\n").unwrap();
    let visitor = &out[start..end];

    let methods: Vec<_> = visitor
        .lines()
        .filter_map(|line| line.trim().strip_prefix("fn "))
        .map(|line| &line[..line.find('(').unwrap()])
        .collect();
    assert_eq!(
        methods,
        [
            "visit_binary_expr",
            "visit_grouping_expr",
            "visit_literal_expr",
            "visit_unary_expr",
        ]
    );
    assert!(visitor.contains("fn visit_binary_expr(&mut self, node: &Binary) -> Self::Output;"));
}

#[test]
fn accept_routes_to_own_method() {
    let out = emit(&expr_request()).unwrap();

    for (kind, method) in [
        ("Binary", "visit_binary_expr"),
        ("Grouping", "visit_grouping_expr"),
        ("Literal", "visit_literal_expr"),
        ("Unary", "visit_unary_expr"),
    ] {
        let start = out.find(&format!("impl {kind} {{")).unwrap();
        let end = start + out[start..].find("\n}\n").unwrap();
        let body = &out[start..end];
        assert!(body.contains(&format!("visitor.{method}(self)")), "{body}");
        assert_eq!(body.matches("visitor.visit_").count(), 1, "{body}");
        assert!(out.contains(&format!("Expr::{kind}(node) => node.accept(visitor),")));
    }
}

#[test]
fn fields_in_declared_order() {
    let out = emit(&expr_request()).unwrap();

    assert!(out.contains(indoc::indoc! {"
        pub struct Binary {
            left: Box<Expr>,
            operator: Token,
            right: Box<Expr>,
        }
    "}));
    assert!(out.contains(
        "    pub fn new(left: Box<Expr>, operator: Token, right: Box<Expr>) -> Self {\n        Self { left, operator, right }\n    }\n"
    ));
    assert!(out.contains("    pub fn operator(&self) -> &Token {\n        &self.operator\n    }\n"));
}

#[test]
fn kinds_are_emitted_in_insertion_order() {
    let out = emit(&expr_request()).unwrap();

    let positions: Vec<_> = ["Binary", "Grouping", "Literal", "Unary"]
        .iter()
        .map(|kind| out.find(&format!("pub struct {kind} ")).unwrap())
        .collect();
    assert!(positions.is_sorted());

    let arms: Vec<_> = ["Binary", "Grouping", "Literal", "Unary"]
        .iter()
        .map(|kind| out.find(&format!("Expr::{kind}(_) => \"{kind}\",")).unwrap())
        .collect();
    assert!(arms.is_sorted());
}

#[test]
fn marker_kind_without_fields() {
    let request = GenerationRequest::parse(
        "Stmt",
        [("Break", vec![]), ("Expression", vec!["Expr expression"])],
    )
    .unwrap();
    let out = emit(&request).unwrap();

    assert!(out.contains("pub struct Break {}\n"));
    assert!(out.contains("    pub fn new() -> Self {\n        Self {}\n    }\n"));
    assert!(out.contains("fn visit_break_stmt(&mut self, node: &Break) -> Self::Output;"));
    assert!(out.contains("fn visit_expression_stmt(&mut self, node: &Expression) -> Self::Output;"));
}

#[test]
fn visit_method_names_are_snake_case() {
    let request = GenerationRequest::parse(
        "TypeExpr",
        [("FnPointer", ["Vec<TypeExpr> params"]), ("Path", ["String name"])],
    )
    .unwrap();
    let out = emit(&request).unwrap();

    assert!(out.contains("pub trait TypeExprVisitor {"));
    assert!(out.contains("fn visit_fn_pointer_type_expr(&mut self, node: &FnPointer)"));
    assert!(out.contains("fn visit_path_type_expr(&mut self, node: &Path)"));
}

#[test]
fn options_control_derives_and_prelude() {
    let request = GenerationRequest::parse("Expr", [("Literal", ["Object value"])]).unwrap();

    let bare = emit_with(&request, &EmitOptions::default().with_derives::<_, String>([])).unwrap();
    assert!(!bare.contains("#[derive"));
    assert!(bare.contains("\npub enum Expr {\n"));

    let options = EmitOptions::default()
        .with_derives(["Debug"])
        .with_prelude("use crate::token::Object;\n");
    let out = emit_with(&request, &options).unwrap();
    assert!(out.starts_with(
        "// This file is generated by astgen. Do not edit it by hand.\n\nuse crate::token::Object;\n\n#[derive(Debug)]\npub enum Expr {\n"
    ));
    assert!(out.contains("#[derive(Debug)]\npub struct Literal {\n"));
}

#[test]
fn declared_types_are_opaque() {
    let request = GenerationRequest::parse(
        "Stmt",
        [("Class", ["Token name", "List<Stmt.Function> methods"])],
    )
    .unwrap();
    let out = emit(&request).unwrap();
    assert!(out.contains("    methods: List<Stmt.Function>,\n"));
    assert!(out.contains("pub fn methods(&self) -> &List<Stmt.Function> {"));
}
