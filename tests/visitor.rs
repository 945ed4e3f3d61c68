//! A new operation over the tree, written outside the crate that owns the
//! node types.

use lox::ast::expr::{
    Assign, Binary, Call, Get, Grouping, Literal, Logical, Set, This, Unary, Variable,
};
use lox::ast::{AstPrinter, Expr, ExprVisitor};
use lox::token::{Object, Token, TokenType};

/// Collects every variable read, in evaluation order.
#[derive(Default)]
struct Reads(Vec<String>);

impl ExprVisitor for Reads {
    type Output = ();

    fn visit_assign_expr(&mut self, node: &Assign) {
        node.value().accept(self);
    }

    fn visit_binary_expr(&mut self, node: &Binary) {
        node.left().accept(self);
        node.right().accept(self);
    }

    fn visit_call_expr(&mut self, node: &Call) {
        node.callee().accept(self);
        for arg in node.arguments() {
            arg.accept(self);
        }
    }

    fn visit_get_expr(&mut self, node: &Get) {
        node.object().accept(self);
    }

    fn visit_grouping_expr(&mut self, node: &Grouping) {
        node.expression().accept(self);
    }

    fn visit_literal_expr(&mut self, _: &Literal) {}

    fn visit_logical_expr(&mut self, node: &Logical) {
        node.left().accept(self);
        node.right().accept(self);
    }

    fn visit_set_expr(&mut self, node: &Set) {
        node.object().accept(self);
        node.value().accept(self);
    }

    fn visit_this_expr(&mut self, _: &This) {}

    fn visit_unary_expr(&mut self, node: &Unary) {
        node.right().accept(self);
    }

    fn visit_variable_expr(&mut self, node: &Variable) {
        self.0.push(node.name().lexeme.clone());
    }
}

fn ident(name: &str) -> Token {
    Token::new(TokenType::Identifier, name, None, 1)
}

fn var(name: &str) -> Box<Expr> {
    Box::new(Variable::new(ident(name)).into())
}

#[test]
fn collects_reads() {
    // total = scale(x + y, factor) * -offset
    let sum = Binary::new(var("x"), Token::new(TokenType::Plus, "+", None, 1), var("y"));
    let call = Call::new(
        var("scale"),
        Token::new(TokenType::RightParen, ")", None, 1),
        vec![sum.into(), Grouping::new(var("factor")).into()],
    );
    let negated = Unary::new(Token::new(TokenType::Minus, "-", None, 1), var("offset"));
    let product = Binary::new(
        Box::new(call.into()),
        Token::new(TokenType::Star, "*", None, 1),
        Box::new(negated.into()),
    );
    let expr: Expr = Assign::new(ident("total"), Box::new(product.into())).into();

    let mut reads = Reads::default();
    expr.accept(&mut reads);
    assert_eq!(reads.0, ["scale", "x", "y", "factor", "offset"]);

    assert_eq!(
        AstPrinter::print(&expr),
        "(set total (* (scale (+ x y) (group factor)) (- offset)))"
    );
}

#[test]
fn literals_read_nothing() {
    let expr: Expr = Literal::new(Object::Str("hello".to_owned())).into();
    let mut reads = Reads::default();
    expr.accept(&mut reads);
    assert!(reads.0.is_empty());
    assert_eq!(expr.kind_name(), "Literal");
}
