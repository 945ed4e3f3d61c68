//! Node tables for the Lox tree-walking interpreter.
//!
//! Declared types are written in Rust: recursive fields are boxed, and the
//! fields the grammar allows to be absent are `Option`s.

use crate::emit::{EmitOptions, emit_with};
use crate::error::Result;
use crate::field::GenerationRequest;

#[derive(Debug, Clone, Copy)]
pub struct Definition {
    pub base_name: &'static str,
    /// Imports the generated file needs, relative to the module it lands in.
    pub prelude: &'static str,
    pub types: &'static [(&'static str, &'static [&'static str])],
}

impl Definition {
    pub fn request(&self) -> Result<GenerationRequest> {
        GenerationRequest::parse(self.base_name, self.types.iter().copied())
    }

    pub fn options(&self) -> EmitOptions {
        EmitOptions::default().with_prelude(self.prelude)
    }

    /// Parse and emit. Nothing is produced if either step fails.
    pub fn generate(&self) -> Result<String> {
        emit_with(&self.request()?, &self.options())
    }

    pub fn file_name(&self) -> String {
        crate::file_name(self.base_name)
    }
}

pub const EXPR: Definition = Definition {
    base_name: "Expr",
    prelude: "use crate::token::{Object, Token};",
    types: &[
        ("Assign", &["Token name", "Box<Expr> value"]),
        ("Binary", &["Box<Expr> left", "Token operator", "Box<Expr> right"]),
        ("Call", &["Box<Expr> callee", "Token paren", "Vec<Expr> arguments"]),
        ("Get", &["Box<Expr> object", "Token name"]),
        ("Grouping", &["Box<Expr> expression"]),
        ("Literal", &["Object value"]),
        ("Logical", &["Box<Expr> left", "Token operator", "Box<Expr> right"]),
        ("Set", &["Box<Expr> object", "Token name", "Box<Expr> value"]),
        ("This", &["Token keyword"]),
        ("Unary", &["Token operator", "Box<Expr> right"]),
        ("Variable", &["Token name"]),
    ],
};

pub const STMT: Definition = Definition {
    base_name: "Stmt",
    prelude: indoc::indoc! {"
        use super::FunctionKind;
        use super::expr::Expr;
        use crate::token::Token;
    "},
    types: &[
        ("Block", &["Vec<Stmt> statements"]),
        ("Class", &["Token name", "Vec<Function> methods"]),
        ("Expression", &["Expr expression"]),
        (
            "Function",
            &["Token name", "FunctionKind kind", "Vec<Token> params", "Vec<Stmt> body"],
        ),
        (
            "If",
            &["Expr condition", "Box<Stmt> then_branch", "Option<Box<Stmt>> else_branch"],
        ),
        ("Print", &["Expr expression"]),
        ("Return", &["Token keyword", "Option<Expr> value"]),
        ("Var", &["Token name", "Option<Expr> initializer"]),
        ("While", &["Expr condition", "Box<Stmt> body"]),
    ],
};

/// Every category, in the order they are generated.
pub const DEFINITIONS: &[Definition] = &[EXPR, STMT];
