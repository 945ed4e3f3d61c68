//! Syntax tree of Lox.
//!
//! `expr` and `stmt` are generated by `astgen` at build time, see `build.rs`.
//! Everything that walks the tree does so through `ExprVisitor` and
//! `StmtVisitor`.

use std::fmt::{self, Display};

mod printer;
mod rpn;

pub use printer::AstPrinter;
pub use rpn::{RpnFormatter, Unsupported};

pub mod expr {
    include!(concat!(env!("OUT_DIR"), "/expr.rs"));
}

pub mod stmt {
    include!(concat!(env!("OUT_DIR"), "/stmt.rs"));
}

pub use expr::{Expr, ExprVisitor};
pub use stmt::{Stmt, StmtVisitor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Function,
    Method,
    Getter,
}

impl FunctionKind {
    pub fn title(self) -> &'static str {
        match self {
            FunctionKind::Function => "function",
            FunctionKind::Method => "method",
            FunctionKind::Getter => "getter",
        }
    }

    /// Getters are declared without a parameter list.
    pub fn has_formal_parameters(self) -> bool {
        self != FunctionKind::Getter
    }
}

impl Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
