//! Generates syntax tree node types and their visitor traits.
//!
//! A category (`Expr`, `Stmt`, ...) is described by a table of node kinds,
//! each with a list of `Type name` fields:
//!
//! ```
//! use astgen::{GenerationRequest, emit};
//!
//! let request = GenerationRequest::parse(
//!     "Expr",
//!     [
//!         ("Grouping", vec!["Box<Expr> expression"]),
//!         ("Literal", vec!["f64 value"]),
//!     ],
//! )
//! .unwrap();
//! let source = emit(&request).unwrap();
//! assert!(source.contains("fn visit_grouping_expr(&mut self, node: &Grouping) -> Self::Output;"));
//! ```
//!
//! Emitting is pure. Getting the table in and the source out is up to the
//! caller; see `lox` for the tables of the Lox grammar and `main.rs` for the
//! command line tool that writes them to disk.

pub mod emit;
pub mod error;
pub mod field;
pub mod lox;

use heck::AsSnakeCase;

pub use emit::{EmitOptions, emit, emit_with};
pub use error::{Error, Result};
pub use field::{FieldSpec, GenerationRequest, NodeKindSpec, parse_field, parse_kind_table};

/// Name of the file the category `base_name` is written to.
pub fn file_name(base_name: &str) -> String {
    format!("{}.rs", AsSnakeCase(base_name))
}

#[cfg(test)]
mod tests {
    use super::file_name;

    #[test]
    fn file_names() {
        assert_eq!(file_name("Expr"), "expr.rs");
        assert_eq!(file_name("Stmt"), "stmt.rs");
        assert_eq!(file_name("TypeExpr"), "type_expr.rs");
    }
}
