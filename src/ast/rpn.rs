use thiserror::Error;

use super::expr::{
    Assign, Binary, Call, Get, Grouping, Literal, Logical, Set, This, Unary, Variable,
};
use super::{Expr, ExprVisitor};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("`{kind}` expressions have no reverse Polish form")]
pub struct Unsupported {
    pub kind: &'static str,
}

/// Formats arithmetic in reverse Polish notation.
///
/// `(1 + 2) * (4 - 3)` formats as `1 2 + 4 3 - *`. Only binary operators,
/// groupings and literals can be expressed.
#[derive(Default)]
pub struct RpnFormatter;

impl RpnFormatter {
    pub fn format(expr: &Expr) -> Result<String, Unsupported> {
        expr.accept(&mut RpnFormatter)
    }
}

type RpnResult = Result<String, Unsupported>;

impl ExprVisitor for RpnFormatter {
    type Output = RpnResult;

    fn visit_assign_expr(&mut self, _: &Assign) -> RpnResult {
        Err(Unsupported { kind: "Assign" })
    }

    fn visit_binary_expr(&mut self, node: &Binary) -> RpnResult {
        let left = node.left().accept(self)?;
        let right = node.right().accept(self)?;
        Ok(format!("{left} {right} {}", node.operator().lexeme))
    }

    fn visit_call_expr(&mut self, _: &Call) -> RpnResult {
        Err(Unsupported { kind: "Call" })
    }

    fn visit_get_expr(&mut self, _: &Get) -> RpnResult {
        Err(Unsupported { kind: "Get" })
    }

    fn visit_grouping_expr(&mut self, node: &Grouping) -> RpnResult {
        // no parentheses in RPN
        node.expression().accept(self)
    }

    fn visit_literal_expr(&mut self, node: &Literal) -> RpnResult {
        Ok(node.value().to_string())
    }

    fn visit_logical_expr(&mut self, _: &Logical) -> RpnResult {
        Err(Unsupported { kind: "Logical" })
    }

    fn visit_set_expr(&mut self, _: &Set) -> RpnResult {
        Err(Unsupported { kind: "Set" })
    }

    fn visit_this_expr(&mut self, _: &This) -> RpnResult {
        Err(Unsupported { kind: "This" })
    }

    fn visit_unary_expr(&mut self, _: &Unary) -> RpnResult {
        Err(Unsupported { kind: "Unary" })
    }

    fn visit_variable_expr(&mut self, _: &Variable) -> RpnResult {
        Err(Unsupported { kind: "Variable" })
    }
}
