use super::expr::{
    Assign, Binary, Call, Get, Grouping, Literal, Logical, Set, This, Unary, Variable,
};
use super::stmt::{Block, Class, Expression, Function, If, Print, Return, Var, While};
use super::{Expr, ExprVisitor, Stmt, StmtVisitor};

/// Prints the tree as S-expressions.
///
/// `1 + 2 * x` prints as `(+ 1 (* 2 x))`.
#[derive(Default)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(expr: &Expr) -> String {
        expr.accept(&mut AstPrinter)
    }

    pub fn print_stmt(stmt: &Stmt) -> String {
        stmt.accept(&mut AstPrinter)
    }

    fn parenthesize<'e>(&mut self, name: &str, exprs: impl IntoIterator<Item = &'e Expr>) -> String {
        self.list(name, exprs, |p, expr| expr.accept(p))
    }

    fn block(&mut self, name: &str, stmts: &[Stmt]) -> String {
        self.list(name, stmts, |p, stmt| stmt.accept(p))
    }

    /// `(name item item ...)`
    fn list<T>(
        &mut self,
        name: &str,
        items: impl IntoIterator<Item = T>,
        mut print: impl FnMut(&mut Self, T) -> String,
    ) -> String {
        let mut out = format!("({name}");
        for item in items {
            out.push(' ');
            out.push_str(&print(self, item));
        }
        out.push(')');
        out
    }
}

impl ExprVisitor for AstPrinter {
    type Output = String;

    fn visit_assign_expr(&mut self, node: &Assign) -> String {
        format!("(set {} {})", node.name().lexeme, node.value().accept(self))
    }

    fn visit_binary_expr(&mut self, node: &Binary) -> String {
        self.parenthesize(&node.operator().lexeme, [&**node.left(), &**node.right()])
    }

    fn visit_call_expr(&mut self, node: &Call) -> String {
        let callee = node.callee().accept(self);
        self.parenthesize(&callee, node.arguments())
    }

    fn visit_get_expr(&mut self, node: &Get) -> String {
        self.parenthesize("get!", [&**node.object()])
    }

    fn visit_grouping_expr(&mut self, node: &Grouping) -> String {
        self.parenthesize("group", [&**node.expression()])
    }

    fn visit_literal_expr(&mut self, node: &Literal) -> String {
        node.value().to_string()
    }

    fn visit_logical_expr(&mut self, node: &Logical) -> String {
        self.parenthesize(&node.operator().lexeme, [&**node.left(), &**node.right()])
    }

    fn visit_set_expr(&mut self, node: &Set) -> String {
        self.parenthesize("set!", [&**node.object(), &**node.value()])
    }

    fn visit_this_expr(&mut self, _: &This) -> String {
        "this!".to_owned()
    }

    fn visit_unary_expr(&mut self, node: &Unary) -> String {
        self.parenthesize(&node.operator().lexeme, [&**node.right()])
    }

    fn visit_variable_expr(&mut self, node: &Variable) -> String {
        node.name().lexeme.clone()
    }
}

impl StmtVisitor for AstPrinter {
    type Output = String;

    fn visit_block_stmt(&mut self, node: &Block) -> String {
        self.block("block", node.statements())
    }

    fn visit_class_stmt(&mut self, node: &Class) -> String {
        let name = format!("class {}", node.name().lexeme);
        self.list(&name, node.methods(), Self::visit_function_stmt)
    }

    fn visit_expression_stmt(&mut self, node: &Expression) -> String {
        self.parenthesize("expr", [node.expression()])
    }

    fn visit_function_stmt(&mut self, node: &Function) -> String {
        let mut head = format!("{} {}", node.kind(), node.name().lexeme);
        if node.kind().has_formal_parameters() {
            let params: Vec<_> = node.params().iter().map(|p| p.lexeme.as_str()).collect();
            head.push_str(&format!(" ({})", params.join(" ")));
        }
        self.block(&head, node.body())
    }

    fn visit_if_stmt(&mut self, node: &If) -> String {
        let condition = node.condition().accept(self);
        let then_branch = node.then_branch().accept(self);
        match node.else_branch() {
            Some(else_branch) => {
                let else_branch = else_branch.accept(self);
                format!("(if {condition} {then_branch} {else_branch})")
            }
            None => format!("(if {condition} {then_branch})"),
        }
    }

    fn visit_print_stmt(&mut self, node: &Print) -> String {
        self.parenthesize("print", [node.expression()])
    }

    fn visit_return_stmt(&mut self, node: &Return) -> String {
        self.parenthesize("return", node.value())
    }

    fn visit_var_stmt(&mut self, node: &Var) -> String {
        let name = format!("var {}", node.name().lexeme);
        self.parenthesize(&name, node.initializer())
    }

    fn visit_while_stmt(&mut self, node: &While) -> String {
        let condition = node.condition().accept(self);
        let body = node.body().accept(self);
        format!("(while {condition} {body})")
    }
}
