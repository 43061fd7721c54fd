use crate::{
    expr::{self, Expr},
    stmt::{self, Stmt},
};

/// Renders a parsed program as an s-expression, e.g. `(program (= x 1))`.
pub fn print(s: &Stmt) -> String {
    let mut printer = AstPrinter {};
    s.accept(&mut printer)
}

pub fn print_expr(e: &Expr) -> String {
    let mut printer = AstPrinter {};
    e.accept(&mut printer)
}

struct AstPrinter;

impl AstPrinter {
    fn parenthesize(&mut self, name: &str, parts: Vec<String>) -> String {
        let mut s = String::new();
        s.push('(');
        s.push_str(name);

        for part in parts.iter() {
            s.push(' ');
            s.push_str(part.as_str());
        }

        s.push(')');
        s
    }
}

impl stmt::Visitor<String> for AstPrinter {
    fn visit_block_stmt(&mut self, b: &stmt::Block) -> String {
        let name = if b.brace.is_some() { "block" } else { "program" };
        let parts: Vec<String> = b.statements.iter().map(|s| s.accept(self)).collect();
        self.parenthesize(name, parts)
    }

    fn visit_expression_stmt(&mut self, e: &stmt::Expression) -> String {
        e.expression.accept(self)
    }

    fn visit_halt_stmt(&mut self, _h: &stmt::Halt) -> String {
        "halt".to_string()
    }

    fn visit_if_stmt(&mut self, i: &stmt::If) -> String {
        let mut parts: Vec<String> = vec![i.condition.accept(self), i.then_branch.accept(self)];
        if let Some(else_branch) = &i.else_branch {
            parts.push(else_branch.accept(self));
        }
        self.parenthesize("if", parts)
    }
}

impl expr::Visitor<String> for AstPrinter {
    fn visit_assign_expr(&mut self, a: &expr::Assign) -> String {
        let value: String = a.value.accept(self);
        self.parenthesize("=", vec![a.name.lexeme.clone(), value])
    }

    fn visit_binary_expr(&mut self, e: &expr::Binary) -> String {
        let parts: Vec<String> = vec![e.left.accept(self), e.right.accept(self)];
        self.parenthesize(e.op.lexeme.as_str(), parts)
    }

    fn visit_input_expr(&mut self, _i: &expr::Input) -> String {
        "input".to_string()
    }

    fn visit_literal_expr(&mut self, l: &expr::Literal) -> String {
        l.value.to_string()
    }

    fn visit_print_expr(&mut self, p: &expr::Print) -> String {
        let value: String = p.value.accept(self);
        self.parenthesize("print", vec![value])
    }

    fn visit_unary_expr(&mut self, u: &expr::Unary) -> String {
        let right: String = u.right.accept(self);
        self.parenthesize(u.op.lexeme.as_str(), vec![right])
    }

    fn visit_variable_expr(&mut self, v: &expr::Variable) -> String {
        v.name.lexeme.clone()
    }
}
