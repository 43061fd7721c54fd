use crate::token::Token;

generate_ast!(
    Expr,
    [
        Assign   => visit_assign_expr { name: Token, value: Box<Expr> };
        Binary   => visit_binary_expr { left: Box<Expr>, op: Token, right: Box<Expr> };
        Input    => visit_input_expr { keyword: Token };
        Literal  => visit_literal_expr { token: Token, value: f64 };
        Print    => visit_print_expr { keyword: Token, value: Box<Expr> };
        Unary    => visit_unary_expr { op: Token, right: Box<Expr> };
        Variable => visit_variable_expr { name: Token };
    ]
);

impl Expr {
    /// Token the expression was parsed from, used to place runtime errors.
    pub(crate) fn token(&self) -> &Token {
        match self {
            Expr::Assign(a) => &a.name,
            Expr::Binary(b) => &b.op,
            Expr::Input(i) => &i.keyword,
            Expr::Literal(l) => &l.token,
            Expr::Print(p) => &p.keyword,
            Expr::Unary(u) => &u.op,
            Expr::Variable(v) => &v.name,
        }
    }
}
