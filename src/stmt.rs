use crate::expr::Expr;
use crate::token::Token;

generate_ast!(
    Stmt,
    [
        // `brace` is `None` for the block wrapping a whole program.
        Block      => visit_block_stmt { brace: Option<Token>, statements: Vec<Stmt> };
        Expression => visit_expression_stmt { expression: Expr };
        Halt       => visit_halt_stmt { keyword: Token };
        If         => visit_if_stmt {
            keyword: Token,
            condition: Expr,
            then_branch: Box<Stmt>,
            else_branch: Option<Box<Stmt>>
        };
    ]
);
