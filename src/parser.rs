use std::iter::Peekable;

use crate::{
    error::{Error, Result},
    expr::{self, Expr},
    stmt::{self, Stmt},
    token::*,
};

const EQUALITY_TOKENS: &'static [&'static TokenKind] = &[
    &TokenKind::EqualEqual,
];

const TERM_TOKENS: &'static [&'static TokenKind] = &[
    &TokenKind::Minus,
    &TokenKind::Plus,
];

const FACTOR_TOKENS: &'static [&'static TokenKind] = &[
    &TokenKind::Star,
    &TokenKind::Slash,
];

pub struct Parser<T> {
    tokens: T,
    // Line of the last consumed token, reported when input runs out.
    line: usize,
}

impl <T: Iterator<Item = Token>> Parser<Peekable<T>> {
    pub fn new(tokens: T) -> Self {
        let tokens = tokens.peekable();
        Parser { tokens, line: 1 }
    }

    /// Parses a whole program into a single top-level block.
    pub fn parse(&mut self) -> Result<Stmt> {
        let mut statements = Vec::new();
        while self.tokens.peek().is_some() {
            statements.push(self.statement()?);
        }
        tracing::debug!(count = statements.len(), "parsed top-level statements");
        Ok(Stmt::Block(stmt::Block { brace: None, statements }))
    }

    fn statement(&mut self) -> Result<Stmt> {
        if let Some(brace) = self.match_single(&TokenKind::LeftBrace) {
            self.block(brace)
        } else if let Some(keyword) = self.match_single(&TokenKind::If) {
            self.if_statement(keyword)
        } else if let Some(keyword) = self.match_single(&TokenKind::Halt) {
            Ok(Stmt::Halt(stmt::Halt { keyword }))
        } else {
            let expression = self.expression()?;
            Ok(Stmt::Expression(stmt::Expression { expression }))
        }
    }

    fn block(&mut self, brace: Token) -> Result<Stmt> {
        let mut statements = Vec::new();

        while !self.check_next(&TokenKind::RightBrace) {
            if self.tokens.peek().is_none() {
                return Err(Error::unexpected_end(self.line, "Expected '}' after block."))
            }
            statements.push(self.statement()?);
        }

        self.consume(&TokenKind::RightBrace, "Expected '}' after block.")?;
        Ok(Stmt::Block(stmt::Block { brace: Some(brace), statements }))
    }

    fn if_statement(&mut self, keyword: Token) -> Result<Stmt> {
        let condition = self.expression()?;
        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_single(&TokenKind::Else).is_some() {
            Some(Box::new(self.statement()?))
        } else { None };

        Ok(Stmt::If(stmt::If { keyword, condition, then_branch, else_branch }))
    }

    fn expression(&mut self) -> Result<Expr> {
        self.assignment()
    }

    fn assignment(&mut self) -> Result<Expr> {
        // A parenthesised variable parses to a bare `Variable`, so remember
        // whether the target was wrapped.
        let grouped = self.check_next(&TokenKind::LeftParen);
        let expr = self.equality()?;
        if let Some(equals) = self.match_single(&TokenKind::Equal) {
            match expr {
                Expr::Variable(lhs) if !grouped => {
                    let value = Box::new(self.assignment()?);
                    Ok(Expr::Assign(expr::Assign { name: lhs.name, value }))
                },
                _ => Err(Error::syntactic(&equals, "Invalid assignment target.")),
            }
        } else {
            Ok(expr)
        }
    }

    fn equality(&mut self) -> Result<Expr> {
        self.match_binary_precedence_with_tokens(
            Self::term,
            EQUALITY_TOKENS
        )
    }

    fn term(&mut self) -> Result<Expr> {
        self.match_binary_precedence_with_tokens(
            Self::factor,
            TERM_TOKENS
        )
    }

    fn factor(&mut self) -> Result<Expr> {
        self.match_binary_precedence_with_tokens(
            Self::unary,
            FACTOR_TOKENS
        )
    }

    fn unary(&mut self) -> Result<Expr> {
        if let Some(op) = self.match_single(&TokenKind::Bang) {
            let right = Box::new(self.unary()?);
            Ok(Expr::Unary(expr::Unary { op, right }))
        } else {
            self.primary()
        }
    }

    fn primary(&mut self) -> Result<Expr> {
        let next = self.advance()
            .ok_or_else(|| Error::unexpected_end(self.line, "Expected expression."))?;

        match next.kind {
            TokenKind::Number(value) => Ok(Expr::Literal(expr::Literal { token: next, value })),
            TokenKind::Identifier => Ok(Expr::Variable(expr::Variable { name: next })),
            TokenKind::Input => Ok(Expr::Input(expr::Input { keyword: next })),
            TokenKind::Print => {
                let value = Box::new(self.expression()?);
                Ok(Expr::Print(expr::Print { keyword: next, value }))
            },
            TokenKind::LeftParen => {
                let expression = self.expression()?;
                self.consume(&TokenKind::RightParen, "Expected ')' after expression.")?;
                Ok(expression)
            },
            _ => Err(Error::syntactic(&next, "Expected expression.")),
        }
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.next()?;
        self.line = token.line;
        Some(token)
    }

    fn check_next(&mut self, kind: &TokenKind) -> bool {
        self.tokens.peek()
            .map(|t| &t.kind == kind)
            .unwrap_or(false)
    }

    fn consume(&mut self, kind: &TokenKind, error_msg: &str) -> Result<Token> {
        if let Some(token) = self.match_single(kind) {
            Ok(token)
        } else {
            Err(match self.advance() {
                Some(t) => Error::syntactic(&t, error_msg),
                None => Error::unexpected_end(self.line, error_msg),
            })
        }
    }

    fn match_binary_precedence_with_tokens(
        &mut self,
        parse: impl Fn(&mut Self) -> Result<Expr>,
        kinds: &[&TokenKind]
    ) -> Result<Expr> {
        let mut e = parse(self)?;

        while let Some(op) = self.match_any(kinds) {
            let right = Box::new(parse(self)?);
            e = Expr::Binary(expr::Binary { left: Box::new(e), op, right })
        }

        Ok(e)
    }

    fn match_single(&mut self, kind: &TokenKind) -> Option<Token> {
        if self.check_next(kind) {
            self.advance()
        } else {
            None
        }
    }

    fn match_any(&mut self, kinds: &[&TokenKind]) -> Option<Token> {
        kinds.iter().find_map(|k| self.match_single(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{printer, scanner::Scanner};
    use pretty_assertions::assert_eq;

    fn parse(src: &str) -> Result<Stmt> {
        let tokens = Scanner::new(src).scan_tokens()?;
        Parser::new(tokens.into_iter()).parse()
    }

    fn assert_source_parses_to(src: &str, expected: &str) -> Result<()> {
        assert_eq!(expected, printer::print(&parse(src)?));
        Ok(())
    }

    fn parse_error(src: &str) -> Error {
        parse(src).unwrap_err()
    }

    #[test]
    fn number_literal_token() -> Result<()> {
        let tokens = vec![
            Token { kind: TokenKind::Number(5.1), lexeme: "5.1".into(), line: 1 },
        ];
        let mut parser = Parser::new(tokens.into_iter());
        assert_eq!("5.1", printer::print_expr(&parser.expression()?));
        Ok(())
    }

    #[test]
    fn empty_program_is_an_empty_block() -> Result<()> {
        assert_source_parses_to("", "(program)")
    }

    #[test]
    fn factor_binds_tighter_than_term() -> Result<()> {
        assert_source_parses_to("1 + 2 * 3 - 4", "(program (- (+ 1 (* 2 3)) 4))")
    }

    #[test]
    fn equality_folds_left() -> Result<()> {
        assert_source_parses_to("1 == 1 == 1", "(program (== (== 1 1) 1))")
    }

    #[test]
    fn assignment_is_right_associative() -> Result<()> {
        assert_source_parses_to("a = b = 1 + 2", "(program (= a (= b (+ 1 2))))")
    }

    #[test]
    fn grouping_overrides_precedence() -> Result<()> {
        assert_source_parses_to("(1 + 2) * 3", "(program (* (+ 1 2) 3))")
    }

    #[test]
    fn bang_is_prefix_and_nests() -> Result<()> {
        assert_source_parses_to("!!x == 1", "(program (== (! (! x)) 1))")
    }

    #[test]
    fn print_takes_a_whole_expression() -> Result<()> {
        assert_source_parses_to("print x = input", "(program (print (= x input)))")
    }

    #[test]
    fn if_else_with_blocks() -> Result<()> {
        assert_source_parses_to(
            "if x == 1 { print 5 } else { print 6 halt }",
            "(program (if (== x 1) (block (print 5)) (block (print 6) halt)))"
        )
    }

    #[test]
    fn else_binds_to_nearest_if() -> Result<()> {
        assert_source_parses_to(
            "if a if b print 1 else print 2",
            "(program (if a (if b (print 1) (print 2))))"
        )
    }

    #[test]
    fn statements_need_no_separator() -> Result<()> {
        assert_source_parses_to("x = 1 y = x print y", "(program (= x 1) (= y x) (print y))")
    }

    #[test]
    fn literal_assignment_target_is_rejected() {
        let e = parse_error("1 = 2");
        assert!(e.is_syntactic());
        assert_eq!("Invalid assignment target.", e.message());
    }

    #[test]
    fn grouped_assignment_target_is_rejected() {
        let e = parse_error("(x) = 2");
        assert_eq!("Invalid assignment target.", e.message());
    }

    #[test]
    fn unclosed_block_fails_at_end() {
        let e = parse_error("{ x = 1\n");
        assert!(e.is_syntactic());
        assert_eq!("[line 1] Error at end: Expected '}' after block.", e.to_string());
    }

    #[test]
    fn missing_right_paren() {
        let e = parse_error("(1 + 2\n}");
        assert_eq!("[line 2] Error at '}': Expected ')' after expression.", e.to_string());
    }

    #[test]
    fn stray_operator_is_not_an_expression() {
        let e = parse_error("x = 1\n) 2");
        assert_eq!("[line 2] Error at ')': Expected expression.", e.to_string());
    }

    #[test]
    fn dangling_operator_at_end() {
        let e = parse_error("1 +");
        assert_eq!("[line 1] Error at end: Expected expression.", e.to_string());
    }

    #[test]
    fn unary_minus_does_not_exist() {
        assert!(parse_error("-1").is_syntactic());
    }

    #[test]
    fn lone_else_is_rejected() {
        assert!(parse_error("else print 1").is_syntactic());
    }
}
