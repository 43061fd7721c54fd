#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) lexeme: String,
    pub(crate) line: usize,
}

#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    LeftParen, RightParen, LeftBrace, RightBrace,
    Minus, Plus, Slash, Star,

    Bang,
    Equal, EqualEqual,

    Identifier, Number(f64),

    Else, Halt, If, Input, Print,
}
