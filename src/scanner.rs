use crate::{
    error::{Error, Result},
    token::{Token, TokenKind},
};
use peekmore::{PeekMore, PeekMoreIterator};
use phf::phf_map;
use std::str::Chars;

static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "else" => TokenKind::Else,
    "halt" => TokenKind::Halt,
    "if" => TokenKind::If,
    "input" => TokenKind::Input,
    "print" => TokenKind::Print,
};

pub struct Scanner<'a> {
    src: PeekMoreIterator<Chars<'a>>,
    lexeme_buffer: String,
    line: usize,
}

impl <'a> Iterator for Scanner<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Result<Token>> {
        while self.src.peek().is_some() {
            let line = self.line;
            let kind = self.next_token_kind();

            let lexeme = self.lexeme_buffer.clone();
            self.lexeme_buffer.clear();

            if let Some(kind) = kind {
                return Some(kind.map(|kind| Token { kind, lexeme, line }))
            }
        }
        None
    }
}

impl <'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src: src.chars().peekmore(),
            lexeme_buffer: String::new(),
            line: 1,
        }
    }

    /// Scans the whole source, stopping at the first unrecognised character.
    pub fn scan_tokens(self) -> Result<Vec<Token>> {
        let tokens = self.collect::<Result<Vec<Token>>>()?;
        tracing::debug!(count = tokens.len(), "scanned tokens");
        Ok(tokens)
    }

    /// Consumes one character (plus whatever belongs to the same token).
    /// `None` means the character produced no token.
    fn next_token_kind(&mut self) -> Option<Result<TokenKind>> {
        let next_char = self.src.next()?;
        self.lexeme_buffer.push(next_char);

        use TokenKind::*;
        match next_char {
            '(' => Some(Ok(LeftParen)),
            ')' => Some(Ok(RightParen)),
            '{' => Some(Ok(LeftBrace)),
            '}' => Some(Ok(RightBrace)),
            '-' => Some(Ok(Minus)),
            '+' => Some(Ok(Plus)),
            '*' => Some(Ok(Star)),
            '/' => Some(Ok(Slash)),
            '!' => Some(Ok(Bang)),
            '=' => Some(Ok(if self.does_next_match('=') { EqualEqual } else { Equal })),
            ' ' | '\t' => None,
            '\n' => {
                self.line += 1;
                None
            },
            c if c.is_ascii_digit() => Some(self.extract_number()),
            c if c.is_ascii_alphabetic() => Some(self.extract_identifier()),
            c => Some(Err(Error::lexical(self.line, format!("Unexpected character '{}'.", c)))),
        }
    }

    fn does_next_match(&mut self, c: char) -> bool {
        match self.src.peek() {
            Some(next) if c == *next => {
                self.lexeme_buffer.push(c);
                self.src.next();
                true
            }
            _ => false,
        }
    }

    fn extract_number(&mut self) -> Result<TokenKind> {
        self.advance_while(|n| n.is_ascii_digit());

        let has_fraction = self.src.peek() == Some(&'.')
            && self.src.peek_next().map_or(false, |c| c.is_ascii_digit());
        self.src.reset_cursor();

        if has_fraction {
            self.does_next_match('.');
            self.advance_while(|n| n.is_ascii_digit());
        }

        // The lexeme is always digits with an optional fraction, which f64
        // always accepts; the error arm only keeps the types lined up.
        match self.lexeme_buffer.parse() {
            Err(_) => Err(Error::lexical(
                self.line,
                format!("Could not convert {} into a number.", self.lexeme_buffer)
            )),
            Ok(number) => Ok(TokenKind::Number(number)),
        }
    }

    fn extract_identifier(&mut self) -> Result<TokenKind> {
        self.advance_while(|n| n.is_ascii_alphanumeric());

        match KEYWORDS.get(self.lexeme_buffer.as_str()) {
            Some(keyword) => Ok(keyword.clone()),
            None => Ok(TokenKind::Identifier),
        }
    }

    fn advance_while(&mut self, should_continue: impl Fn(&char) -> bool) {
        while let Some(next) = self.src.peek() {
            if !should_continue(next) { break }
            let next = *next;
            self.lexeme_buffer.push(next);
            self.src.next();
        }
    }
}
