#[macro_use]
mod ast;

pub mod error;
mod environment;
pub mod expr;
pub mod interpreter;
pub mod parser;
pub mod printer;
pub mod scanner;
pub mod stmt;
pub mod token;

use std::io::{BufRead, Write};

pub use crate::{
    error::{Error, ErrorKind, Result, RuntimeErrorKind},
    interpreter::{Interpreter, Outcome},
};

use crate::{parser::Parser, scanner::Scanner, stmt::Stmt};

/// Scans and parses `source` into a program block.
pub fn parse(source: &str) -> Result<Stmt> {
    let tokens = Scanner::new(source).scan_tokens()?;
    Parser::new(tokens.into_iter()).parse()
}

/// Runs `source` to completion with a fresh environment.
pub fn run<R: BufRead, W: Write>(source: &str, input: R, output: W) -> Result<Outcome> {
    let program = parse(source)?;
    Interpreter::new(input, output).interpret(&program)
}
