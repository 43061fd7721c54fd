use std::io::{BufRead, Write};

use crate::{
    environment::Environment,
    error::{Error, Result},
    expr::{self, Expr},
    stmt::{self, Stmt},
    token::{Token, TokenKind},
};

/// How a run ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every statement was executed.
    Completed,
    /// A `halt` statement stopped the run.
    Halted,
}

/// Tree-walking evaluator. Reads `input` lines from `reader` and writes
/// `print` output to `writer`. The environment outlives a single
/// `interpret` call, so one interpreter can run several programs in turn.
pub struct Interpreter<R, W> {
    environment: Environment,
    reader: R,
    writer: W,
    prompt: Option<String>,
}

impl <R: BufRead, W: Write> Interpreter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Interpreter { environment: Environment::new(), reader, writer, prompt: None }
    }

    /// Writes `prompt` to the output before every `input` read.
    pub fn with_prompt<S: Into<String>>(mut self, prompt: S) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn interpret(&mut self, program: &Stmt) -> Result<Outcome> {
        let outcome = self.execute(program);
        match &outcome {
            Ok(outcome) => tracing::debug!(?outcome, "run finished"),
            Err(e) => tracing::debug!(error = %e, "run aborted"),
        }
        self.writer.flush()?;
        outcome
    }

    /// Current value of a global variable.
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.environment.lookup(name)
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Writes `prompt`, then reads the next line from the interpreter's own
    /// reader. `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None)
        }
        Ok(Some(line))
    }

    /// Runs one program per line until end of input or `halt`. Program lines
    /// and `input` lines come from the same reader. Errors are reported to
    /// `err_out` and the session carries on.
    pub fn run_prompt<E: Write>(&mut self, err_out: &mut E) -> Result<()> {
        while let Some(line) = self.read_line("> ")? {
            match crate::parse(&line).and_then(|program| self.interpret(&program)) {
                Ok(Outcome::Halted) => break,
                Ok(Outcome::Completed) => {},
                Err(e) => writeln!(err_out, "{}", e)?,
            }
        }
        Ok(())
    }

    fn execute(&mut self, s: &Stmt) -> Result<Outcome> {
        s.accept(self)
    }

    /// Evaluates an expression whose value is needed.
    fn evaluate(&mut self, e: &Expr) -> Result<f64> {
        let value: Option<f64> = e.accept(self)?;
        value.ok_or_else(|| Error::bad_value(e.token(), "'print' does not produce a value."))
    }

    fn read_number(&mut self, keyword: &Token) -> Result<f64> {
        if let Some(prompt) = &self.prompt {
            write!(self.writer, "{}", prompt)?;
            self.writer.flush()?;
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(Error::bad_value(keyword, "No input left to read."))
        }

        let text = line.trim();
        text.parse().map_err(|_| {
            Error::bad_value(keyword, format!("Could not convert '{}' into a number.", text))
        })
    }
}

impl <R: BufRead, W: Write> stmt::Visitor<Result<Outcome>> for Interpreter<R, W> {
    fn visit_block_stmt(&mut self, b: &stmt::Block) -> Result<Outcome> {
        for statement in b.statements.iter() {
            if self.execute(statement)? == Outcome::Halted {
                return Ok(Outcome::Halted)
            }
        }
        Ok(Outcome::Completed)
    }

    fn visit_expression_stmt(&mut self, e: &stmt::Expression) -> Result<Outcome> {
        let _: Option<f64> = e.expression.accept(self)?;
        Ok(Outcome::Completed)
    }

    fn visit_halt_stmt(&mut self, h: &stmt::Halt) -> Result<Outcome> {
        tracing::trace!(line = h.keyword.line, "halt");
        Ok(Outcome::Halted)
    }

    fn visit_if_stmt(&mut self, i: &stmt::If) -> Result<Outcome> {
        if self.evaluate(&i.condition)? == 1.0 {
            self.execute(&i.then_branch)
        } else if let Some(else_branch) = &i.else_branch {
            self.execute(else_branch)
        } else {
            Ok(Outcome::Completed)
        }
    }
}

impl <R: BufRead, W: Write> expr::Visitor<Result<Option<f64>>> for Interpreter<R, W> {
    fn visit_assign_expr(&mut self, a: &expr::Assign) -> Result<Option<f64>> {
        let value = self.evaluate(&a.value)?;
        tracing::trace!(name = a.name.lexeme.as_str(), value, "assign");
        self.environment.assign(a.name.lexeme.as_str(), value);
        Ok(Some(value))
    }

    fn visit_binary_expr(&mut self, e: &expr::Binary) -> Result<Option<f64>> {
        let left = self.evaluate(&e.left)?;
        let right = self.evaluate(&e.right)?;

        let value = match e.op.kind {
            TokenKind::Plus => left + right,
            TokenKind::Minus => left - right,
            TokenKind::Star => left * right,
            TokenKind::Slash => {
                if right == 0.0 {
                    return Err(Error::arithmetic(&e.op, "Division by zero."))
                }
                left / right
            },
            TokenKind::EqualEqual => truth(left == right),
            _ => unreachable!("Binary operator must be one of + - * / ==."),
        };
        Ok(Some(value))
    }

    fn visit_input_expr(&mut self, i: &expr::Input) -> Result<Option<f64>> {
        self.read_number(&i.keyword).map(Some)
    }

    fn visit_literal_expr(&mut self, l: &expr::Literal) -> Result<Option<f64>> {
        Ok(Some(l.value))
    }

    fn visit_print_expr(&mut self, p: &expr::Print) -> Result<Option<f64>> {
        let value = self.evaluate(&p.value)?;
        writeln!(self.writer, "{}", value)?;
        Ok(None)
    }

    fn visit_unary_expr(&mut self, u: &expr::Unary) -> Result<Option<f64>> {
        let right = self.evaluate(&u.right)?;
        match u.op.kind {
            // Only exactly 1 counts as true here; every other value negates to 1.
            TokenKind::Bang => Ok(Some(truth(right != 1.0))),
            _ => unreachable!("Unary operator must be !."),
        }
    }

    fn visit_variable_expr(&mut self, v: &expr::Variable) -> Result<Option<f64>> {
        self.environment.get(&v.name).map(Some)
    }
}

fn truth(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}
