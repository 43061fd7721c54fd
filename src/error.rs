use std::result;
use std::fmt::{self, Display};

use crate::token::Token;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    Lexical { line: usize },
    /// `lexeme` is `None` when the parser ran out of tokens.
    Syntactic { line: usize, lexeme: Option<String> },
    Runtime { line: usize, cause: RuntimeErrorKind },
    Io(std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// Read of a variable that was never assigned.
    Name,
    /// A value could not be produced, e.g. unparsable input.
    Value,
    /// Division by zero.
    Arithmetic,
}

impl Display for RuntimeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use RuntimeErrorKind::*;
        match self {
            Name => write!(f, "NameError"),
            Value => write!(f, "ValueError"),
            Arithmetic => write!(f, "ArithmeticError"),
        }
    }
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn lexical<S: Into<String>>(line: usize, message: S) -> Error {
        let kind = ErrorKind::Lexical { line };
        Error { kind, message: message.into() }
    }

    pub fn syntactic<S: Into<String>>(token: &Token, message: S) -> Error {
        let kind = ErrorKind::Syntactic { line: token.line, lexeme: Some(token.lexeme.clone()) };
        Error { kind, message: message.into() }
    }

    pub fn unexpected_end<S: Into<String>>(line: usize, message: S) -> Error {
        let kind = ErrorKind::Syntactic { line, lexeme: None };
        Error { kind, message: message.into() }
    }

    pub fn undefined_name(name: &Token) -> Error {
        Error::runtime(name, RuntimeErrorKind::Name, format!("Name '{}' is not defined.", name.lexeme))
    }

    pub fn bad_value<S: Into<String>>(token: &Token, message: S) -> Error {
        Error::runtime(token, RuntimeErrorKind::Value, message)
    }

    pub fn arithmetic<S: Into<String>>(token: &Token, message: S) -> Error {
        Error::runtime(token, RuntimeErrorKind::Arithmetic, message)
    }

    fn runtime<S: Into<String>>(token: &Token, cause: RuntimeErrorKind, message: S) -> Error {
        let kind = ErrorKind::Runtime { line: token.line, cause };
        Error { kind, message: message.into() }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Source line the error was raised on, if it came from the program text.
    pub fn line(&self) -> Option<usize> {
        use ErrorKind::*;
        match self.kind() {
            Lexical { line } | Syntactic { line, .. } | Runtime { line, .. } => Some(*line),
            Io(_) => None,
        }
    }

    pub fn runtime_cause(&self) -> Option<RuntimeErrorKind> {
        match self.kind() {
            ErrorKind::Runtime { cause, .. } => Some(*cause),
            _ => None,
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self.kind(), ErrorKind::Lexical { .. })
    }

    pub fn is_syntactic(&self) -> bool {
        matches!(self.kind(), ErrorKind::Syntactic { .. })
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ErrorKind::*;
        match self.kind() {
            Lexical { line } => write!(f, "[line {}] Error: {}", line, self.message),
            Syntactic { line, lexeme: Some(lexeme) } => {
                write!(f, "[line {}] Error at '{}': {}", line, lexeme, self.message)
            },
            Syntactic { line, lexeme: None } => {
                write!(f, "[line {}] Error at end: {}", line, self.message)
            },
            Runtime { line, cause } => write!(f, "[line {}] {}: {}", line, cause, self.message),
            Io(e) => write!(f, "{}: {}", self.message, e),
        }
    }
}

impl From<Error> for std::io::Error {
    fn from(e: Error) -> std::io::Error {
        use std::io::ErrorKind::*;
        std::io::Error::new(Other, e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error { kind: ErrorKind::Io(e), message: "IO error".into() }
    }
}
