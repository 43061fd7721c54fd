use std::collections::HashMap;

use crate::{
    error::{Error, Result},
    token::Token,
};

/// The single global variable store. Blocks do not open new scopes.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Environment {
    values: HashMap<String, f64>,
}

impl Environment {
    pub(crate) fn new() -> Self {
        Self { values: HashMap::new() }
    }

    pub(crate) fn get(&self, name: &Token) -> Result<f64> {
        self.values.get(&name.lexeme)
            .copied()
            .ok_or_else(|| Error::undefined_name(name))
    }

    /// Binds `name`, replacing any earlier value.
    pub(crate) fn assign<S: Into<String>>(&mut self, name: S, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::RuntimeErrorKind, token::TokenKind};

    fn name(lexeme: &str) -> Token {
        Token { kind: TokenKind::Identifier, lexeme: lexeme.into(), line: 4 }
    }

    #[test]
    fn last_write_wins() -> Result<()> {
        let mut env = Environment::new();
        env.assign("x", 1.0);
        env.assign("x", 2.0);
        assert_eq!(2.0, env.get(&name("x"))?);
        Ok(())
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut env = Environment::new();
        env.assign("x", 1.0);
        assert_eq!(None, env.lookup("X"));
    }

    #[test]
    fn missing_name_is_a_name_error() {
        let e = Environment::new().get(&name("nope")).unwrap_err();
        assert_eq!(Some(RuntimeErrorKind::Name), e.runtime_cause());
        assert_eq!(Some(4), e.line());
    }
}
