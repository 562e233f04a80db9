//! Operator registry
//!
//! Maps a single character to its [`Operator`]. Entries are insert-only:
//! once a character has an operator it keeps it for the registry's
//! lifetime. Digit literals of the active [`LiteralSet`] are reserved and
//! can never become operators.

use std::collections::HashMap;

use crate::error::CalcError;
use crate::literal::LiteralSet;
use crate::thunk::{Operator, Thunk};

#[derive(Debug, Clone)]
pub struct Registry {
    operators: HashMap<char, Operator>,
    literals: LiteralSet,
}

/// The four arithmetic operators every registry starts with
fn builtin_operators() -> [(char, Operator); 4] {
    [
        ('+', Operator::new(|a: Thunk, b: Thunk| a.force() + b.force())),
        ('-', Operator::new(|a: Thunk, b: Thunk| a.force() - b.force())),
        ('*', Operator::new(|a: Thunk, b: Thunk| a.force() * b.force())),
        ('/', Operator::new(|a: Thunk, b: Thunk| a.force() / b.force())),
    ]
}

impl Registry {
    /// A registry with no operators at all
    pub fn empty(literals: LiteralSet) -> Self {
        Registry {
            operators: HashMap::new(),
            literals,
        }
    }

    /// A registry seeded with `+ - * /`
    pub fn with_builtins(literals: LiteralSet) -> Self {
        let mut registry = Self::empty(literals);
        // Literal sets only hold digits, so the seed can't collide with them
        registry.operators.extend(builtin_operators());
        registry
    }

    /// Add `op` under `token`. Fails without side effects if the token is
    /// a literal or already has an operator.
    pub fn register(&mut self, token: char, op: impl Into<Operator>) -> Result<(), CalcError> {
        if self.is_reserved(token) {
            return Err(CalcError::OperatorAlreadyDefined(token));
        }
        self.operators.insert(token, op.into());
        Ok(())
    }

    pub fn lookup(&self, token: char) -> Result<&Operator, CalcError> {
        self.operators
            .get(&token)
            .ok_or(CalcError::UnknownOperator(token))
    }

    pub fn contains(&self, token: char) -> bool {
        self.operators.contains_key(&token)
    }

    /// True if `token` is a literal or already names an operator
    pub fn is_reserved(&self, token: char) -> bool {
        self.literals.contains(token) || self.contains(token)
    }

    pub fn literals(&self) -> &LiteralSet {
        &self.literals
    }

    /// Registered operator characters, sorted
    pub fn tokens(&self) -> Vec<char> {
        let mut tokens: Vec<char> = self.operators.keys().copied().collect();
        tokens.sort_unstable();
        tokens
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtins(LiteralSet::default())
    }
}
