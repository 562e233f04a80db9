//! The calculator: an operator registry plus the lex/parse pipeline.

use crate::error::CalcError;
use crate::lexer::lex;
use crate::literal::LiteralSet;
use crate::parser::Parser;
use crate::registry::Registry;
use crate::thunk::{Int, Operator, Thunk};

/// A postfix calculator whose results are computed only when forced
#[derive(Debug, Clone, Default)]
pub struct LazyCalculator {
    registry: Registry,
    trace_mode: bool,
}

impl LazyCalculator {
    /// Calculator with the sparse literal set (`0`, `2`, `4`) and `+ - * /`
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_literals(literals: LiteralSet) -> Self {
        LazyCalculator {
            registry: Registry::with_builtins(literals),
            trace_mode: false,
        }
    }

    /// Enable or disable trace mode
    pub fn set_trace_mode(&mut self, enabled: bool) {
        self.trace_mode = enabled;
    }

    pub fn trace_mode(&self) -> bool {
        self.trace_mode
    }

    /// Register a new operator. Literal characters and already defined
    /// operators are rejected with [`CalcError::OperatorAlreadyDefined`].
    pub fn register(&mut self, token: char, op: impl Into<Operator>) -> Result<(), CalcError> {
        self.registry.register(token, op)
    }

    /// Build the lazy computation for `input` without forcing it
    pub fn parse(&self, input: &str) -> Result<Thunk, CalcError> {
        let tokens = lex(input, self.registry.literals())?;
        Parser::new(&self.registry)
            .with_trace(self.trace_mode)
            .parse(&tokens)
    }

    /// Parse `input` and force the result once
    pub fn calculate(&self, input: &str) -> Result<Int, CalcError> {
        let thunk = self.parse(input)?;
        Ok(thunk.force())
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
