//! Postfix parser for lazycalc
//!
//! Walks the tokens left to right with a stack of thunks. Literals push a
//! literal thunk. Operators pop two thunks and push a composite thunk that
//! will hand both, unforced, to the operator when it is itself forced.
//! Parsing never performs arithmetic.

use crate::error::{CalcError, SyntaxError};
use crate::lexer::Token;
use crate::registry::Registry;
use crate::thunk::{Thunk, TraceLabel};

/// Parser state for a single parse call
pub struct Parser<'r> {
    registry: &'r Registry,
    stack: Vec<Thunk>,
    trace_mode: bool,
}

impl<'r> Parser<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Parser {
            registry,
            stack: Vec::new(),
            trace_mode: false,
        }
    }

    /// Print every parse step, and every forcing of the resulting thunks, to stderr
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace_mode = enabled;
        self
    }

    /// Consume all tokens and return the single resulting thunk, unforced
    pub fn parse(mut self, tokens: &[Token]) -> Result<Thunk, CalcError> {
        for (position, token) in tokens.iter().enumerate() {
            match *token {
                Token::Literal(value) => self.stack.push(Thunk::literal(value)),
                Token::Operator(c) => self.apply_operator(c, position)?,
            }

            if self.trace_mode {
                eprintln!(
                    "[trace] {:>3}: {:<6} depth {}",
                    position,
                    token.to_string(),
                    self.stack.len()
                );
            }
        }

        match self.stack.len() {
            0 => Err(SyntaxError::EmptyInput.into()),
            1 => self
                .stack
                .pop()
                .ok_or_else(|| SyntaxError::EmptyInput.into()),
            count => Err(SyntaxError::UnconsumedOperands { count }.into()),
        }
    }

    fn apply_operator(&mut self, token: char, position: usize) -> Result<(), CalcError> {
        // Unknown operators win over stack underflow
        let op = self.registry.lookup(token)?.clone();

        let depth = self.stack.len();
        let underflow = SyntaxError::StackUnderflow {
            operator: token,
            position,
            depth,
        };
        let (Some(top), Some(below)) = (self.stack.pop(), self.stack.pop()) else {
            return Err(underflow.into());
        };

        let composite = if self.trace_mode {
            Thunk::compose_traced(op, below, top, TraceLabel { token, position })
        } else {
            Thunk::compose(op, below, top)
        };
        self.stack.push(composite);
        Ok(())
    }
}

/// Parse tokens into a single lazy thunk
pub fn parse(registry: &Registry, tokens: &[Token]) -> Result<Thunk, CalcError> {
    Parser::new(registry).parse(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;
    use crate::literal::LiteralSet;
    use std::cell::Cell;
    use std::rc::Rc;

    fn parse_str(registry: &Registry, input: &str) -> Result<Thunk, CalcError> {
        let tokens = lex(input, registry.literals()).expect("lex failed");
        parse(registry, &tokens)
    }

    #[test]
    fn parse_single_literal() {
        let registry = Registry::default();
        assert_eq!(parse_str(&registry, "4").unwrap().force(), 4);
    }

    #[test]
    fn parse_binary_keeps_operand_order() {
        let registry = Registry::default();
        assert_eq!(parse_str(&registry, "24-").unwrap().force(), -2);
    }

    #[test]
    fn parse_empty_input() {
        let registry = Registry::default();
        assert_eq!(
            parse_str(&registry, "").unwrap_err(),
            CalcError::Syntax(SyntaxError::EmptyInput)
        );
    }

    #[test]
    fn parse_leftover_operands() {
        let registry = Registry::default();
        assert_eq!(
            parse_str(&registry, "424+").unwrap_err(),
            CalcError::Syntax(SyntaxError::UnconsumedOperands { count: 2 })
        );
    }

    #[test]
    fn parse_underflow_reports_position() {
        let registry = Registry::default();
        assert_eq!(
            parse_str(&registry, "4+").unwrap_err(),
            CalcError::Syntax(SyntaxError::StackUnderflow {
                operator: '+',
                position: 1,
                depth: 1,
            })
        );
    }

    #[test]
    fn unknown_operator_checked_before_depth() {
        let registry = Registry::default();
        assert_eq!(
            parse_str(&registry, "&").unwrap_err(),
            CalcError::UnknownOperator('&')
        );
        assert_eq!(
            parse_str(&registry, "4&").unwrap_err(),
            CalcError::UnknownOperator('&')
        );
    }

    #[test]
    fn first_error_stops_scanning() {
        let registry = Registry::default();
        // Underflow at '+' is hit before the unknown '&'
        assert_eq!(
            parse_str(&registry, "4+&").unwrap_err().kind(),
            crate::error::ErrorKind::Syntax
        );
        // Unknown '&' is hit before the trailing underflow
        assert_eq!(
            parse_str(&registry, "42&+").unwrap_err(),
            CalcError::UnknownOperator('&')
        );
    }

    #[test]
    fn parse_does_not_force_anything() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut registry = Registry::with_builtins(LiteralSet::sparse());
        registry
            .register('c', move |a: Thunk, b: Thunk| {
                counter.set(counter.get() + 1);
                a.force() + b.force()
            })
            .unwrap();

        let thunk = parse_str(&registry, "42c2c").unwrap();
        assert_eq!(calls.get(), 0);

        assert_eq!(thunk.force(), 8);
        assert_eq!(calls.get(), 2);

        assert_eq!(thunk.force(), 8);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn deep_chain_reports_unknown_operator() {
        let registry = Registry::default();
        let input = format!("4{}&", "2+".repeat(100_000));
        assert_eq!(
            parse_str(&registry, &input).unwrap_err(),
            CalcError::UnknownOperator('&')
        );
    }

    #[test]
    fn deep_chain_with_leftovers_reports_syntax_error() {
        let registry = Registry::default();
        let input = format!("4{}4", "2+".repeat(100_000));
        assert_eq!(
            parse_str(&registry, &input).unwrap_err(),
            CalcError::Syntax(SyntaxError::UnconsumedOperands { count: 2 })
        );
    }

    #[test]
    fn operator_resolved_at_parse_time() {
        let registry = Registry::default();
        let thunk = parse_str(&registry, "42*").unwrap();
        drop(registry);
        assert_eq!(thunk.force(), 8);
    }

    #[test]
    fn traced_parse_gives_same_result() {
        let registry = Registry::default();
        let tokens = lex("42-2-", registry.literals()).unwrap();
        let thunk = Parser::new(&registry).with_trace(true).parse(&tokens).unwrap();
        assert_eq!(thunk.force(), 0);
    }
}
