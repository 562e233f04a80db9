//! lazycalc - a lazily-evaluated postfix calculator
//!
//! # Overview
//!
//! Input is a string of single-character tokens in postfix (reverse-Polish)
//! order. Digit literals push a value, every other character names a binary
//! operator from a user-extensible table. Parsing builds a tree of deferred
//! computations ([`Thunk`]s); nothing is computed until the result is
//! forced.
//!
//! ```text
//! 42+        4 + 2 = 6
//! 24-        2 - 4 = -2   (the deeper operand comes first)
//! 42-2-      (4 - 2) - 2 = 0
//! ```
//!
//! # Lazy operators
//!
//! An operator receives its two operands unforced and decides whether, how
//! often and in what order to force them. That is enough to build
//! conditionals, sequencing and loops as ordinary operators:
//!
//! ```rust
//! use lazycalc::{LazyCalculator, Thunk};
//!
//! let mut calc = LazyCalculator::new();
//! calc.register('?', |cond: Thunk, then: Thunk| {
//!     if cond.force() != 0 { then.force() } else { 0 }
//! }).unwrap();
//!
//! // The right branch divides by zero but is never forced
//! assert_eq!(calc.calculate("040/?").unwrap(), 0);
//! assert_eq!(calc.calculate("242+?").unwrap(), 6);
//! ```
//!
//! Forcing is never memoized: a thunk forced twice runs twice, side effects
//! included.

pub mod calculator;
pub mod combinators;
#[cfg(feature = "config")]
pub mod config;
pub mod error;
pub mod lexer;
pub mod literal;
pub mod parser;
pub mod registry;
pub mod thunk;

// Re-export commonly used items
pub use calculator::LazyCalculator;
pub use combinators::{shared_buffer, SharedBuffer};
#[cfg(feature = "config")]
pub use config::{CalcConfig, ConfigError};
pub use error::{CalcError, ErrorKind, SyntaxError};
pub use lexer::{lex, Token};
pub use literal::LiteralSet;
pub use parser::{parse, Parser};
pub use registry::Registry;
pub use thunk::{Int, Operator, Thunk, TraceLabel};

/// Convenience function to evaluate an expression with the stock operators
pub fn calculate(input: &str) -> Result<Int, CalcError> {
    LazyCalculator::new().calculate(input)
}
