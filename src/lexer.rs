//! Tokenization for lazycalc
//!
//! Every character is a token on its own: either a digit literal from the
//! active [`LiteralSet`] or an operator key. Whitespace has no special
//! meaning. A token's index in the returned vector is its char position.

use nom::{
    branch::alt,
    character::complete::anychar,
    combinator::{map, map_opt},
    multi::many0,
    IResult,
};
use std::fmt;

use crate::error::{CalcError, SyntaxError};
use crate::literal::LiteralSet;
use crate::thunk::Int;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A digit literal and the value it denotes
    Literal(Int),
    /// Anything else: a key into the operator registry
    Operator(char),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(v) => write!(f, "{}", v),
            Token::Operator(c) => write!(f, "'{}'", c),
        }
    }
}

/// Parse a literal character from the active set
fn literal<'a>(input: &'a str, literals: &LiteralSet) -> IResult<&'a str, Token> {
    map_opt(anychar, |c| literals.value_of(c).map(Token::Literal))(input)
}

/// Parse any other character as an operator key
fn operator(input: &str) -> IResult<&str, Token> {
    map(anychar, Token::Operator)(input)
}

/// Split the input into tokens
pub fn lex(input: &str, literals: &LiteralSet) -> Result<Vec<Token>, CalcError> {
    let (rest, tokens) = many0(alt((|i| literal(i, literals), operator)))(input)
        .map_err(|_| SyntaxError::Malformed { position: 0 })?;

    if !rest.is_empty() {
        let position = input.chars().count() - rest.chars().count();
        return Err(SyntaxError::Malformed { position }.into());
    }

    Ok(tokens)
}
