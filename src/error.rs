//! Error taxonomy shared by the registry, lexer and parser.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Operator '{operator}' at position {position} needs two operands, stack has {depth}")]
    StackUnderflow {
        operator: char,
        position: usize,
        depth: usize,
    },
    #[error("{count} operands left on the stack (missing operators)")]
    UnconsumedOperands { count: usize },
    #[error("Unreadable input at position {position}")]
    Malformed { position: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("Unknown operator '{0}'")]
    UnknownOperator(char),
    #[error("Operator '{0}' is already defined")]
    OperatorAlreadyDefined(char),
}

/// Coarse classification for callers that only care which kind of failure happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    UnknownOperator,
    OperatorAlreadyDefined,
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::Syntax(_) => ErrorKind::Syntax,
            CalcError::UnknownOperator(_) => ErrorKind::UnknownOperator,
            CalcError::OperatorAlreadyDefined(_) => ErrorKind::OperatorAlreadyDefined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(CalcError::from(SyntaxError::EmptyInput).kind(), ErrorKind::Syntax);
        assert_eq!(CalcError::UnknownOperator('&').kind(), ErrorKind::UnknownOperator);
        assert_eq!(
            CalcError::OperatorAlreadyDefined('+').kind(),
            ErrorKind::OperatorAlreadyDefined
        );
    }

    #[test]
    fn messages() {
        let err = CalcError::from(SyntaxError::StackUnderflow {
            operator: '+',
            position: 1,
            depth: 1,
        });
        assert_eq!(
            err.to_string(),
            "Syntax error: Operator '+' at position 1 needs two operands, stack has 1"
        );
        assert_eq!(CalcError::UnknownOperator('&').to_string(), "Unknown operator '&'");
    }
}
