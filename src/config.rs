//! Calculator configuration (lazycalc.toml)
//!
//! A configuration file picks the literal set, turns on trace mode and
//! registers extra operators built from [`crate::combinators`].

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::calculator::LazyCalculator;
use crate::combinators::{self, SharedBuffer};
use crate::error::CalcError;
use crate::literal::LiteralSet;
use crate::thunk::{Int, Operator};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Operator key must be a single character, got {0:?}")]
    InvalidToken(String),
    #[error(transparent)]
    Calc(#[from] CalcError),
}

/// Configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalcConfig {
    /// Which characters are digit literals
    #[serde(default)]
    pub literals: LiteralMode,

    /// Print parse and force steps to stderr
    #[serde(default)]
    pub trace: bool,

    /// Extra operators: token -> definition
    #[serde(default)]
    pub operators: BTreeMap<String, OperatorSpec>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralMode {
    #[default]
    Sparse,
    Decimal,
}

impl LiteralMode {
    pub fn literal_set(self) -> LiteralSet {
        match self {
            LiteralMode::Sparse => LiteralSet::sparse(),
            LiteralMode::Decimal => LiteralSet::decimal(),
        }
    }
}

/// How a configured operator behaves
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OperatorSpec {
    /// One of the stock combinators, by name
    Named(Combinator),
    /// Append text to the shared buffer
    Emit { emit: String },
    /// Always yield the same value
    Constant { constant: Int },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    Sequence,
    When,
    Repeat,
    Concat,
}

impl OperatorSpec {
    fn to_operator(&self, buffer: &SharedBuffer) -> Operator {
        match self {
            OperatorSpec::Named(Combinator::Sequence) => combinators::sequence(),
            OperatorSpec::Named(Combinator::When) => combinators::when(),
            OperatorSpec::Named(Combinator::Repeat) => combinators::repeat(),
            OperatorSpec::Named(Combinator::Concat) => combinators::concat(),
            OperatorSpec::Emit { emit } => combinators::emit(buffer, emit.as_str()),
            OperatorSpec::Constant { constant } => combinators::constant(*constant),
        }
    }
}

impl CalcConfig {
    /// Load a configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: CalcConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Build a calculator; emitting operators write into `buffer`
    pub fn build(&self, buffer: &SharedBuffer) -> Result<LazyCalculator, ConfigError> {
        let mut calc = LazyCalculator::with_literals(self.literals.literal_set());
        calc.set_trace_mode(self.trace);

        for (key, spec) in &self.operators {
            let mut chars = key.chars();
            let token = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(ConfigError::InvalidToken(key.clone())),
            };
            calc.register(token, spec.to_operator(buffer))?;
        }

        Ok(calc)
    }
}
