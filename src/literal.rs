//! Digit-literal characters.
//!
//! Literal characters are recognized before the operator registry is
//! consulted and can never be registered as operators.

use crate::thunk::Int;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralSet {
    values: BTreeMap<char, Int>,
}

impl LiteralSet {
    /// The classic set: only `0`, `2` and `4` are literals
    pub fn sparse() -> Self {
        Self::from_digits(&['0', '2', '4'])
    }

    /// Every decimal digit `0`..=`9` is a literal
    pub fn decimal() -> Self {
        let digits: Vec<char> = ('0'..='9').collect();
        Self::from_digits(&digits)
    }

    fn from_digits(digits: &[char]) -> Self {
        let values = digits
            .iter()
            .filter_map(|&c| c.to_digit(10).map(|d| (c, Int::from(d))))
            .collect();
        LiteralSet { values }
    }

    pub fn value_of(&self, c: char) -> Option<Int> {
        self.values.get(&c).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.values.contains_key(&c)
    }

    /// Literal characters with their values, in character order
    pub fn iter(&self) -> impl Iterator<Item = (char, Int)> + '_ {
        self.values.iter().map(|(&c, &v)| (c, v))
    }
}

impl Default for LiteralSet {
    fn default() -> Self {
        Self::sparse()
    }
}
