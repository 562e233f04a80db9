//! Common test utilities for lazycalc integration tests

pub use lazycalc::{
    combinators, CalcError, ErrorKind, LazyCalculator, SharedBuffer, SyntaxError, Thunk,
};

/// Evaluate with a freshly seeded calculator
pub fn calc(input: &str) -> Result<i64, CalcError> {
    LazyCalculator::new().calculate(input)
}

/// Error kind of a failing evaluation
#[allow(dead_code)]
pub fn error_kind(input: &str) -> ErrorKind {
    calc(input).unwrap_err().kind()
}

/// Calculator with the control-flow operators used throughout the tests:
/// `!` concat, `,` sequence, `P` emits "pomidor", `$` repeat, `?` when
#[allow(dead_code)]
pub fn pomidor_calculator() -> (LazyCalculator, SharedBuffer) {
    let buffer = combinators::shared_buffer();
    let mut calc = LazyCalculator::new();
    calc.register('!', combinators::concat()).unwrap();
    calc.register(',', combinators::sequence()).unwrap();
    calc.register('P', combinators::emit(&buffer, "pomidor")).unwrap();
    calc.register('$', combinators::repeat()).unwrap();
    calc.register('?', combinators::when()).unwrap();
    (calc, buffer)
}
