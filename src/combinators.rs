//! Ready-made operators for registering custom control flow and side effects.
//!
//! None of these are registered by default; they exist so drivers and the
//! configuration file don't have to spell the closures out each time.
//!
//! ```text
//! sequence   a b ,   -> force a, then result of b
//! when       c x ?   -> x if c != 0, else 0 (x never forced)
//! repeat     n x $   -> force x n times, 0
//! concat     a b !   -> a * 10 + b
//! constant   a b 1   -> fixed value, operands ignored
//! emit       a b P   -> append text to a shared buffer, 0
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::thunk::{Int, Operator, Thunk};

/// Accumulation cell that side-effecting operators write into
pub type SharedBuffer = Rc<RefCell<String>>;

pub fn shared_buffer() -> SharedBuffer {
    Rc::new(RefCell::new(String::new()))
}

/// Force the first operand for its effects, return the second
pub fn sequence() -> Operator {
    Operator::new(|first: Thunk, second: Thunk| {
        first.force();
        second.force()
    })
}

/// Force the second operand only when the first is non-zero
pub fn when() -> Operator {
    Operator::new(|cond: Thunk, then: Thunk| {
        if cond.force() != 0 {
            then.force()
        } else {
            0
        }
    })
}

/// Force the count once, then the body that many times
pub fn repeat() -> Operator {
    Operator::new(|count: Thunk, body: Thunk| {
        body.force_times(count.force());
        0
    })
}

/// Glue two digits together: `a * 10 + b`
pub fn concat() -> Operator {
    Operator::new(|high: Thunk, low: Thunk| high.force() * 10 + low.force())
}

pub fn constant(value: Int) -> Operator {
    Operator::new(move |_: Thunk, _: Thunk| value)
}

/// Append `text` to `buffer` every time the operator runs
pub fn emit(buffer: &SharedBuffer, text: impl Into<String>) -> Operator {
    let buffer = Rc::clone(buffer);
    let text = text.into();
    Operator::new(move |_: Thunk, _: Thunk| {
        buffer.borrow_mut().push_str(&text);
        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting(value: Int) -> (Thunk, Rc<Cell<usize>>) {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let thunk = Thunk::new(move || {
            counter.set(counter.get() + 1);
            value
        });
        (thunk, count)
    }

    #[test]
    fn sequence_forces_both_in_order() {
        let buffer = shared_buffer();
        let log = emit(&buffer, "a");
        let first = {
            let log = log.clone();
            Thunk::new(move || log.apply(Thunk::literal(0), Thunk::literal(0)))
        };
        let second = {
            let buffer = Rc::clone(&buffer);
            Thunk::new(move || {
                buffer.borrow_mut().push('b');
                7
            })
        };
        assert_eq!(sequence().apply(first, second), 7);
        assert_eq!(buffer.borrow().as_str(), "ab");
    }

    #[test]
    fn when_skips_body_on_zero() {
        let (body, count) = counting(4);
        assert_eq!(when().apply(Thunk::literal(0), body.clone()), 0);
        assert_eq!(count.get(), 0);
        assert_eq!(when().apply(Thunk::literal(2), body), 4);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn repeat_forces_body_n_times() {
        let (count_thunk, count_forced) = counting(4);
        let (body, body_forced) = counting(0);
        assert_eq!(repeat().apply(count_thunk, body), 0);
        assert_eq!(count_forced.get(), 1);
        assert_eq!(body_forced.get(), 4);
    }

    #[test]
    fn concat_digits() {
        assert_eq!(concat().apply(Thunk::literal(4), Thunk::literal(2)), 42);
    }

    #[test]
    fn constant_ignores_operands() {
        let (a, a_forced) = counting(4);
        let (b, b_forced) = counting(2);
        assert_eq!(constant(1).apply(a, b), 1);
        assert_eq!(a_forced.get() + b_forced.get(), 0);
    }

    #[test]
    fn emit_appends_each_time() {
        let buffer = shared_buffer();
        let op = emit(&buffer, "pomidor");
        op.apply(Thunk::literal(0), Thunk::literal(0));
        op.apply(Thunk::literal(0), Thunk::literal(0));
        assert_eq!(buffer.borrow().as_str(), "pomidorpomidor");
    }
}
