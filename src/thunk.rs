//! Deferred computations and the operator functions that consume them.
//!
//! A [`Thunk`] is a repeatable, zero-argument computation producing an
//! [`Int`]. Forcing it runs the captured computation again every time;
//! results are never cached, so side effects repeat on every forcing.

use std::fmt;
use std::rc::Rc;

/// The only value type the calculator knows about
pub type Int = i64;

/// A deferred computation that may be forced zero, one or many times
#[derive(Clone)]
pub struct Thunk(Rc<Node>);

/// Where a traced composite came from: operator token and input position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceLabel {
    pub token: char,
    pub position: usize,
}

enum Node {
    Literal(Int),
    /// `operands` is only `None` while the node is being torn down
    Composite {
        op: Operator,
        operands: Option<(Thunk, Thunk)>,
        trace: Option<TraceLabel>,
    },
    Deferred(Box<dyn Fn() -> Int>),
}

impl Node {
    fn take_operands(&mut self) -> Option<(Thunk, Thunk)> {
        match self {
            Node::Composite { operands, .. } => operands.take(),
            _ => None,
        }
    }
}

impl Drop for Node {
    // Composite chains can be arbitrarily deep; unlink them with an explicit
    // worklist so dropping never recurses.
    fn drop(&mut self) {
        let mut pending: Vec<Thunk> = match self.take_operands() {
            Some((below, top)) => vec![below, top],
            None => return,
        };
        while let Some(thunk) = pending.pop() {
            if let Ok(mut node) = Rc::try_unwrap(thunk.0) {
                if let Some((below, top)) = node.take_operands() {
                    pending.push(below);
                    pending.push(top);
                }
            }
        }
    }
}

impl Thunk {
    pub fn new(f: impl Fn() -> Int + 'static) -> Self {
        Thunk(Rc::new(Node::Deferred(Box::new(f))))
    }

    /// A thunk that always yields `value`
    pub fn literal(value: Int) -> Self {
        Thunk(Rc::new(Node::Literal(value)))
    }

    /// Build a composite thunk: forcing it calls `op(below, top)`.
    ///
    /// Neither operand is forced here. The operator body alone decides
    /// whether and how often they run, and only once the result is forced.
    pub fn compose(op: Operator, below: Thunk, top: Thunk) -> Self {
        Self::composite(op, below, top, None)
    }

    /// Like [`Thunk::compose`], but reports each forcing on stderr
    pub fn compose_traced(op: Operator, below: Thunk, top: Thunk, label: TraceLabel) -> Self {
        Self::composite(op, below, top, Some(label))
    }

    fn composite(op: Operator, below: Thunk, top: Thunk, trace: Option<TraceLabel>) -> Self {
        Thunk(Rc::new(Node::Composite {
            op,
            operands: Some((below, top)),
            trace,
        }))
    }

    /// Run the computation
    pub fn force(&self) -> Int {
        match &*self.0 {
            Node::Literal(value) => *value,
            Node::Deferred(f) => f(),
            Node::Composite {
                op,
                operands: Some((below, top)),
                trace,
            } => {
                if let Some(label) = trace {
                    eprintln!("[trace] force '{}' @{}", label.token, label.position);
                }
                let value = op.apply(below.clone(), top.clone());
                if let Some(label) = trace {
                    eprintln!("[trace] '{}' @{} => {}", label.token, label.position, value);
                }
                value
            }
            Node::Composite { operands: None, .. } => {
                unreachable!("operands are only taken while the thunk is dropped")
            }
        }
    }

    /// Force `times` times, discarding results. Non-positive counts force nothing.
    /// Returns how many times the thunk ran.
    pub fn force_times(&self, times: Int) -> usize {
        let mut ran = 0;
        for _ in 0..times.max(0) {
            self.force();
            ran += 1;
        }
        ran
    }
}

impl fmt::Debug for Thunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Thunk(..)")
    }
}

/// A binary operator over two unforced operands.
///
/// The first argument is the operand pushed earlier (deeper in the stack),
/// the second the one pushed later.
#[derive(Clone)]
pub struct Operator(Rc<dyn Fn(Thunk, Thunk) -> Int>);

impl Operator {
    pub fn new(f: impl Fn(Thunk, Thunk) -> Int + 'static) -> Self {
        Operator(Rc::new(f))
    }

    pub fn apply(&self, below: Thunk, top: Thunk) -> Int {
        (self.0)(below, top)
    }
}

impl<F> From<F> for Operator
where
    F: Fn(Thunk, Thunk) -> Int + 'static,
{
    fn from(f: F) -> Self {
        Operator::new(f)
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Operator(..)")
    }
}
