use lazycalc::{Int, LazyCalculator, SharedBuffer};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Evaluate a single line, optionally printing the text it emitted and the result.
///
/// The buffer keeps accumulating across lines; only the part appended by
/// this line is printed.
///
/// Host arithmetic faults (division by zero, overflow) unwind out of the
/// forced thunk; they are caught here so one bad line doesn't end the session.
pub(crate) fn execute_line(
    calc: &LazyCalculator,
    buffer: &SharedBuffer,
    input: &str,
    print_output: bool,
) -> Result<Int, String> {
    let thunk = calc.parse(input).map_err(|e| e.to_string())?;

    let start = buffer.borrow().len();

    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let forced = panic::catch_unwind(AssertUnwindSafe(|| thunk.force()));
    panic::set_hook(previous_hook);

    let emitted = buffer.borrow().get(start..).unwrap_or("").to_string();
    let value = forced
        .map_err(|payload| format!("Arithmetic fault: {}", panic_message(&*payload)))?;

    if print_output {
        if !emitted.is_empty() {
            println!("{}", emitted);
        }
        println!("{}", value);
    }

    Ok(value)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown".to_string()
    }
}
