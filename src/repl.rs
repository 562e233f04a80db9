use lazycalc::{LazyCalculator, SharedBuffer};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

use crate::cli::print_help;
use crate::rcfile::dirs_home;
use crate::terminal::execute_line;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// List literal characters and registered operators
fn print_ops(calc: &LazyCalculator) {
    let registry = calc.registry();
    let literals: Vec<String> = registry
        .literals()
        .iter()
        .map(|(c, v)| format!("{}={}", c, v))
        .collect();
    let operators: String = registry.tokens().into_iter().collect();
    println!("literals:  {}", literals.join(" "));
    println!("operators: {}", operators);
}

/// Run the REPL
pub(crate) fn run_repl(calc: &LazyCalculator, buffer: &SharedBuffer) -> RlResult<()> {
    let mut rl = DefaultEditor::new()?;

    // Try to load history
    let history_path = dirs_home().map(|h| h.join(".lazycalc_history"));
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    // Show banner only if LAZYCALC_BANNER is set
    if std::env::var("LAZYCALC_BANNER").is_ok() {
        println!("lazycalc {} - lazily-evaluated postfix calculator", VERSION);
        println!("  Type 'exit' or Ctrl-D to quit, '.help' for usage");
    }

    loop {
        match rl.readline("lazycalc> ") {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line.as_str());

                // Handle built-in REPL commands (dot-prefix)
                match trimmed {
                    "exit" | "quit" => break,
                    ".help" | ".h" => {
                        print_help();
                        continue;
                    }
                    ".ops" | ".o" => {
                        print_ops(calc);
                        continue;
                    }
                    ".buffer" | ".b" => {
                        println!("{}", buffer.borrow());
                        continue;
                    }
                    ".clear" | ".c" => {
                        buffer.borrow_mut().clear();
                        continue;
                    }
                    _ => {}
                }

                // Evaluate the line as typed; only commands are matched trimmed
                if let Err(e) = execute_line(calc, buffer, &line, true) {
                    eprintln!("Error: {}", e);
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C: drop the current line, keep going
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }

    Ok(())
}
