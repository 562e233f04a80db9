//! lazycalc - lazily-evaluated postfix calculator
//!
//! Usage:
//!   lazycalc              Start interactive REPL
//!   lazycalc -c "expr"    Evaluate a single expression
//!   lazycalc script.lc    Evaluate a script file

mod cli;
mod rcfile;
mod repl;
mod terminal;

use cli::{execute_command, execute_script, parse_args, print_help, print_version};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Try 'lazycalc --help'");
            return ExitCode::FAILURE;
        }
    };

    if cli.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if cli.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    if let Some(cmd) = cli.command {
        return execute_command(&cmd, &cli.config, cli.trace);
    }

    if let Some(script) = cli.script {
        return execute_script(&script, &cli.config, cli.trace);
    }

    let (calc, buffer) = match rcfile::load_calculator(&cli.config, cli.trace) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match repl::run_repl(&calc, &buffer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("REPL error: {}", e);
            ExitCode::FAILURE
        }
    }
}
