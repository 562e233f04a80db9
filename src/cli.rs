use crate::rcfile::{load_calculator, ConfigSource};
use crate::terminal::execute_line;
use std::fs;
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command-line arguments
#[derive(Debug)]
pub(crate) struct CliArgs {
    pub(crate) command: Option<String>,
    pub(crate) script: Option<String>,
    pub(crate) help: bool,
    pub(crate) version: bool,
    pub(crate) trace: bool,
    pub(crate) config: ConfigSource,
}

/// Parse command-line arguments
pub(crate) fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs {
        command: None,
        script: None,
        help: false,
        version: false,
        trace: false,
        config: ConfigSource::Default,
    };

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "--trace" => {
                cli.trace = true;
            }
            "-c" => {
                // The next argument is the expression, taken verbatim
                i += 1;
                let expr = args.get(i).ok_or("-c requires an expression")?;
                cli.command = Some(expr.clone());
            }
            "--config" => {
                i += 1;
                let path = args.get(i).ok_or("--config requires a path")?;
                cli.config = ConfigSource::Explicit(path.clone());
            }
            "--no-config" => {
                cli.config = ConfigSource::Disabled;
            }
            "--help" | "-h" => {
                cli.help = true;
            }
            "--version" | "-V" => {
                cli.version = true;
            }
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown option: {}", flag));
            }
            path => {
                cli.script = Some(path.to_string());
            }
        }
        i += 1;
    }

    Ok(cli)
}

pub(crate) fn print_help() {
    println!(
        r#"lazycalc {} - lazily-evaluated postfix calculator

USAGE:
    lazycalc                    Start interactive REPL
    lazycalc -c <expr>          Evaluate a single expression
    lazycalc <script>           Evaluate a script, one expression per line
    lazycalc --help             Show this help message
    lazycalc --version          Show version

OPTIONS:
    --trace                     Print parse steps and thunk forcing to stderr
    --config <path>             Load configuration from <path>
    --no-config                 Ignore ~/.lazycalc.toml and $LAZYCALC_CONFIG

SYNTAX:
    Every character is a token. No whitespace, no parentheses.
    0 2 4                       Digit literals (all of 0-9 with literals = "decimal")
    + - * /                     Built-in operators
    42-                         4 - 2: the deeper operand comes first
    42-2-                       (4 - 2) - 2

CONFIG (~/.lazycalc.toml):
    literals = "sparse"         or "decimal"
    trace = false
    [operators]
    "," = "sequence"            force a, then b
    "?" = "when"                b if a != 0, else 0
    "$" = "repeat"              force b a times
    "!" = "concat"              a * 10 + b
    "P" = {{ emit = "text" }}     append text to the output buffer
    "1" = {{ constant = 1 }}      always 1

REPL COMMANDS:
    .help, .h                   Show this help
    .ops, .o                    List literals and operators
    .buffer, .b                 Show pending output buffer
    .clear, .c                  Discard the output buffer
    exit, quit                  Exit the REPL"#,
        VERSION
    );
}

pub(crate) fn print_version() {
    println!("lazycalc {}", VERSION);
}

/// Evaluate a single expression
pub(crate) fn execute_command(cmd: &str, source: &ConfigSource, trace: bool) -> ExitCode {
    let (calc, buffer) = match load_calculator(source, trace) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match execute_line(&calc, &buffer, cmd, true) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Execute a script file
pub(crate) fn execute_script(path: &str, source: &ConfigSource, trace: bool) -> ExitCode {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let (calc, buffer) = match load_calculator(source, trace) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        // Skip empty lines and comments. Other lines run verbatim:
        // whitespace is an operator key like any other character.
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Err(e) = execute_line(&calc, &buffer, line, true) {
            eprintln!("Error at line {}: {}", line_num + 1, e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
