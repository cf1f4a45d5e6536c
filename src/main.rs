use std::{
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use reckon::{
    error::EvalError,
    evaluate,
    util::{glyph::normalize_glyphs, num::format_result},
};

/// reckon evaluates arithmetic expressions the way a desktop calculator does:
/// numbers, `+ - * /` (or `× ÷`), unary signs and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print results with full `f64` debug formatting instead of calculator
    /// display formatting.
    #[arg(short, long)]
    raw: bool,

    /// Increase log verbosity. `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. When omitted, expressions are read from
    /// standard input, one per line.
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Some(expression) = &args.expression {
        return if run_line(expression, args.raw) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read standard input: {e}");
                return ExitCode::FAILURE;
            },
        };
        if line.trim().is_empty() {
            continue;
        }
        run_line(&line, args.raw);
    }

    ExitCode::SUCCESS
}

/// Evaluates one expression and prints either its value or `Error`.
///
/// Returns `true` when evaluation succeeded.
fn run_line(expression: &str, raw: bool) -> bool {
    let expression = normalize_glyphs(expression);
    match evaluate(&expression) {
        Ok(value) if raw => println!("{value:?}"),
        Ok(value) => println!("{}", format_result(value)),
        Err(e) => {
            println!("Error");
            report(&expression, &e);
            return false;
        },
    }
    true
}

/// Writes the error message and a caret under the offending position.
fn report(expression: &str, error: &EvalError) {
    let column = expression.get(..error.position())
                           .map_or(0, |prefix| prefix.chars().count());
    eprintln!("{error}");
    eprintln!("  {expression}");
    eprintln!("  {}^", " ".repeat(column));
}
