// ============================================================================
// Pifind CLI
// Thin shell around the series engine: argument parsing, the confirmation
// prompt for unbounded runs, and console output formatting
// ============================================================================

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;

use pifind::prelude::*;

/// Parsed command-line surface: `-t <seconds>` (optional) and `-s <digits>`
/// (required).
#[derive(Debug, Clone, PartialEq, Eq)]
struct CliArgs {
    time_budget: Option<u64>,
    pattern: String,
}

/// Parse the argument list (program name excluded).
///
/// Absence of `-s` or a malformed `-t` value is a usage error; absence of
/// `-t` means an unbounded run, which the caller must confirm interactively
/// before invoking the core.
fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut time_budget = None;
    let mut pattern = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-t" if i + 1 < args.len() => {
                let value = args[i + 1]
                    .parse::<u64>()
                    .map_err(|_| format!("invalid -t value: {}", args[i + 1]))?;
                time_budget = Some(value);
                i += 2;
            },
            "-s" if i + 1 < args.len() => {
                pattern = Some(args[i + 1].clone());
                i += 2;
            },
            other => return Err(format!("unrecognized argument: {}", other)),
        }
    }

    match pattern {
        Some(pattern) if !pattern.is_empty() => Ok(CliArgs {
            time_budget,
            pattern,
        }),
        _ => Err("missing required -s <string_of_numbers>".to_string()),
    }
}

/// Warn about an unbounded run and ask the operator to confirm.
fn confirm_unbounded(input: &mut dyn BufRead) -> io::Result<bool> {
    println!("Warning: Argument -t has not been specified, the program will run until it has found the specified string.");
    println!("YOUR SYSTEM MAY CRASH.");
    print!("Are you sure you understand what you're doing? (y/n): ");
    io::stdout().flush()?;

    let mut response = String::new();
    input.read_line(&mut response)?;
    Ok(matches!(response.trim(), "y" | "Y"))
}

fn usage(program: &str) {
    println!(
        "Usage: {} [-t <number_of_seconds>] -s <string_of_numbers>",
        program
    );
}

fn main() -> ExitCode {
    // stdout carries only the result line and the prompt; logs go to stderr
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let argv: Vec<String> = std::env::args().collect();
    let program = argv.first().map(String::as_str).unwrap_or("pifind");

    let args = match parse_args(&argv[1..]) {
        Ok(args) => args,
        Err(reason) => {
            tracing::debug!(%reason, "argument parsing failed");
            usage(program);
            return ExitCode::FAILURE;
        },
    };

    if args.time_budget.is_none() {
        match confirm_unbounded(&mut io::stdin().lock()) {
            Ok(true) => {},
            Ok(false) => {
                println!("Aborting.");
                return ExitCode::FAILURE;
            },
            Err(error) => {
                eprintln!("Failed to read confirmation: {}", error);
                return ExitCode::FAILURE;
            },
        }
    }

    let config = ComputeConfig::reference().with_time_budget(TimeBudget::from(args.time_budget));

    let engine = match create_from_config(&config, Arc::new(LoggingObserver)) {
        Ok(engine) => engine,
        Err(reason) => {
            eprintln!("Invalid configuration: {}", reason);
            return ExitCode::FAILURE;
        },
    };

    let result = match engine.run(&config.time_budget) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("Computation failed: {}", error);
            return ExitCode::FAILURE;
        },
    };

    let digits = result.digits(config.fractional_digits);
    tracing::info!(
        terms = result.completed_terms(),
        trusted_digits = digits.trusted_digits(),
        "rendered digit string"
    );

    match find_sequence(&digits, &args.pattern, SearchScope::Full) {
        Ok(SearchOutcome::Found { decimal_place }) => {
            println!(
                "Sequence found! decimal place: {} time took: {:.0} seconds",
                decimal_place,
                result.elapsed().as_secs_f64()
            );
            ExitCode::SUCCESS
        },
        Ok(SearchOutcome::NotFound) => {
            println!("Sequence not found in computed digits of Pi.");
            ExitCode::SUCCESS
        },
        Err(error) => {
            eprintln!("Invalid search pattern: {}", error);
            ExitCode::FAILURE
        },
    }
}
