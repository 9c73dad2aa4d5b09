use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use sanity_cli::logging::redact_value;
use sanity_cli::outcome::{self, Outcome};
use sanity_cli::summary::print_scan;
use sanity_core::{DatePattern, RawScalar};

use crate::cli::{Command, OutputArg, ScalarArgs};

/// Runs one subcommand and prints its result. Returns whether anything matched.
pub fn run_command(command: &Command, output: OutputArg) -> Result<bool> {
    match command {
        Command::Digits(args) => {
            let input = scalar_input(&args.input);
            emit(&outcome::digits(input, args.keep_decimal), output)
        }
        Command::Date(args) => emit(
            &outcome::date(&args.text, &args.pattern, args.show_token, args.year),
            output,
        ),
        Command::Email(args) => emit(&outcome::email(&args.text), output),
        Command::Price(args) => emit(&outcome::price(&args.text, args.float), output),
        Command::Zip(args) => emit(&outcome::zip(scalar_input(args)), output),
        Command::Scan(args) => {
            let span = info_span!(
                "scan",
                pattern = args.pattern.as_ref().map(DatePattern::as_str)
            );
            let _guard = span.enter();
            debug!(input = redact_value(&args.text), "scanning");
            let outcomes = outcome::scan(&args.text, args.pattern.as_ref());
            let matched = outcomes.iter().filter(|o| o.is_match()).count();
            info!(matched, total = outcomes.len(), "scan complete");
            match output {
                OutputArg::Text => print_scan(&outcomes),
                OutputArg::Json => {
                    let json =
                        serde_json::to_string_pretty(&outcomes).context("serialize scan results")?;
                    println!("{json}");
                }
            }
            Ok(matched > 0)
        }
    }
}

fn scalar_input(args: &ScalarArgs) -> RawScalar<'_> {
    match (&args.value, args.null) {
        (_, true) | (None, false) => RawScalar::Null,
        (Some(value), false) => RawScalar::Text(value),
    }
}

fn emit(outcome: &Outcome<'_>, output: OutputArg) -> Result<bool> {
    let input = outcome.input.to_text();
    info!(
        normalizer = %outcome.kind,
        input = redact_value(&input),
        matched = outcome.is_match(),
        "normalized"
    );
    match output {
        OutputArg::Text => match outcome.render_text() {
            Some(text) => println!("{text}"),
            None => eprintln!("no {} found", outcome.kind.label().to_lowercase()),
        },
        OutputArg::Json => {
            let json = serde_json::to_string(outcome).context("serialize result")?;
            println!("{json}");
        }
    }
    Ok(outcome.is_match())
}
