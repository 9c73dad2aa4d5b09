//! CLI argument definitions for the sanity normalizers.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use sanity_core::DatePattern;

#[derive(Parser)]
#[command(
    name = "sanity",
    version,
    about = "Extract and canonicalize dates, digits, emails, prices, and ZIP codes",
    long_about = "Extract and canonicalize structured tokens from loosely formatted text.\n\n\
                  Each subcommand runs one normalizer on one value and prints the canonical\n\
                  result. Exit status is 0 on a match, 2 when nothing usable was found."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Prefix each log line with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow raw input values to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Result format on stdout.
    #[arg(long = "output", value_enum, default_value = "text", global = true)]
    pub output: OutputArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Strip a value down to its digits.
    Digits(DigitsArgs),

    /// Find the first token matching a date pattern.
    Date(DateArgs),

    /// Find the first email address in a text.
    Email(TextArgs),

    /// Canonicalize a price to dollars.cents.
    Price(PriceArgs),

    /// Canonicalize a US ZIP or ZIP+4 code.
    Zip(ScalarArgs),

    /// Run every normalizer on one text and print a table.
    Scan(ScanArgs),
}

#[derive(Args)]
pub struct ScalarArgs {
    /// Input value.
    #[arg(value_name = "VALUE", required_unless_present = "null")]
    pub value: Option<String>,

    /// Pass an absent value instead of text.
    #[arg(long = "null", conflicts_with = "value")]
    pub null: bool,
}

#[derive(Args)]
pub struct DigitsArgs {
    #[command(flatten)]
    pub input: ScalarArgs,

    /// Keep the first decimal point and the digits after it.
    #[arg(long = "keep-decimal")]
    pub keep_decimal: bool,
}

#[derive(Args)]
pub struct DateArgs {
    /// Text to scan.
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// strftime-style pattern, e.g. "%m/%d/%Y".
    #[arg(long = "pattern", short = 'p', value_name = "PATTERN")]
    pub pattern: DatePattern,

    /// Also print the token that matched.
    #[arg(long = "show-token")]
    pub show_token: bool,

    /// Year to use when the pattern has none (default: current year).
    #[arg(long = "year", value_name = "YEAR")]
    pub year: Option<i32>,
}

#[derive(Args)]
pub struct TextArgs {
    /// Text to scan.
    #[arg(value_name = "TEXT")]
    pub text: String,
}

#[derive(Args)]
pub struct PriceArgs {
    /// Price-like text, e.g. "$19.95".
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Print the price as a floating-point number.
    #[arg(long = "float")]
    pub float: bool,
}

#[derive(Args)]
pub struct ScanArgs {
    /// Text to run through every normalizer.
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Date pattern for the date normalizer (skipped when absent).
    #[arg(long = "pattern", short = 'p', value_name = "PATTERN")]
    pub pattern: Option<DatePattern>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Result output choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Text,
    Json,
}
