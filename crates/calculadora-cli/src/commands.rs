//! CLI command definitions using clap

use calculadora::prelude::*;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line host for the calculadora engine
#[derive(Parser, Debug)]
#[command(name = "calculista")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print bare values only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// When to color output
    #[arg(long, value_enum, default_value_t = ColorArg::Auto, global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one key sequence through the engine and print the outcome
    Keys(KeysArgs),
    /// Feed key sequences line by line from stdin into one live engine
    Repl,
    /// Convert an amount between currencies
    Convert(ConvertArgs),
    /// Print the fixed unit-rate table
    Rates(RatesArgs),
}

/// Arguments for the keys command
#[derive(Parser, Debug)]
pub struct KeysArgs {
    /// Key sequence, one character per key: digits, `.` `+` `-` `x` `/`
    /// `=`, and letters `n` (sign) `c` (clear) `e` (clear entry)
    /// `b` (backspace); unmapped characters are skipped
    pub sequence: String,

    /// Print display and preview after every key
    #[arg(short, long)]
    pub trace: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,
}

/// Arguments for the convert command
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Amount to convert; text that does not parse counts as 0
    pub amount: String,

    /// Source currency code (USD, EUR, GBP, JPY, VND)
    #[arg(long, value_name = "CODE")]
    pub from: Currency,

    /// Target currency code (USD, EUR, GBP, JPY, VND)
    #[arg(long, value_name = "CODE")]
    pub to: Currency,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,
}

/// Arguments for the rates command
#[derive(Parser, Debug)]
pub struct RatesArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,
}

/// Output format selection
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON value on stdout
    Json,
}

/// Color behavior
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}
