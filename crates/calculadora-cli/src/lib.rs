//! Calculista library
//!
//! Command definitions, error types, and output rendering for the
//! `calculista` binary. The binary's `main.rs` stays thin; everything worth
//! unit-testing lives here.

#![warn(missing_docs)]

pub mod commands;
pub mod error;
pub mod output;

pub use commands::{Cli, ColorArg, Commands, ConvertArgs, FormatArg, KeysArgs, RatesArgs};
pub use error::{CliError, CliResult};
pub use output::{
    rate_table, render_conversion, render_rates, render_snapshot, render_step, ConversionReport,
    RateEntry,
};
