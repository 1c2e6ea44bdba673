//! Calculista: command-line host for the calculadora engine
//!
//! ```bash
//! calculista keys "2+3="
//! calculista keys --trace "12x3="
//! calculista repl
//! calculista convert 100 --from usd --to eur
//! calculista rates
//! ```

use std::io::BufRead;
use std::process::ExitCode;

use calculadora::prelude::*;
use calculista::{
    rate_table, render_conversion, render_rates, render_snapshot, render_step, Cli, CliResult,
    ColorArg, Commands, ConversionReport, ConvertArgs, FormatArg, KeysArgs, RatesArgs,
};
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    apply_color(cli.color);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", console::style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Keys(args) => run_keys(&args, cli.quiet),
        Commands::Repl => run_repl(cli.quiet),
        Commands::Convert(args) => run_convert(&args, cli.quiet),
        Commands::Rates(args) => run_rates(&args),
    }
}

/// Maps -v counts to a default filter; RUST_LOG wins when set
fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn apply_color(color: ColorArg) {
    match color {
        ColorArg::Auto => {}
        ColorArg::Always => console::set_colors_enabled(true),
        ColorArg::Never => console::set_colors_enabled(false),
    }
}

fn run_keys(args: &KeysArgs, quiet: bool) -> CliResult<()> {
    tracing::debug!(sequence = %args.sequence, "running key sequence");
    let mut driver = EngineDriver::new();
    if args.trace {
        for ch in args.sequence.chars() {
            let Some(key) = Key::from_char(ch) else {
                continue;
            };
            driver.press(key);
            println!("{}", render_step(&key.label(), &driver.snapshot()));
        }
    } else {
        driver.press_keys(&args.sequence);
    }
    match args.format {
        FormatArg::Json => println!("{}", serde_json::to_string(&driver.snapshot())?),
        FormatArg::Text => println!("{}", render_snapshot(&driver.snapshot(), quiet)),
    }
    Ok(())
}

fn run_repl(quiet: bool) -> CliResult<()> {
    let mut driver = EngineDriver::new();
    if !quiet {
        println!("keys: digits . + - x / =  n sign  c clear  e clear-entry  b backspace  q quit");
    }
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if matches!(trimmed, "q" | "quit" | "exit") {
            break;
        }
        tracing::debug!(line = %trimmed, "repl line");
        driver.press_keys(trimmed);
        println!("{}", render_snapshot(&driver.snapshot(), quiet));
    }
    Ok(())
}

fn run_convert(args: &ConvertArgs, quiet: bool) -> CliResult<()> {
    // The keypad convention carries over: malformed amounts count as zero
    let amount = args.amount.trim().parse().unwrap_or(0.0);
    let report = ConversionReport::build(amount, args.from, args.to);
    match args.format {
        FormatArg::Json => println!("{}", serde_json::to_string(&report)?),
        FormatArg::Text => println!("{}", render_conversion(&report, quiet)),
    }
    Ok(())
}

fn run_rates(args: &RatesArgs) -> CliResult<()> {
    let entries = rate_table();
    match args.format {
        FormatArg::Json => println!("{}", serde_json::to_string(&entries)?),
        FormatArg::Text => println!("{}", render_rates(&entries)),
    }
    Ok(())
}
