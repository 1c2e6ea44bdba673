//! Output rendering for snapshots, conversions, and the rate table

use calculadora::prelude::*;
use console::style;
use serde::Serialize;

/// One currency conversion, ready to render
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    /// Amount that was converted
    pub amount: f64,
    /// Source currency
    pub from: Currency,
    /// Target currency
    pub to: Currency,
    /// Raw converted amount
    pub converted: f64,
    /// Converted amount with two fractional digits
    pub formatted: String,
}

impl ConversionReport {
    /// Converts `amount` and captures everything needed for rendering
    #[must_use]
    pub fn build(amount: f64, from: Currency, to: Currency) -> Self {
        let converted = convert(amount, from, to);
        Self {
            amount,
            from,
            to,
            converted,
            formatted: format_amount(converted),
        }
    }
}

/// One row of the rate table
#[derive(Debug, Clone, Serialize)]
pub struct RateEntry {
    /// Currency the rate belongs to
    pub currency: Currency,
    /// Units per one USD
    pub rate: f64,
}

/// Returns the full rate table in display order
#[must_use]
pub fn rate_table() -> Vec<RateEntry> {
    Currency::ALL
        .iter()
        .map(|&currency| RateEntry {
            currency,
            rate: currency.rate(),
        })
        .collect()
}

/// Renders the final engine state; quiet mode prints the bare display
#[must_use]
pub fn render_snapshot(snapshot: &Snapshot, quiet: bool) -> String {
    if quiet {
        return snapshot.display.clone();
    }
    if snapshot.preview.is_empty() {
        format!("display  {}", style(&snapshot.display).bold())
    } else {
        format!(
            "display  {}\npreview  {}",
            style(&snapshot.display).bold(),
            style(&snapshot.preview).dim()
        )
    }
}

/// Renders one traced step: padded key label, then both strings
#[must_use]
pub fn render_step(label: &str, snapshot: &Snapshot) -> String {
    format!(
        "{} {:>14}   {}",
        style(format!("{label:<3}")).cyan(),
        style(&snapshot.display).bold(),
        style(&snapshot.preview).dim()
    )
}

/// Renders a conversion; quiet mode prints the bare formatted amount
#[must_use]
pub fn render_conversion(report: &ConversionReport, quiet: bool) -> String {
    if quiet {
        return report.formatted.clone();
    }
    format!(
        "{} {} = {} {}",
        report.amount,
        report.from,
        style(&report.formatted).bold().green(),
        report.to
    )
}

/// Renders the rate table, one currency per line
#[must_use]
pub fn render_rates(entries: &[RateEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{}  {:>10}",
                style(entry.currency.code()).bold(),
                entry.rate
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
