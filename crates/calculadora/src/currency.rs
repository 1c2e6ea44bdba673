//! Stateless currency conversion against a fixed unit-rate table
//!
//! Fully independent of the calculator engine: rates are compile-time
//! constants relative to USD, conversion is one multiplication, and
//! rendering is two fractional digits. Nothing here fetches live rates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A currency code outside the fixed table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown currency code: {0}")]
pub struct ParseCurrencyError(String);

/// The currencies the table covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// United States dollar, the table's unit
    Usd,
    /// Euro
    Eur,
    /// Pound sterling
    Gbp,
    /// Japanese yen
    Jpy,
    /// Vietnamese dong
    Vnd,
}

impl Currency {
    /// Every supported currency, in table order
    pub const ALL: [Self; 5] = [Self::Usd, Self::Eur, Self::Gbp, Self::Jpy, Self::Vnd];

    /// Returns the ISO 4217 code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Vnd => "VND",
        }
    }

    /// Returns the fixed number of units per one USD
    #[must_use]
    pub const fn rate(self) -> f64 {
        match self {
            Self::Usd => 1.0,
            Self::Eur => 0.84,
            Self::Gbp => 0.72,
            Self::Jpy => 110.33,
            Self::Vnd => 25440.0,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ParseCurrencyError;

    /// Parses an ISO code, case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ParseCurrencyError(code.to_string()))
    }
}

/// Converts an amount between two currencies
///
/// Both directions go through USD: `amount * rate(to) / rate(from)`. The
/// reverse conversion is the same call with the arguments swapped.
#[must_use]
pub fn convert(amount: f64, from: Currency, to: Currency) -> f64 {
    let converted = amount * (to.rate() / from.rate());
    tracing::debug!(amount, from = %from, to = %to, converted, "converted");
    converted
}

/// Formats a converted amount with two fractional digits
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== Table tests =====

    #[test]
    fn test_rate_table() {
        assert_eq!(Currency::Usd.rate(), 1.0);
        assert_eq!(Currency::Eur.rate(), 0.84);
        assert_eq!(Currency::Gbp.rate(), 0.72);
        assert_eq!(Currency::Jpy.rate(), 110.33);
        assert_eq!(Currency::Vnd.rate(), 25440.0);
    }

    #[test]
    fn test_codes() {
        let codes: Vec<&str> = Currency::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes, ["USD", "EUR", "GBP", "JPY", "VND"]);
    }

    #[test]
    fn test_display_matches_code() {
        assert_eq!(Currency::Jpy.to_string(), "JPY");
    }

    // ===== Parsing tests =====

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("usd".parse::<Currency>(), Ok(Currency::Usd));
        assert_eq!("Eur".parse::<Currency>(), Ok(Currency::Eur));
        assert_eq!("GBP".parse::<Currency>(), Ok(Currency::Gbp));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(" vnd ".parse::<Currency>(), Ok(Currency::Vnd));
    }

    #[test]
    fn test_parse_rejects_unknown_code() {
        let err = "XYZ".parse::<Currency>().unwrap_err();
        assert_eq!(err.to_string(), "unknown currency code: XYZ");
    }

    #[test]
    fn test_serde_uses_iso_codes() {
        let json = serde_json::to_string(&Currency::Gbp).unwrap();
        assert_eq!(json, "\"GBP\"");
        let back: Currency = serde_json::from_str("\"VND\"").unwrap();
        assert_eq!(back, Currency::Vnd);
    }

    // ===== Conversion tests =====

    #[test]
    fn test_usd_to_eur() {
        let converted = convert(100.0, Currency::Usd, Currency::Eur);
        assert!((converted - 84.0).abs() < 1e-9);
        assert_eq!(format_amount(converted), "84.00");
    }

    #[test]
    fn test_usd_to_jpy() {
        assert_eq!(format_amount(convert(1.0, Currency::Usd, Currency::Jpy)), "110.33");
    }

    #[test]
    fn test_cross_rate_skips_usd_explicitly() {
        // EUR -> GBP is rate(GBP) / rate(EUR)
        let converted = convert(84.0, Currency::Eur, Currency::Gbp);
        assert!((converted - 72.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_amount() {
        assert_eq!(convert(0.0, Currency::Usd, Currency::Vnd), 0.0);
    }

    #[test]
    fn test_identity_conversion_is_exact() {
        assert_eq!(convert(123.45, Currency::Jpy, Currency::Jpy), 123.45);
    }

    // ===== Rendering tests =====

    #[test]
    fn test_format_amount_pads_and_rounds() {
        assert_eq!(format_amount(5.0), "5.00");
        assert_eq!(format_amount(2.675), "2.67");
        assert_eq!(format_amount(0.005), "0.01");
        assert_eq!(format_amount(-3.14159), "-3.14");
    }

    // ===== Property tests =====

    proptest! {
        /// Converting there and back recovers the amount
        #[test]
        fn prop_round_trip(amount in -1e6_f64..1e6) {
            for from in Currency::ALL {
                for to in Currency::ALL {
                    let back = convert(convert(amount, from, to), to, from);
                    let tolerance = amount.abs().max(1.0) * 1e-9;
                    prop_assert!((back - amount).abs() < tolerance);
                }
            }
        }

        /// Conversion preserves sign and scales linearly
        #[test]
        fn prop_sign_preserved(amount in 1e-3_f64..1e6) {
            for to in Currency::ALL {
                prop_assert!(convert(amount, Currency::Usd, to) > 0.0);
                prop_assert!(convert(-amount, Currency::Usd, to) < 0.0);
            }
        }
    }
}
