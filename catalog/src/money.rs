//! Price display.
//!
//! Prices arrive from the backend as plain decimal numbers in the store
//! currency. [`format_money`] renders them with a currency symbol, two
//! decimals and comma thousands separators. Currencies without a dedicated
//! symbol fall back to the ISO code.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// How a store renders money amounts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyFormat {
    /// ISO 4217 code, upper case.
    pub currency: String,
    /// Prefix symbol; empty when the code is used instead.
    pub symbol: String,
    /// Append the ISO code after the amount (`$1,200.00 MXN`).
    pub show_code: bool,
}

impl MoneyFormat {
    /// Format for an ISO currency code.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidCurrency`] unless `code` is three ASCII
    /// letters.
    pub fn for_currency(code: &str) -> Result<Self, CatalogError> {
        let code = code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CatalogError::InvalidCurrency(code.to_owned()));
        }
        let currency = code.to_ascii_uppercase();
        let (symbol, show_code) = match currency.as_str() {
            "USD" => ("$", false),
            "MXN" | "CAD" | "AUD" => ("$", true),
            "EUR" => ("€", false),
            "GBP" => ("£", false),
            "JPY" => ("¥", false),
            _ => ("", true),
        };
        Ok(Self { currency, symbol: symbol.to_owned(), show_code })
    }
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self { currency: "USD".to_owned(), symbol: "$".to_owned(), show_code: false }
    }
}

/// Render `amount` in `format`.
///
/// Non-finite amounts render as zero.
#[must_use]
pub fn format_money(amount: f64, format: &MoneyFormat) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (amount.abs() * 100.0).round() as u64;
    let negative = amount < 0.0 && cents > 0;

    let whole = group_thousands(cents / 100);
    let frac = cents % 100;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&format.symbol);
    out.push_str(&format!("{whole}.{frac:02}"));
    if format.show_code || format.symbol.is_empty() {
        out.push(' ');
        out.push_str(&format.currency);
    }
    out
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
