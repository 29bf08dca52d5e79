//! Fixed-decimal display of amounts, prices and percents.
//!
//! Rounding goes through `Decimal` so midpoints round away from zero
//! (2.5 → 3, -2.5 → -3) instead of float formatting's half-to-even.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds half away from zero. `None` for values `Decimal` cannot hold (NaN, ±inf, > 7.9e28).
pub fn round_half_away(amount: f64, decimals: u32) -> Option<Decimal> {
    Decimal::from_f64(amount)
        .map(|d| d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero))
}

// past Decimal's range a finite float has no fraction left to round,
// so its own fixed display is exact. NaN and inf print as-is.
fn fixed(amount: f64, decimals: u32) -> String {
    match round_half_away(amount, decimals) {
        Some(rounded) => format!("{:.*}", decimals as usize, rounded),
        None if amount.is_finite() => format!("{:.*}", decimals as usize, amount),
        None => format!("{amount}"),
    }
}

/// `$` prefixed, e.g. `format_currency(14.2538, 2)` → `$14.25`. Sign follows the `$`.
pub fn format_currency(amount: f64, decimals: u32) -> String {
    format!("${}", fixed(amount, decimals))
}

pub fn format_number(amount: f64, decimals: u32) -> String {
    fixed(amount, decimals)
}

pub fn format_percent(amount: f64, decimals: u32) -> String {
    format!("{}%", fixed(amount, decimals))
}
