//! Take-profit and stop-loss price levels.
//!
//! Both levels sit a percentage away from entry. A take-profit sits in the
//! direction of the trade, a stop-loss against it, so the two always land on
//! opposite sides of the entry price.

use crate::types::Side;

/// Price at which the take-profit triggers.
pub fn take_profit_price(side: Side, entry_price: f64, take_profit_percent: f64) -> f64 {
    let move_fraction = take_profit_percent / 100.0;
    match side {
        Side::Long => entry_price * (1.0 + move_fraction),
        Side::Short => entry_price * (1.0 - move_fraction),
    }
}

/// Price at which the stop-loss triggers.
pub fn stop_loss_price(side: Side, entry_price: f64, stop_loss_percent: f64) -> f64 {
    let move_fraction = stop_loss_percent / 100.0;
    match side {
        Side::Long => entry_price * (1.0 - move_fraction),
        Side::Short => entry_price * (1.0 + move_fraction),
    }
}

pub fn loss_at_stop_loss(entry_price: f64, stop_loss_price: f64, units: f64) -> f64 {
    (stop_loss_price - entry_price).abs() * units
}

// net of fees, so a tiny target with large fees comes out negative
pub fn take_profit_profit(entry_price: f64, take_profit_price: f64, units: f64, fees: f64) -> f64 {
    (take_profit_price - entry_price).abs() * units - fees
}
