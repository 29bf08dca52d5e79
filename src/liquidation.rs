//! Liquidation price and its relation to the stop-loss.
//!
//! With no maintenance buffer, a position is liquidated once the adverse move
//! consumes the whole initial margin: a move of `100 / leverage` percent of
//! entry. If that level sits between entry and the stop-loss, the stop never
//! fills and the trader needs extra balance to carry the position that far.

use crate::types::Side;

/// Distance from entry to liquidation, in percent of entry price.
pub fn liquidation_percent(leverage: f64) -> f64 {
    100.0 / leverage
}

/// Calculates the price at which a position gets liquidated.
pub fn liquidation_price(side: Side, entry_price: f64, liquidation_percent: f64) -> f64 {
    let move_fraction = liquidation_percent / 100.0;
    match side {
        Side::Long => entry_price * (1.0 - move_fraction),
        Side::Short => entry_price * (1.0 + move_fraction),
    }
}

/// True when liquidation is hit at a worse price than the stop, i.e. the
/// stop-loss order would never execute.
pub fn liquidates_before_stop_loss(side: Side, liquidation_price: f64, stop_loss_price: f64) -> bool {
    match side {
        Side::Long => liquidation_price > stop_loss_price,
        Side::Short => liquidation_price < stop_loss_price,
    }
}

/// Balance needed to hold the position until the stop-loss.
///
/// When liquidation comes first this is the loss carried up to the
/// liquidation level plus fees, otherwise the already computed minimum
/// balance covers the stop.
pub fn balance_needed_for_stop_loss(
    liquidates_first: bool,
    entry_price: f64,
    liquidation_price: f64,
    units: f64,
    fees: f64,
    min_balance: f64,
) -> f64 {
    if liquidates_first {
        (entry_price - liquidation_price).abs() * units + fees
    } else {
        min_balance
    }
}
