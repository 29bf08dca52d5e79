// 8.0: the calculator. runs the full derivation chain for one position:
// size → margin → price levels → liquidation → balances.
// deterministic, stateless, recomputed from scratch on every call.

use crate::conditional::{loss_at_stop_loss, stop_loss_price, take_profit_price, take_profit_profit};
use crate::config::CalculatorConfig;
use crate::liquidation::{
    balance_needed_for_stop_loss, liquidates_before_stop_loss, liquidation_percent, liquidation_price,
};
use crate::margin::{initial_margin, min_balance, notional_value, position_units};
use crate::types::PositionInput;
use crate::validation::{ensure_valid, InvalidInput};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub position_units: f64,
    pub notional_value: f64,
    pub initial_margin: f64,
    /// Distance to liquidation in percent of entry price.
    pub liquidation_percent: f64,
    pub take_profit_price: f64,
    pub stop_loss_price: f64,
    pub liquidation_price: f64,
    pub loss_at_stop_loss: f64,
    /// Net of fees, negative when fees exceed the move.
    pub take_profit_profit: f64,
    pub min_balance: f64,
    pub liquidates_before_stop_loss: bool,
    pub balance_needed_for_stop_loss: f64,
}

/// Derives every quantity for an already validated input.
///
/// Output is unspecified for input that fails [`crate::validate`]; use
/// [`try_compute`] when the input has not been checked.
pub fn compute(input: &PositionInput) -> CalculationResult {
    let side = input.side;
    let entry = input.entry_price;

    let units = position_units(input.lots, input.lot_size);
    let notional = notional_value(units, entry);
    let margin = initial_margin(notional, input.leverage);
    let liq_percent = liquidation_percent(input.leverage);

    let tp_price = take_profit_price(side, entry, input.take_profit_percent);
    let sl_price = stop_loss_price(side, entry, input.stop_loss_percent);
    let sl_loss = loss_at_stop_loss(entry, sl_price, units);
    let liq_price = liquidation_price(side, entry, liq_percent);

    let min_bal = min_balance(margin, sl_loss, input.fees);
    let tp_profit = take_profit_profit(entry, tp_price, units, input.fees);

    let liquidates_first = liquidates_before_stop_loss(side, liq_price, sl_price);
    let needed = balance_needed_for_stop_loss(liquidates_first, entry, liq_price, units, input.fees, min_bal);

    debug!(
        side = %side,
        leverage = input.leverage,
        min_balance = min_bal,
        liquidates_first,
        "position computed"
    );

    CalculationResult {
        position_units: units,
        notional_value: notional,
        initial_margin: margin,
        liquidation_percent: liq_percent,
        take_profit_price: tp_price,
        stop_loss_price: sl_price,
        liquidation_price: liq_price,
        loss_at_stop_loss: sl_loss,
        take_profit_profit: tp_profit,
        min_balance: min_bal,
        liquidates_before_stop_loss: liquidates_first,
        balance_needed_for_stop_loss: needed,
    }
}

/// Validates with the default limits, then computes. No partial results.
pub fn try_compute(input: &PositionInput) -> Result<CalculationResult, InvalidInput> {
    try_compute_with(input, &CalculatorConfig::default())
}

pub fn try_compute_with(input: &PositionInput, config: &CalculatorConfig) -> Result<CalculationResult, InvalidInput> {
    ensure_valid(input, &config.limits)?;
    Ok(compute(input))
}
