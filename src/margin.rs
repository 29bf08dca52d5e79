//! Position sizing and margin requirements.
//!
//! Lots convert to underlying units through the lot size. Initial margin is
//! notional value divided by leverage. The minimum balance a trader needs is
//! that margin plus the full loss if the stop-loss fills, plus fees.

/// Underlying units held: `lots * lot_size`.
pub fn position_units(lots: f64, lot_size: f64) -> f64 {
    lots * lot_size
}

pub fn notional_value(units: f64, entry_price: f64) -> f64 {
    units * entry_price
}

// 10x leverage on 50k notional → 5k margin
pub fn initial_margin(notional: f64, leverage: f64) -> f64 {
    notional / leverage
}

/// Equity required to open the position and survive down to the stop-loss.
pub fn min_balance(initial_margin: f64, loss_at_stop_loss: f64, fees: f64) -> f64 {
    initial_margin + loss_at_stop_loss + fees
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_from_lots() {
        assert_eq!(position_units(10.0, 0.5), 5.0);
        assert_eq!(position_units(4.0, 0.25), 1.0);
    }

    #[test]
    fn notional_calculation() {
        // 1 BTC at $50k
        assert_eq!(notional_value(1.0, 50000.0), 50000.0);
    }

    #[test]
    fn margin_at_10x_leverage() {
        assert_eq!(initial_margin(50000.0, 10.0), 5000.0);
    }

    #[test]
    fn margin_at_1x_is_full_notional() {
        assert_eq!(initial_margin(50000.0, 1.0), 50000.0);
    }

    #[test]
    fn min_balance_sums_components() {
        assert_eq!(min_balance(5000.0, 500.0, 2.5), 5502.5);
        assert_eq!(min_balance(5000.0, 0.0, 0.0), 5000.0);
    }
}
