// 1.0: the primitives every calculation reads. trade direction, the position
// parameters a trader types in, and the identifiers of those parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

// Long = profit when price goes up. Short = profit when price goes down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Long,
    Short,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Long => "long",
            Side::Short => "short",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// 1.1: one position as the trader describes it. percents are whole percents
// of entry price (1.0 = 1%), fees are a flat amount in account currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionInput {
    pub side: Side,
    pub leverage: f64,
    /// Underlying units represented by one lot.
    pub lot_size: f64,
    pub entry_price: f64,
    pub lots: f64,
    pub take_profit_percent: f64,
    pub stop_loss_percent: f64,
    pub fees: f64,
}

// reference position: 10 lots of 0.001 BTC at 200x
impl Default for PositionInput {
    fn default() -> Self {
        Self {
            side: Side::Long,
            leverage: 200.0,
            lot_size: 0.001,
            entry_price: 91492.0,
            lots: 10.0,
            take_profit_percent: 0.33,
            stop_loss_percent: 1.0,
            fees: 0.53,
        }
    }
}

impl PositionInput {
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn with_leverage(mut self, leverage: f64) -> Self {
        self.leverage = leverage;
        self
    }

    pub fn value_of(&self, field: Field) -> f64 {
        match field {
            Field::Leverage => self.leverage,
            Field::LotSize => self.lot_size,
            Field::EntryPrice => self.entry_price,
            Field::Lots => self.lots,
            Field::TakeProfitPercent => self.take_profit_percent,
            Field::StopLossPercent => self.stop_loss_percent,
            Field::Fees => self.fees,
        }
    }
}

// 1.2: the seven numeric input fields. order here is the order fields are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Leverage,
    LotSize,
    EntryPrice,
    Lots,
    TakeProfitPercent,
    StopLossPercent,
    Fees,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Leverage,
        Field::LotSize,
        Field::EntryPrice,
        Field::Lots,
        Field::TakeProfitPercent,
        Field::StopLossPercent,
        Field::Fees,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Leverage => "leverage",
            Field::LotSize => "lot_size",
            Field::EntryPrice => "entry_price",
            Field::Lots => "lots",
            Field::TakeProfitPercent => "take_profit_percent",
            Field::StopLossPercent => "stop_loss_percent",
            Field::Fees => "fees",
        }
    }

    /// Message shown next to the field when it fails validation.
    pub fn message(&self) -> &'static str {
        match self {
            Field::Leverage => "Leverage must be between 1 and 200",
            Field::LotSize => "Lot size must be positive",
            Field::EntryPrice => "Entry price must be positive",
            Field::Lots => "Quantity must be positive",
            Field::TakeProfitPercent => "Take profit must be non-negative",
            Field::StopLossPercent => "Stop loss must be positive",
            Field::Fees => "Fees must be non-negative",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_display() {
        assert_eq!(Side::Long.to_string(), "long");
        assert_eq!(Side::Short.as_str(), "short");
    }

    #[test]
    fn default_is_reference_position() {
        let input = PositionInput::default();
        assert_eq!(input.side, Side::Long);
        assert_eq!(input.leverage, 200.0);
        assert_eq!(input.entry_price, 91492.0);
        assert_eq!(input.fees, 0.53);
    }

    #[test]
    fn value_of_reads_each_field() {
        let input = PositionInput::default();
        let values: Vec<f64> = Field::ALL.iter().map(|f| input.value_of(*f)).collect();
        assert_eq!(values, vec![200.0, 0.001, 91492.0, 10.0, 0.33, 1.0, 0.53]);
    }

    #[test]
    fn field_names_are_snake_case() {
        assert_eq!(Field::TakeProfitPercent.to_string(), "take_profit_percent");
        assert_eq!(Field::Fees.message(), "Fees must be non-negative");
    }
}
