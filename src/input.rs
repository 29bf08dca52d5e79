// 1.3: raw form input. callers hand over text exactly as typed; this turns it
// into a PositionInput. empty or unparseable text becomes 0, which the
// validator then rejects wherever zero is out of range.

use crate::types::{PositionInput, Side};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown position side {0:?}, expected \"long\" or \"short\"")]
pub struct ParseSideError(pub String);

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" => Ok(Side::Long),
            "short" => Ok(Side::Short),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}

/// Unparsed text of each numeric field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPositionInput {
    pub side: Side,
    pub leverage: String,
    pub lot_size: String,
    pub entry_price: String,
    pub lots: String,
    pub take_profit_percent: String,
    pub stop_loss_percent: String,
    pub fees: String,
}

impl From<&PositionInput> for RawPositionInput {
    fn from(input: &PositionInput) -> Self {
        Self {
            side: input.side,
            leverage: input.leverage.to_string(),
            lot_size: input.lot_size.to_string(),
            entry_price: input.entry_price.to_string(),
            lots: input.lots.to_string(),
            take_profit_percent: input.take_profit_percent.to_string(),
            stop_loss_percent: input.stop_loss_percent.to_string(),
            fees: input.fees.to_string(),
        }
    }
}

impl RawPositionInput {
    pub fn normalize(&self) -> PositionInput {
        PositionInput {
            side: self.side,
            leverage: parse_number(&self.leverage),
            lot_size: parse_number(&self.lot_size),
            entry_price: parse_number(&self.entry_price),
            lots: parse_number(&self.lots),
            take_profit_percent: parse_number(&self.take_profit_percent),
            stop_loss_percent: parse_number(&self.stop_loss_percent),
            fees: parse_number(&self.fees),
        }
    }
}

/// Parses one field, coercing anything unparseable to zero.
pub fn parse_number(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}
