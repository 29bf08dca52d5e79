//! Input validation.
//!
//! Every field is checked independently and every violation is reported at
//! once, so a caller can flag all bad fields together. A non-empty report
//! means no calculation may be shown at all.
//!
//! Rules are written as "valid when the bound holds" so that NaN, which
//! compares false against everything, is always rejected. Infinities are
//! rejected too, which keeps every derived quantity finite.

use crate::config::InputLimits;
use crate::types::{Field, PositionInput};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Which input fields failed validation. All false means the input is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvalidFields {
    pub leverage: bool,
    pub lot_size: bool,
    pub entry_price: bool,
    pub lots: bool,
    pub take_profit_percent: bool,
    pub stop_loss_percent: bool,
    pub fees: bool,
}

impl InvalidFields {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn contains(&self, field: Field) -> bool {
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

    /// Invalid fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL.into_iter().filter(move |f| self.contains(*f))
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.iter().map(|f| f.message()).collect()
    }
}

impl fmt::Display for InvalidFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|field| field.name()).collect();
        f.write_str(&names.join(", "))
    }
}

/// Returned instead of a result when any input field is invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid input fields: {fields}")]
pub struct InvalidInput {
    pub fields: InvalidFields,
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn within(value: f64, min: f64, max: f64) -> bool {
    value.is_finite() && value >= min && value <= max
}

/// Validates against the default leverage limits (1x to 200x).
pub fn validate(input: &PositionInput) -> InvalidFields {
    validate_with(input, &InputLimits::default())
}

pub fn validate_with(input: &PositionInput, limits: &InputLimits) -> InvalidFields {
    let invalid = InvalidFields {
        leverage: !within(input.leverage, limits.min_leverage, limits.max_leverage),
        lot_size: !positive(input.lot_size),
        entry_price: !positive(input.entry_price),
        lots: !positive(input.lots),
        take_profit_percent: !non_negative(input.take_profit_percent),
        stop_loss_percent: !positive(input.stop_loss_percent),
        fees: !non_negative(input.fees),
    };

    if !invalid.is_empty() {
        debug!(fields = %invalid, "position input rejected");
    }

    invalid
}

/// Same check as [`validate`], as a `Result` for `?` chains.
pub fn ensure_valid(input: &PositionInput, limits: &InputLimits) -> Result<(), InvalidInput> {
    let fields = validate_with(input, limits);
    if fields.is_empty() {
        Ok(())
    } else {
        Err(InvalidInput { fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_input_is_valid() {
        let invalid = validate(&PositionInput::default());
        assert!(invalid.is_empty());
        assert_eq!(invalid.len(), 0);
        assert_eq!(invalid.to_string(), "");
    }

    #[test]
    fn leverage_bounds_inclusive() {
        let base = PositionInput::default();
        assert!(validate(&base.with_leverage(1.0)).is_empty());
        assert!(validate(&base.with_leverage(200.0)).is_empty());
        assert!(validate(&base.with_leverage(0.99)).leverage);
        assert!(validate(&base.with_leverage(200.01)).leverage);
    }

    #[test]
    fn zero_rejected_where_positive_required() {
        let input = PositionInput {
            lot_size: 0.0,
            entry_price: 0.0,
            lots: 0.0,
            stop_loss_percent: 0.0,
            ..PositionInput::default()
        };
        let invalid = validate(&input);
        let fields: Vec<Field> = invalid.iter().collect();
        assert_eq!(
            fields,
            vec![Field::LotSize, Field::EntryPrice, Field::Lots, Field::StopLossPercent]
        );
    }

    #[test]
    fn zero_allowed_for_take_profit_and_fees() {
        let input = PositionInput {
            take_profit_percent: 0.0,
            fees: 0.0,
            ..PositionInput::default()
        };
        assert!(validate(&input).is_empty());
    }

    #[test]
    fn negatives_rejected() {
        let input = PositionInput {
            take_profit_percent: -0.1,
            fees: -0.01,
            ..PositionInput::default()
        };
        let invalid = validate(&input);
        assert!(invalid.take_profit_percent);
        assert!(invalid.fees);
        assert_eq!(invalid.len(), 2);
    }

    #[test]
    fn all_violations_reported_together() {
        let input = PositionInput {
            leverage: 500.0,
            fees: -1.0,
            ..PositionInput::default()
        };
        let invalid = validate(&input);
        assert!(invalid.contains(Field::Leverage));
        assert!(invalid.contains(Field::Fees));
        assert!(!invalid.contains(Field::Lots));
        assert_eq!(invalid.to_string(), "leverage, fees");
        assert_eq!(
            invalid.messages(),
            vec!["Leverage must be between 1 and 200", "Fees must be non-negative"]
        );
    }

    #[test]
    fn non_finite_rejected() {
        let input = PositionInput {
            leverage: f64::NAN,
            entry_price: f64::INFINITY,
            fees: f64::NAN,
            ..PositionInput::default()
        };
        let invalid = validate(&input);
        assert!(invalid.leverage);
        assert!(invalid.entry_price);
        assert!(invalid.fees);
        assert_eq!(invalid.len(), 3);
    }

    #[test]
    fn custom_limits() {
        let limits = InputLimits {
            min_leverage: 2.0,
            max_leverage: 20.0,
        };
        let base = PositionInput::default();
        assert!(validate_with(&base.with_leverage(20.0), &limits).is_empty());
        assert!(validate_with(&base.with_leverage(25.0), &limits).leverage);
        assert!(validate_with(&base.with_leverage(1.0), &limits).leverage);
    }

    #[test]
    fn ensure_valid_wraps_report() {
        let limits = InputLimits::default();
        assert!(ensure_valid(&PositionInput::default(), &limits).is_ok());

        let input = PositionInput {
            lots: -3.0,
            ..PositionInput::default()
        };
        let err = ensure_valid(&input, &limits).unwrap_err();
        assert!(err.fields.lots);
        assert_eq!(err.to_string(), "invalid input fields: lots");
    }
}
