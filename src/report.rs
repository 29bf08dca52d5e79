// 8.1: one pre-trade check end to end. validation, calculation and risk tier
// bundled for a caller that just wants an answer or the list of bad fields.

use crate::calculator::{compute, CalculationResult};
use crate::config::{CalculatorConfig, ConfigError};
use crate::format::format_currency;
use crate::risk::{is_extreme_leverage, RiskLevel};
use crate::types::PositionInput;
use crate::validation::{ensure_valid, InvalidFields, InvalidInput};
use serde::{Deserialize, Serialize};

/// Whether the stop-loss can actually fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StopLossOutcome {
    ReachesStopLoss,
    LiquidatedFirst {
        liquidation_price: f64,
        stop_loss_price: f64,
        balance_needed: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub result: CalculationResult,
    pub risk_level: RiskLevel,
    pub extreme_leverage: bool,
}

impl Assessment {
    pub fn stop_loss_outcome(&self) -> StopLossOutcome {
        if self.result.liquidates_before_stop_loss {
            StopLossOutcome::LiquidatedFirst {
                liquidation_price: self.result.liquidation_price,
                stop_loss_price: self.result.stop_loss_price,
                balance_needed: self.result.balance_needed_for_stop_loss,
            }
        } else {
            StopLossOutcome::ReachesStopLoss
        }
    }

    /// Human readable warnings, most severe first.
    pub fn notices(&self) -> Vec<String> {
        let mut notices = Vec::new();
        if self.extreme_leverage {
            notices.push("Extreme leverage! Consider reducing risk.".to_string());
        }

        match self.stop_loss_outcome() {
            StopLossOutcome::LiquidatedFirst {
                liquidation_price,
                stop_loss_price,
                balance_needed,
            } => {
                notices.push(format!(
                    "Liquidation will occur at {} before your SL at {}",
                    format_currency(liquidation_price, 2),
                    format_currency(stop_loss_price, 2),
                ));
                notices.push(format!(
                    "You need {} in account to reach your SL without liquidation",
                    format_currency(balance_needed, 2),
                ));
            }
            StopLossOutcome::ReachesStopLoss => {
                notices.push("Your SL will trigger before liquidation".to_string());
            }
        }

        notices
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InvalidInput),
}

impl AssessError {
    /// Bad input fields, if the input was what got rejected.
    pub fn invalid_fields(&self) -> Option<&InvalidFields> {
        match self {
            AssessError::Input(err) => Some(&err.fields),
            AssessError::Config(_) => None,
        }
    }
}

pub fn assess(input: &PositionInput) -> Result<Assessment, AssessError> {
    assess_with(input, &CalculatorConfig::default())
}

/// Checks the config, then the input, then computes.
pub fn assess_with(input: &PositionInput, config: &CalculatorConfig) -> Result<Assessment, AssessError> {
    config.validate()?;
    ensure_valid(input, &config.limits)?;

    Ok(Assessment {
        result: compute(input),
        risk_level: config.risk_tiers.classify(input.leverage),
        extreme_leverage: is_extreme_leverage(input.leverage),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    #[test]
    fn reference_position_is_liquidated_first() {
        let assessment = assess(&PositionInput::default()).unwrap();

        assert_eq!(assessment.risk_level, RiskLevel::Extreme);
        assert!(assessment.extreme_leverage);
        assert!(matches!(
            assessment.stop_loss_outcome(),
            StopLossOutcome::LiquidatedFirst { .. }
        ));
        assert_eq!(
            assessment.notices(),
            vec![
                "Extreme leverage! Consider reducing risk.".to_string(),
                "Liquidation will occur at $91034.54 before your SL at $90577.08".to_string(),
                "You need $5.10 in account to reach your SL without liquidation".to_string(),
            ]
        );
    }

    #[test]
    fn low_leverage_reaches_stop() {
        let input = PositionInput::default().with_leverage(10.0);
        let assessment = assess(&input).unwrap();

        assert_eq!(assessment.risk_level, RiskLevel::Conservative);
        assert!(!assessment.extreme_leverage);
        assert_eq!(assessment.stop_loss_outcome(), StopLossOutcome::ReachesStopLoss);
        assert_eq!(
            assessment.notices(),
            vec!["Your SL will trigger before liquidation".to_string()]
        );
    }

    #[test]
    fn invalid_input_yields_no_assessment() {
        let input = PositionInput {
            entry_price: -1.0,
            stop_loss_percent: 0.0,
            ..PositionInput::default()
        };
        let err = assess(&input).unwrap_err();
        let fields = err.invalid_fields().unwrap();
        assert!(fields.entry_price);
        assert!(fields.stop_loss_percent);
        assert_eq!(err.to_string(), "invalid input fields: entry_price, stop_loss_percent");
    }

    #[test]
    fn inconsistent_config_rejected_before_input() {
        let mut config = CalculatorConfig::default();
        config.risk_tiers.moderate_max = 5.0;

        let err = assess_with(&PositionInput::default(), &config).unwrap_err();
        assert!(matches!(err, AssessError::Config(ConfigError::InvalidRiskTiers { .. })));
        assert!(err.invalid_fields().is_none());

        let mut config = CalculatorConfig::default();
        config.limits.min_leverage = 150.0;
        config.limits.max_leverage = 100.0;
        let err = assess_with(&PositionInput::default(), &config).unwrap_err();
        assert!(matches!(err, AssessError::Config(ConfigError::InvalidLimits { .. })));
    }

    #[test]
    fn custom_tiers_drive_risk_level() {
        let mut config = CalculatorConfig::default();
        config.risk_tiers.conservative_max = 2.0;
        config.risk_tiers.moderate_max = 5.0;
        config.risk_tiers.aggressive_max = 8.0;

        let input = PositionInput::default().with_side(Side::Short).with_leverage(10.0);
        let assessment = assess_with(&input, &config).unwrap();
        assert_eq!(assessment.risk_level, RiskLevel::Extreme);
        // the 100x warning does not follow custom tiers
        assert!(!assessment.extreme_leverage);
    }
}
