// 7.0 config.rs: every tunable bound in one place. leverage limits and risk tiers.
// 7.1 defaults reproduce the stock calculator: 1x to 200x, tiers at 10/50/100.

use serde::{Deserialize, Serialize};

use crate::risk::RiskTiers;

// Leverage range accepted by validation, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputLimits {
    pub min_leverage: f64,
    pub max_leverage: f64,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_leverage: 1.0,
            max_leverage: 200.0,
        }
    }
}

// The complete calculator configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub limits: InputLimits,
    pub risk_tiers: RiskTiers,
}

impl CalculatorConfig {
    // Validate the configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = &self.limits;
        if !limits.min_leverage.is_finite() || !limits.max_leverage.is_finite() {
            return Err(ConfigError::InvalidLimits {
                reason: "Leverage limits must be finite".to_string(),
            });
        }

        // margin is notional / leverage, below 1x it would exceed notional
        if limits.min_leverage < 1.0 {
            return Err(ConfigError::InvalidLimits {
                reason: "Min leverage must be at least 1".to_string(),
            });
        }

        if limits.min_leverage > limits.max_leverage {
            return Err(ConfigError::InvalidLimits {
                reason: "Min leverage must not exceed max".to_string(),
            });
        }

        let tiers = &self.risk_tiers;
        let bounds = [tiers.conservative_max, tiers.moderate_max, tiers.aggressive_max];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(ConfigError::InvalidRiskTiers {
                reason: "Tier bounds must be finite".to_string(),
            });
        }

        if !(tiers.conservative_max < tiers.moderate_max && tiers.moderate_max < tiers.aggressive_max) {
            return Err(ConfigError::InvalidRiskTiers {
                reason: "Tier bounds must be strictly increasing".to_string(),
            });
        }

        Ok(())
    }

    pub fn max_leverage(&self) -> f64 {
        self.limits.max_leverage
    }
}

// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid leverage limits: {reason}")]
    InvalidLimits { reason: String },

    #[error("Invalid risk tiers: {reason}")]
    InvalidRiskTiers { reason: String },
}
