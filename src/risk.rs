//! Risk classification by leverage.
//!
//! A coarse qualitative bucket shown next to the calculation. It depends on
//! leverage alone, never on the rest of the result. Each tier bound is
//! inclusive on the lower tier: exactly 10x is still conservative.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top of the default aggressive tier. Anything above it is extreme and
/// gets an extra warning, whatever tiers are configured.
pub const EXTREME_LEVERAGE_WARNING: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Conservative,
    Moderate,
    Aggressive,
    Extreme,
}

impl RiskLevel {
    /// Badge text for the level.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Conservative => "Conservative",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::Aggressive => "Aggressive",
            RiskLevel::Extreme => "Extreme Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Upper leverage bound of each tier. Anything above `aggressive_max` is extreme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskTiers {
    pub conservative_max: f64,
    pub moderate_max: f64,
    pub aggressive_max: f64,
}

impl Default for RiskTiers {
    fn default() -> Self {
        Self {
            conservative_max: 10.0,
            moderate_max: 50.0,
            aggressive_max: EXTREME_LEVERAGE_WARNING,
        }
    }
}

impl RiskTiers {
    pub fn classify(&self, leverage: f64) -> RiskLevel {
        if leverage <= self.conservative_max {
            RiskLevel::Conservative
        } else if leverage <= self.moderate_max {
            RiskLevel::Moderate
        } else if leverage <= self.aggressive_max {
            RiskLevel::Aggressive
        } else {
            RiskLevel::Extreme
        }
    }
}

/// Classifies leverage with the default tiers.
pub fn classify_risk(leverage: f64) -> RiskLevel {
    RiskTiers::default().classify(leverage)
}

pub fn classify_risk_with(leverage: f64, tiers: &RiskTiers) -> RiskLevel {
    tiers.classify(leverage)
}

pub fn is_extreme_leverage(leverage: f64) -> bool {
    leverage > EXTREME_LEVERAGE_WARNING
}
