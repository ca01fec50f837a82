//! Configuration types for KPI scoring.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML policy files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about the loaded policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyMetadata {
    /// Short identifier for the policy (e.g., "affiliate-ops").
    pub code: String,
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
}

impl Default for PolicyMetadata {
    fn default() -> Self {
        Self {
            code: "affiliate-ops".to_string(),
            name: "Affiliate Operations KPI Policy".to_string(),
            version: "builtin".to_string(),
        }
    }
}

/// Weights applied to each metric percentage when blending the total KPI.
///
/// Weights are expressed as percentages and must sum to 100.
///
/// # Example
///
/// ```
/// use kpi_engine::config::KpiWeights;
/// use rust_decimal::Decimal;
///
/// let weights = KpiWeights::default();
/// assert_eq!(weights.sales, Decimal::from(50));
/// assert!(weights.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiWeights {
    /// Weight of the sales percentage.
    pub sales: Decimal,
    /// Weight of the commission percentage.
    pub commission: Decimal,
    /// Weight of the attendance percentage.
    pub attendance: Decimal,
}

impl Default for KpiWeights {
    fn default() -> Self {
        Self {
            sales: Decimal::from(50),
            commission: Decimal::from(30),
            attendance: Decimal::from(20),
        }
    }
}

impl KpiWeights {
    /// Returns the sum of all three weights.
    pub fn total(&self) -> Decimal {
        self.sales + self.commission + self.attendance
    }

    /// Checks that every weight is non-negative and that they sum to 100.
    pub fn validate(&self) -> EngineResult<()> {
        for (name, weight) in [
            ("sales", self.sales),
            ("commission", self.commission),
            ("attendance", self.attendance),
        ] {
            if weight < Decimal::ZERO {
                return Err(EngineError::InvalidPolicy {
                    message: format!("{} weight must not be negative, got {}", name, weight),
                });
            }
        }

        let total = self.total();
        if total != Decimal::ONE_HUNDRED {
            return Err(EngineError::InvalidPolicy {
                message: format!("weights sum to {}, expected 100", total.normalize()),
            });
        }

        Ok(())
    }
}

fn default_cap() -> Decimal {
    Decimal::ONE_HUNDRED
}

/// KPI scoring policy from kpi.yaml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiPolicy {
    /// Metric weights used for the blended total.
    #[serde(default)]
    pub weights: KpiWeights,
    /// Upper bound of the blended total.
    #[serde(default = "default_cap")]
    pub score_cap: Decimal,
    /// Upper bound of each individually reported metric percentage.
    #[serde(default = "default_cap")]
    pub component_cap: Decimal,
}

impl Default for KpiPolicy {
    fn default() -> Self {
        Self {
            weights: KpiWeights::default(),
            score_cap: default_cap(),
            component_cap: default_cap(),
        }
    }
}

impl KpiPolicy {
    /// Validates the weights and caps of this policy.
    pub fn validate(&self) -> EngineResult<()> {
        self.weights.validate()?;

        if self.score_cap <= Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                message: format!("score_cap must be positive, got {}", self.score_cap),
            });
        }
        if self.component_cap <= Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                message: format!("component_cap must be positive, got {}", self.component_cap),
            });
        }

        Ok(())
    }
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    metadata: PolicyMetadata,
    kpi: KpiPolicy,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(metadata: PolicyMetadata, kpi: KpiPolicy) -> Self {
        Self { metadata, kpi }
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the KPI scoring policy.
    pub fn kpi(&self) -> &KpiPolicy {
        &self.kpi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_weights_are_valid() {
        let weights = KpiWeights::default();
        assert_eq!(weights.total(), dec("100"));
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_weights_not_summing_to_100_rejected() {
        let weights = KpiWeights {
            sales: dec("50"),
            commission: dec("30"),
            attendance: dec("10"),
        };
        match weights.validate() {
            Err(EngineError::InvalidPolicy { message }) => {
                assert!(message.contains("sum to 90"), "got: {}", message);
            }
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = KpiWeights {
            sales: dec("120"),
            commission: dec("-20"),
            attendance: dec("0"),
        };
        match weights.validate() {
            Err(EngineError::InvalidPolicy { message }) => {
                assert!(message.contains("commission"), "got: {}", message);
            }
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_fractional_weights_accepted() {
        let weights = KpiWeights {
            sales: dec("33.34"),
            commission: dec("33.33"),
            attendance: dec("33.33"),
        };
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_zero_score_cap_rejected() {
        let policy = KpiPolicy {
            score_cap: Decimal::ZERO,
            ..KpiPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_kpi_policy_caps_default_when_missing_from_yaml() {
        let yaml = r#"
weights:
  sales: 60
  commission: 20
  attendance: 20
"#;
        let policy: KpiPolicy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(policy.weights.sales, dec("60"));
        assert_eq!(policy.score_cap, dec("100"));
        assert_eq!(policy.component_cap, dec("100"));
    }
}
