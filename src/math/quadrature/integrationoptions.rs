use serde::{
    Serialize,
    Deserialize
};

use crate::math::quadrature::quadratureerror::QuadratureError;

const DEFAULT_MAX_ITERATIONS: usize = 24;
/// Largest accepted `max_iterations`: at most 2^30 subintervals per estimate.
pub const MAX_ITERATIONS: usize = 30;
const DEFAULT_RULE_ORDER: usize = 6;

/// What to do when the previous estimate is exactly zero but the current one
/// is not, so the relative change is undefined.
///
/// Two consecutive zero estimates always count as converged with zero error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroEstimatePolicy {
    /// Use |current - previous| for that step.
    #[default]
    AbsoluteError,
    /// Report `QuadratureError::ZeroEstimate`.
    Fail
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationOptions {
    /// Maximum number of doublings after the initial n = 1 estimate.
    max_iterations: usize,
    zero_estimate_policy: ZeroEstimatePolicy,
    rule_order: usize
}

impl IntegrationOptions {
    pub fn new(max_iterations: usize,
               zero_estimate_policy: ZeroEstimatePolicy,
               rule_order: usize) -> Result<IntegrationOptions, QuadratureError> {
        let options = IntegrationOptions {
            max_iterations: max_iterations,
            zero_estimate_policy: zero_estimate_policy,
            rule_order: rule_order
        };
        options.validate()?;
        Ok(options)
    }

    /// 每次加倍都重新計算整個區間，2^30 個子區間已是數十億次函數求值。
    pub fn validate(&self) -> Result<(), QuadratureError> {
        if self.max_iterations == 0 {
            return Err(QuadratureError::InvalidOptions {
                reason: "max_iterations must be at least 1".to_owned()
            });
        }
        if self.max_iterations > MAX_ITERATIONS {
            return Err(QuadratureError::InvalidOptions {
                reason: format!("max_iterations must be at most {}", MAX_ITERATIONS)
            });
        }
        if self.rule_order == 0 {
            return Err(QuadratureError::InvalidOptions {
                reason: "rule_order must be at least 1".to_owned()
            });
        }
        Ok(())
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn zero_estimate_policy(&self) -> ZeroEstimatePolicy {
        self.zero_estimate_policy
    }

    pub fn rule_order(&self) -> usize {
        self.rule_order
    }

    pub fn with_max_iterations(self, max_iterations: usize) -> Result<IntegrationOptions, QuadratureError> {
        IntegrationOptions::new(max_iterations, self.zero_estimate_policy, self.rule_order)
    }

    pub fn with_zero_estimate_policy(self, zero_estimate_policy: ZeroEstimatePolicy) -> IntegrationOptions {
        IntegrationOptions { zero_estimate_policy: zero_estimate_policy, ..self }
    }

    pub fn with_rule_order(self, rule_order: usize) -> Result<IntegrationOptions, QuadratureError> {
        IntegrationOptions::new(self.max_iterations, self.zero_estimate_policy, rule_order)
    }
}

impl Default for IntegrationOptions {
    fn default() -> Self {
        IntegrationOptions {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            zero_estimate_policy: ZeroEstimatePolicy::default(),
            rule_order: DEFAULT_RULE_ORDER
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = IntegrationOptions::default();
        assert_eq!(options.max_iterations(), 24);
        assert_eq!(options.zero_estimate_policy(), ZeroEstimatePolicy::AbsoluteError);
        assert_eq!(options.rule_order(), 6);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let json = serde_json::json!({"zero_estimate_policy": "fail"});
        let options: IntegrationOptions = serde_json::from_value(json).unwrap();
        assert_eq!(options.zero_estimate_policy(), ZeroEstimatePolicy::Fail);
        assert_eq!(options.max_iterations(), 24);
    }

    #[test]
    fn rejects_zero_iterations() {
        let err = IntegrationOptions::default().with_max_iterations(0).unwrap_err();
        assert!(err.is_input_error());
        assert!(IntegrationOptions::default().with_rule_order(0).is_err());
    }

    #[test]
    fn caps_iterations() {
        let options = IntegrationOptions::default().with_max_iterations(MAX_ITERATIONS).unwrap();
        assert_eq!(options.max_iterations(), 30);
        for max_iterations in [MAX_ITERATIONS + 1, 63, usize::BITS as usize] {
            let err = IntegrationOptions::default().with_max_iterations(max_iterations).unwrap_err();
            assert!(matches!(err, QuadratureError::InvalidOptions { .. }));
        }
        let json = serde_json::json!({"max_iterations": 63});
        let options: IntegrationOptions = serde_json::from_value(json).unwrap();
        assert!(options.validate().is_err());
    }
}
