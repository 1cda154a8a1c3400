use std::fmt::Display;

use serde::{
    Serialize,
    Deserialize
};

use crate::math::integrand::integrand::Integrand;
use crate::math::integrand::inversequarticroot::InverseQuarticRoot;

/// Integrands that can be named in a configuration file.
///
/// JSON form is tagged by `type`, e.g.
/// `{"type": "polynomial", "coefficients": [3.0, 0.0, 1.0]}` for 3x² + 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IntegrandKind {
    InverseQuarticRoot,
    Constant { value: f64 },
    /// 係數由最高次項排到常數項（Horner 形式）。
    Polynomial { coefficients: Vec<f64> }
}

impl Integrand for IntegrandKind {
    fn value(&self, x: f64) -> f64 {
        match self {
            IntegrandKind::InverseQuarticRoot => InverseQuarticRoot.value(x),
            IntegrandKind::Constant { value } => *value,
            IntegrandKind::Polynomial { coefficients } => {
                coefficients
                    .iter()
                    .fold(0.0, |acc, &beta| f64::mul_add(acc, x, beta))
            }
        }
    }
}

impl Default for IntegrandKind {
    fn default() -> Self {
        IntegrandKind::InverseQuarticRoot
    }
}

impl Display for IntegrandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntegrandKind::InverseQuarticRoot => write!(f, "1/sqrt(1+x^4)"),
            IntegrandKind::Constant { value } => write!(f, "{}", value),
            IntegrandKind::Polynomial { coefficients } => write!(f, "poly{:?}", coefficients)
        }
    }
}
