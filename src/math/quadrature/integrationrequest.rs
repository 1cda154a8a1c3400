use serde::Deserialize;

use crate::manager::managererror::ManagerError;
use crate::math::integrand::integrandkind::IntegrandKind;
use crate::math::quadrature::convergencedriver::integrate_to_tolerance;
use crate::math::quadrature::integrationoptions::IntegrationOptions;
use crate::math::quadrature::integrationresult::IntegrationResult;
use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::math::quadrature::quadraturerule::QuadratureRule;

/// Checks `a < b` with finite bounds and a finite positive tolerance.
pub fn validate_request(a: f64, b: f64, tolerance: f64) -> Result<(), QuadratureError> {
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(QuadratureError::InvalidInterval { a: a, b: b });
    }
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(QuadratureError::InvalidTolerance { tolerance: tolerance });
    }
    Ok(())
}

#[derive(Deserialize)]
struct IntegrationRequestJsonProp {
    #[serde(default)]
    integrand: IntegrandKind,
    a: f64,
    b: f64,
    tolerance: f64
}

/// A validated `(integrand, a, b, tolerance)` tuple.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationRequest {
    integrand: IntegrandKind,
    a: f64,
    b: f64,
    tolerance: f64
}

impl IntegrationRequest {
    pub fn new(integrand: IntegrandKind,
               a: f64,
               b: f64,
               tolerance: f64) -> Result<IntegrationRequest, QuadratureError> {
        validate_request(a, b, tolerance)?;
        Ok(IntegrationRequest {
            integrand: integrand,
            a: a,
            b: b,
            tolerance: tolerance
        })
    }

    pub fn from_json(json_value: serde_json::Value) -> Result<IntegrationRequest, ManagerError> {
        let json_prop: IntegrationRequestJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        let request = IntegrationRequest::new(json_prop.integrand, json_prop.a, json_prop.b, json_prop.tolerance)?;
        Ok(request)
    }

    pub fn integrand(&self) -> &IntegrandKind {
        &self.integrand
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn with_bounds(&self, a: f64, b: f64) -> Result<IntegrationRequest, QuadratureError> {
        IntegrationRequest::new(self.integrand.clone(), a, b, self.tolerance)
    }

    pub fn with_tolerance(&self, tolerance: f64) -> Result<IntegrationRequest, QuadratureError> {
        IntegrationRequest::new(self.integrand.clone(), self.a, self.b, tolerance)
    }

    pub fn integrate(&self,
                     rule: &QuadratureRule,
                     options: &IntegrationOptions) -> Result<IntegrationResult, QuadratureError> {
        integrate_to_tolerance(&self.integrand, self.a, self.b, self.tolerance, rule, options)
    }
}

/// 1/sqrt(1+x^4) on [0, 2] to a relative tolerance of 1e-6.
impl Default for IntegrationRequest {
    fn default() -> Self {
        IntegrationRequest {
            integrand: IntegrandKind::InverseQuarticRoot,
            a: 0.0,
            b: 2.0,
            tolerance: 1e-6
        }
    }
}
