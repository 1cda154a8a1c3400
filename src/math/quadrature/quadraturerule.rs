use crate::math::quadrature::gausslegendre;
use crate::math::quadrature::quadratureerror::QuadratureError;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-10;

/// [-1, 1] 上的一個求積點：權重與節點。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraturePoint {
    weight: f64,
    node: f64
}

impl QuadraturePoint {
    pub const fn new(weight: f64, node: f64) -> QuadraturePoint {
        QuadraturePoint { weight: weight, node: node }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn node(&self) -> f64 {
        self.node
    }
}

/// Canonical quadrature rule on [-1, 1].
///
/// Points are kept in the order they were supplied (Gauss-Legendre rules are
/// ordered by ascending node). A rule is built once and then only read, so it
/// is shared by reference between evaluations and threads.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureRule {
    points: Vec<QuadraturePoint>
}

impl QuadratureRule {
    /// Builds a rule from explicit points.
    ///
    /// Every node must lie in [-1, 1] and the weights must sum to 2, the
    /// length of the reference interval.
    pub fn new(points: Vec<QuadraturePoint>) -> Result<QuadratureRule, QuadratureError> {
        if points.is_empty() {
            return Err(QuadratureError::InvalidRule { reason: "rule has no points".to_owned() });
        }
        for pt in points.iter() {
            if !pt.weight.is_finite() || !pt.node.is_finite() {
                return Err(QuadratureError::InvalidRule {
                    reason: format!("non-finite point (weight {}, node {})", pt.weight, pt.node)
                });
            }
            if pt.node < -1.0 || pt.node > 1.0 {
                return Err(QuadratureError::InvalidRule {
                    reason: format!("node {} lies outside [-1, 1]", pt.node)
                });
            }
        }
        let weight_sum: f64 = points.iter().map(|pt| pt.weight).sum();
        if (weight_sum - 2.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(QuadratureError::InvalidRule {
                reason: format!("weights sum to {}, expected 2", weight_sum)
            });
        }
        Ok(QuadratureRule { points: points })
    }

    /// The 6-point Gauss-Legendre rule (exact up to degree 11).
    pub fn gauss_legendre_6() -> QuadratureRule {
        QuadratureRule { points: gausslegendre::GAUSS_LEGENDRE_6.to_vec() }
    }

    /// `order`-point Gauss-Legendre rule.
    ///
    /// Order 6 returns the tabulated constants; other orders are computed.
    pub fn gauss_legendre(order: usize) -> Result<QuadratureRule, QuadratureError> {
        if order == gausslegendre::GAUSS_LEGENDRE_6.len() {
            return Ok(Self::gauss_legendre_6());
        }
        let points = gausslegendre::golub_welsch(order)?;
        QuadratureRule::new(points)
    }

    pub fn points(&self) -> &[QuadraturePoint] {
        &self.points
    }

    pub fn order(&self) -> usize {
        self.points.len()
    }
}

impl Default for QuadratureRule {
    fn default() -> Self {
        Self::gauss_legendre_6()
    }
}
