use std::num::NonZeroUsize;

use crate::math::integrand::integrand::Integrand;
use crate::math::quadrature::quadraturerule::QuadratureRule;

/// Composite quadrature of `integrand` over `[a, b]` with `n` equal-width
/// subintervals.
///
/// Each subinterval of width `h = (b - a) / n` and midpoint `m` receives the
/// rule mapped from [-1, 1] via `x = m + (h / 2)·t`. Weighted values from all
/// subintervals go into one accumulator, scaled once by the Jacobian `h / 2`.
///
/// `n` is a `NonZeroUsize`, so an empty partition cannot be requested.
/// Non-finite integrand values propagate into the returned estimate.
pub fn evaluate<I>(integrand: &I, a: f64, b: f64, n: NonZeroUsize, rule: &QuadratureRule) -> f64
    where I: Integrand + ?Sized {
    let n = n.get();
    let interval_length = (b - a) / n as f64;
    let half_length = interval_length / 2.0;

    let mut result = 0.0;
    for i in 0..n {
        let middle = a + i as f64 * interval_length + half_length;
        for pt in rule.points() {
            result += pt.weight() * integrand.value(middle + half_length * pt.node());
        }
    }
    half_length * result
}
