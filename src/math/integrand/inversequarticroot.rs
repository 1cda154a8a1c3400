use crate::math::integrand::integrand::Integrand;

/// f(x) = 1 / sqrt(1 + x⁴)
///
/// 在整條實數線上皆有定義且平滑，分母恆 >= 1。
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InverseQuarticRoot;

impl InverseQuarticRoot {
    pub fn new() -> InverseQuarticRoot {
        InverseQuarticRoot
    }
}

impl Integrand for InverseQuarticRoot {
    fn value(&self, x: f64) -> f64 {
        let x2 = x * x;
        1.0 / f64::mul_add(x2, x2, 1.0).sqrt()
    }
}
