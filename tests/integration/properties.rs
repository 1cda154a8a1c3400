//! Property tests for the quadrature core.

use std::num::NonZeroUsize;

use proptest::prelude::*;

use compquad::math::integrand::integrand::Integrand;
use compquad::math::integrand::inversequarticroot::InverseQuarticRoot;
use compquad::math::quadrature::compositeevaluator::evaluate;
use compquad::math::quadrature::convergencedriver::integrate;
use compquad::math::quadrature::quadraturerule::QuadratureRule;

proptest! {
    #[test]
    fn negated_integrand_gives_negated_result(
        scale in 0.1f64..10.0,
        a in -3.0f64..3.0,
        width in 0.1f64..4.0,
        tolerance in prop::sample::select(vec![1e-3, 1e-6, 1e-9]),
    ) {
        let b = a + width;
        let f = |x: f64| scale * InverseQuarticRoot.value(x);
        let g = |x: f64| -(scale * InverseQuarticRoot.value(x));

        let pos = integrate(&f, a, b, tolerance).unwrap();
        let neg = integrate(&g, a, b, tolerance).unwrap();
        prop_assert_eq!(neg.value(), -pos.value());
        prop_assert_eq!(neg.achieved_relative_error(), pos.achieved_relative_error());
        prop_assert_eq!(neg.subintervals_used(), pos.subintervals_used());
        prop_assert!(pos.achieved_relative_error() <= tolerance);
    }

    #[test]
    fn six_point_rule_is_exact_to_degree_eleven(
        coefficients in prop::collection::vec(-5.0f64..5.0, 1..=12),
        a in -2.0f64..2.0,
        width in 0.1f64..2.0,
        n in 1usize..8,
    ) {
        let b = a + width;
        let p = |x: f64| coefficients.iter().fold(0.0, |acc, &beta| acc * x + beta);
        let degree = coefficients.len() - 1;
        // 反導函數 P(x) = Σ c_k x^(k+1) / (k+1)
        let antiderivative = |x: f64| {
            coefficients.iter().enumerate().fold(0.0, |acc, (i, &c)| {
                let power = (degree - i + 1) as i32;
                acc + c * x.powi(power) / power as f64
            })
        };
        let exact = antiderivative(b) - antiderivative(a);
        let scale: f64 = coefficients.iter().map(|c| c.abs()).sum::<f64>() * 4.0f64.powi(12);
        let estimate = evaluate(&p, a, b, NonZeroUsize::new(n).unwrap(), &QuadratureRule::gauss_legendre_6());
        prop_assert!((estimate - exact).abs() <= 1e-12 * scale, "{} vs {}", estimate, exact);
    }

    #[test]
    fn evaluation_is_deterministic(a in -3.0f64..3.0, width in 0.1f64..4.0, n in 1usize..64) {
        let rule = QuadratureRule::gauss_legendre_6();
        let n = NonZeroUsize::new(n).unwrap();
        let first = evaluate(&InverseQuarticRoot, a, a + width, n, &rule);
        let second = evaluate(&InverseQuarticRoot, a, a + width, n, &rule);
        prop_assert_eq!(first, second);
    }
}
