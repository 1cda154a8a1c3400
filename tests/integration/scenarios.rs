//! End-to-end scenarios through the public library API.

use approx::assert_relative_eq;

use compquad::configuration::{
    Configuration,
    DEFAULT_REQUEST_NAME
};
use compquad::math::integrand::integrandkind::IntegrandKind;
use compquad::math::integrand::inversequarticroot::InverseQuarticRoot;
use compquad::math::quadrature::convergencedriver::{
    integrate,
    integrate_to_tolerance
};
use compquad::math::quadrature::integrationoptions::IntegrationOptions;
use compquad::math::quadrature::integrationrequest::IntegrationRequest;
use compquad::math::quadrature::integrationresult::ErrorCriterion;
use compquad::math::quadrature::quadratureerror::QuadratureError;
use compquad::math::quadrature::quadraturerule::QuadratureRule;

const INVERSE_QUARTIC_ROOT_0_2: f64 = 1.357121114091918;

#[test]
fn constant_integrand_is_exact_after_one_doubling() {
    let result = integrate(&|_x: f64| 1.0, 0.0, 1.0, 1e-12).unwrap();
    assert_relative_eq!(result.value(), 1.0, epsilon = 1e-14);
    assert!(result.achieved_relative_error() <= 1e-14);
    assert_eq!(result.subintervals_used(), 2);
}

#[test]
fn linear_integrand_gives_one_half() {
    let result = integrate(&|x: f64| x, 0.0, 1.0, 1e-12).unwrap();
    assert_relative_eq!(result.value(), 0.5, epsilon = 1e-14);
    assert_eq!(result.subintervals_used(), 2);
}

#[test]
fn inverse_quartic_root_to_one_in_a_million() {
    let result = integrate(&InverseQuarticRoot, 0.0, 2.0, 1e-6).unwrap();
    assert!(result.achieved_relative_error() <= 1e-6);
    assert_relative_eq!(result.value(), INVERSE_QUARTIC_ROOT_0_2, max_relative = 1e-9);
}

#[test]
fn zero_integrand_is_converged_not_an_error() {
    let result = integrate(&|_x: f64| 0.0, 0.0, 1.0, 1e-6).unwrap();
    assert_eq!(result.value(), 0.0);
    assert_eq!(result.achieved_relative_error(), 0.0);
    assert_eq!(result.criterion(), ErrorCriterion::Relative);
}

#[test]
fn higher_order_rule_agrees_with_six_point_rule() {
    let rule = QuadratureRule::gauss_legendre(10).unwrap();
    let result = integrate_to_tolerance(
        &InverseQuarticRoot, 0.0, 2.0, 1e-10, &rule, &IntegrationOptions::default()
    ).unwrap();
    assert_relative_eq!(result.value(), INVERSE_QUARTIC_ROOT_0_2, max_relative = 1e-12);
}

#[test]
fn default_configured_request_matches_direct_call() {
    let config = Configuration::new();
    let request = config.request(DEFAULT_REQUEST_NAME).unwrap();
    let rule = config.rule().unwrap();
    let from_request = request.integrate(&rule, &config.options()).unwrap();
    let direct = integrate(&InverseQuarticRoot, 0.0, 2.0, 1e-6).unwrap();
    assert_eq!(from_request, direct);
}

#[test]
fn polynomial_request_integrates_exactly() {
    // ∫_{-1}^{2} (3x² + 1) dx = 9 + 3 = 12
    let request = IntegrationRequest::new(
        IntegrandKind::Polynomial { coefficients: vec![3.0, 0.0, 1.0] },
        -1.0,
        2.0,
        1e-9
    ).unwrap();
    let result = request.integrate(&QuadratureRule::default(), &IntegrationOptions::default()).unwrap();
    assert_relative_eq!(result.value(), 12.0, max_relative = 1e-13);
}

#[test]
fn failures_distinguish_input_from_numerics() {
    let bad_input = integrate(&InverseQuarticRoot, 2.0, 0.0, 1e-6).unwrap_err();
    assert!(bad_input.is_input_error());

    let options = IntegrationOptions::default().with_max_iterations(2).unwrap();
    let numeric = integrate_to_tolerance(
        &InverseQuarticRoot, 0.0, 2.0, 1e-15, &QuadratureRule::default(), &options
    ).unwrap_err();
    assert!(!numeric.is_input_error());
    assert!(matches!(numeric, QuadratureError::DidNotConverge { iterations: 2, subintervals: 4, .. }));
}

#[test]
fn result_serializes_to_json() {
    let result = integrate(&|_x: f64| 2.0, 0.0, 1.0, 1e-6).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["subintervals_used"], 2);
    assert_eq!(json["iterations"], 1);
    assert_eq!(json["criterion"], "relative");
}

#[test]
fn trait_object_integrands() {
    let f: &dyn Fn(f64) -> f64 = &|x: f64| 3.0 * x * x;
    let result = integrate(f, 0.0, 1.0, 1e-9).unwrap();
    assert_relative_eq!(result.value(), 1.0, epsilon = 1e-13);

    let boxed: Box<dyn Fn(f64) -> f64> = Box::new(|x: f64| -x);
    let result = integrate(boxed.as_ref(), 0.0, 2.0, 1e-9).unwrap();
    assert_relative_eq!(result.value(), -2.0, epsilon = 1e-13);
}
