use std::num::NonZeroUsize;

use tracing::{
    debug,
    info,
    warn
};

use crate::math::integrand::integrand::Integrand;
use crate::math::quadrature::compositeevaluator::evaluate;
use crate::math::quadrature::integrationoptions::{
    IntegrationOptions,
    ZeroEstimatePolicy
};
use crate::math::quadrature::integrationrequest::validate_request;
use crate::math::quadrature::integrationresult::{
    ErrorCriterion,
    IntegrationResult
};
use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::math::quadrature::quadraturerule::QuadratureRule;

const DOUBLING: NonZeroUsize = NonZeroUsize::MIN.saturating_add(1);

// ─────────────────────────────────────────────────────────────────────────────
// Refinement
// ─────────────────────────────────────────────────────────────────────────────

/// One doubling step: the estimate with `subintervals` pieces and the
/// estimate it replaced (computed with half as many).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Refinement {
    subintervals: usize,
    estimate: f64,
    previous_estimate: f64
}

impl Refinement {
    pub fn subintervals(&self) -> usize {
        self.subintervals
    }

    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    pub fn previous_estimate(&self) -> f64 {
        self.previous_estimate
    }

    pub fn absolute_change(&self) -> f64 {
        (self.estimate - self.previous_estimate).abs()
    }

    /// Infinite or NaN when the previous estimate is zero.
    pub fn relative_change(&self) -> f64 {
        self.absolute_change() / self.previous_estimate.abs()
    }
}

/// Estimates for n = 2, 4, 8, ... subintervals, each paired with its
/// predecessor. The n = 1 estimate is computed on the first call to `next`.
///
/// Ends only when n can no longer be doubled.
pub struct RefinementSequence<'a, I: ?Sized> {
    integrand: &'a I,
    a: f64,
    b: f64,
    rule: &'a QuadratureRule,
    subintervals: NonZeroUsize,
    previous: Option<f64>
}

impl <'a, I> RefinementSequence<'a, I> where
    I: Integrand + ?Sized {
    pub fn new(integrand: &'a I, a: f64, b: f64, rule: &'a QuadratureRule) -> RefinementSequence<'a, I> {
        RefinementSequence {
            integrand: integrand,
            a: a,
            b: b,
            rule: rule,
            subintervals: NonZeroUsize::MIN,
            previous: None
        }
    }
}

impl <'a, I> Iterator for RefinementSequence<'a, I> where
    I: Integrand + ?Sized {
    type Item = Refinement;

    fn next(&mut self) -> Option<Refinement> {
        let previous = match self.previous {
            Some(previous) => previous,
            None => evaluate(self.integrand, self.a, self.b, self.subintervals, self.rule)
        };
        let subintervals = self.subintervals.checked_mul(DOUBLING)?;
        let estimate = evaluate(self.integrand, self.a, self.b, subintervals, self.rule);
        self.subintervals = subintervals;
        self.previous = Some(estimate);
        Some(Refinement {
            subintervals: subintervals.get(),
            estimate: estimate,
            previous_estimate: previous
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Convergence driver
// ─────────────────────────────────────────────────────────────────────────────

enum RefinementState {
    Refining { iterations: usize, last: Option<(Refinement, f64)> },
    Converged(IntegrationResult)
}

/// Error of one step under the zero-estimate policy.
fn step_error(step: &Refinement,
              policy: ZeroEstimatePolicy) -> Result<(f64, ErrorCriterion), QuadratureError> {
    if step.previous_estimate() != 0.0 {
        return Ok((step.relative_change(), ErrorCriterion::Relative));
    }
    if step.estimate() == 0.0 {
        return Ok((0.0, ErrorCriterion::Relative));
    }
    match policy {
        ZeroEstimatePolicy::AbsoluteError => {
            warn!(subintervals = step.subintervals(), "previous estimate is zero, falling back to absolute error");
            Ok((step.absolute_change(), ErrorCriterion::Absolute))
        },
        ZeroEstimatePolicy::Fail => Err(QuadratureError::ZeroEstimate { subintervals: step.subintervals() })
    }
}

fn check_finite(step: &Refinement) -> Result<(), QuadratureError> {
    if !step.previous_estimate().is_finite() {
        return Err(QuadratureError::NonFiniteEstimate {
            subintervals: step.subintervals() / 2,
            value: step.previous_estimate()
        });
    }
    if !step.estimate().is_finite() {
        return Err(QuadratureError::NonFiniteEstimate {
            subintervals: step.subintervals(),
            value: step.estimate()
        });
    }
    Ok(())
}

fn did_not_converge(iterations: usize,
                    last: Option<(Refinement, f64)>,
                    tolerance: f64) -> QuadratureError {
    let (subintervals, last_estimate, achieved_error) = last.map_or(
        (1, f64::NAN, f64::NAN),
        |(step, error)| (step.subintervals(), step.estimate(), error)
    );
    warn!(iterations, subintervals, achieved_error, tolerance, "refinement did not converge");
    QuadratureError::DidNotConverge {
        iterations: iterations,
        subintervals: subintervals,
        last_estimate: last_estimate,
        achieved_error: achieved_error,
        tolerance: tolerance
    }
}

/// Doubles the subinterval count, starting from n = 1, until the relative
/// change between consecutive estimates is at most `tolerance`.
///
/// At least one doubling always happens, so the n = 1 estimate alone never
/// counts as converged. Gives up with `DidNotConverge` after
/// `options.max_iterations()` doublings.
pub fn integrate_to_tolerance<I>(integrand: &I,
                                 a: f64,
                                 b: f64,
                                 tolerance: f64,
                                 rule: &QuadratureRule,
                                 options: &IntegrationOptions) -> Result<IntegrationResult, QuadratureError>
    where I: Integrand + ?Sized {
    validate_request(a, b, tolerance)?;
    options.validate()?;

    let mut sequence = RefinementSequence::new(integrand, a, b, rule);
    let mut state = RefinementState::Refining { iterations: 0, last: None };
    loop {
        state = match state {
            RefinementState::Converged(result) => {
                info!(
                    value = result.value(),
                    error = result.achieved_relative_error(),
                    subintervals = result.subintervals_used(),
                    "integration converged"
                );
                return Ok(result);
            },
            RefinementState::Refining { iterations, last } => {
                if iterations >= options.max_iterations() {
                    return Err(did_not_converge(iterations, last, tolerance));
                }
                let step = match sequence.next() {
                    Some(step) => step,
                    None => return Err(did_not_converge(iterations, last, tolerance))
                };
                check_finite(&step)?;
                let (error, criterion) = step_error(&step, options.zero_estimate_policy())?;
                let iterations = iterations + 1;
                debug!(subintervals = step.subintervals(), estimate = step.estimate(), error, "refinement");

                if error <= tolerance {
                    RefinementState::Converged(IntegrationResult::new(
                        step.estimate(),
                        error,
                        step.subintervals(),
                        iterations,
                        criterion
                    ))
                } else {
                    RefinementState::Refining { iterations: iterations, last: Some((step, error)) }
                }
            }
        };
    }
}

/// [`integrate_to_tolerance`] with the 6-point Gauss-Legendre rule and default
/// options.
pub fn integrate<I>(integrand: &I, a: f64, b: f64, tolerance: f64) -> Result<IntegrationResult, QuadratureError>
    where I: Integrand + ?Sized {
    let rule = QuadratureRule::gauss_legendre_6();
    integrate_to_tolerance(integrand, a, b, tolerance, &rule, &IntegrationOptions::default())
}
