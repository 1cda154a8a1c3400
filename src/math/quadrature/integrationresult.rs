use serde::Serialize;

/// Which error measure the final refinement was judged by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCriterion {
    /// |current - previous| / |previous|
    Relative,
    /// |current - previous|, used when the previous estimate was zero.
    Absolute
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntegrationResult {
    value: f64,
    achieved_relative_error: f64,
    subintervals_used: usize,
    iterations: usize,
    criterion: ErrorCriterion
}

impl IntegrationResult {
    pub fn new(value: f64,
               achieved_relative_error: f64,
               subintervals_used: usize,
               iterations: usize,
               criterion: ErrorCriterion) -> IntegrationResult {
        IntegrationResult {
            value: value,
            achieved_relative_error: achieved_relative_error,
            subintervals_used: subintervals_used,
            iterations: iterations,
            criterion: criterion
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn achieved_relative_error(&self) -> f64 {
        self.achieved_relative_error
    }

    pub fn subintervals_used(&self) -> usize {
        self.subintervals_used
    }

    /// Number of doublings performed after the initial estimate.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn criterion(&self) -> ErrorCriterion {
        self.criterion
    }
}
