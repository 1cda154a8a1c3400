use thiserror::Error;

/// 積分流程中可能出現的錯誤。
///
/// 分成三類：輸入錯誤（區間、容許誤差、積分法則）、
/// 數值退化（前一次估計值為 0、出現 NaN/Inf）、以及未收斂。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadratureError {
    #[error("invalid interval [{a}, {b}]: bounds must be finite and satisfy a < b")]
    InvalidInterval { a: f64, b: f64 },

    #[error("invalid tolerance {tolerance:e}: must be finite and positive")]
    InvalidTolerance { tolerance: f64 },

    #[error("invalid quadrature rule: {reason}")]
    InvalidRule { reason: String },

    #[error("invalid integration options: {reason}")]
    InvalidOptions { reason: String },

    #[error("previous estimate is zero at n = {subintervals}, relative error is undefined")]
    ZeroEstimate { subintervals: usize },

    #[error("integrand produced a non-finite estimate {value} at n = {subintervals}")]
    NonFiniteEstimate { subintervals: usize, value: f64 },

    #[error(
        "did not converge after {iterations} refinements (n = {subintervals}, \
         last estimate {last_estimate}, error {achieved_error:.2e}, tolerance {tolerance:.2e})"
    )]
    DidNotConverge {
        iterations: usize,
        subintervals: usize,
        last_estimate: f64,
        achieved_error: f64,
        tolerance: f64,
    },
}

impl QuadratureError {
    /// 是否為呼叫端輸入錯誤（相對於數值上的失敗）。
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            QuadratureError::InvalidInterval { .. }
                | QuadratureError::InvalidTolerance { .. }
                | QuadratureError::InvalidRule { .. }
                | QuadratureError::InvalidOptions { .. }
        )
    }
}
