use nalgebra::DMatrix;

use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::math::quadrature::quadraturerule::QuadraturePoint;

// ─────────────────────────────────────────────────────────────────────────────
// Gauss-Legendre nodes / weights
// ─────────────────────────────────────────────────────────────────────────────
//
// 6 點表格取 15 位有效數字，依節點由小到大排列。
//
// 其他階數以 Golub-Welsch 計算：
//   Legendre 多項式的三項遞迴式對應一個對稱三對角 Jacobi 矩陣 J，
//     J[k-1][k] = J[k][k-1] = β_k = k / sqrt(4k² - 1),  k = 1..n-1
//   節點 = J 的特徵值
//   權重 = 2·v_0²（v 為對應的單位特徵向量，2 = ∫_{-1}^{1} dx）

const MAX_ORDER: usize = 128;

pub const GAUSS_LEGENDRE_6: [QuadraturePoint; 6] = [
    QuadraturePoint::new(0.171324492379170, -0.932469514203152),
    QuadraturePoint::new(0.360761573048139, -0.661209386466265),
    QuadraturePoint::new(0.467913934572691, -0.238619186083197),
    QuadraturePoint::new(0.467913934572691, 0.238619186083197),
    QuadraturePoint::new(0.360761573048139, 0.661209386466265),
    QuadraturePoint::new(0.171324492379170, 0.932469514203152),
];

/// Computes the `order`-point Gauss-Legendre rule, sorted by ascending node.
pub fn golub_welsch(order: usize) -> Result<Vec<QuadraturePoint>, QuadratureError> {
    if order == 0 || order > MAX_ORDER {
        return Err(QuadratureError::InvalidRule {
            reason: format!("Gauss-Legendre order must be in 1..={}, got {}", MAX_ORDER, order)
        });
    }

    let mut jacobi = DMatrix::<f64>::zeros(order, order);
    for k in 1..order {
        let kf = k as f64;
        let beta = kf / (4.0 * kf * kf - 1.0).sqrt();
        jacobi[(k - 1, k)] = beta;
        jacobi[(k, k - 1)] = beta;
    }

    let eigen = jacobi.symmetric_eigen();
    let mut points: Vec<QuadraturePoint> = (0..order)
        .map(|i| {
            let v0 = eigen.eigenvectors[(0, i)];
            QuadraturePoint::new(2.0 * v0 * v0, eigen.eigenvalues[i].clamp(-1.0, 1.0))
        })
        .collect();
    points.sort_by(|lhs, rhs| lhs.node().total_cmp(&rhs.node()));
    Ok(points)
}
