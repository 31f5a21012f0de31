//! Finite-difference derivative operators on uniform grids.
//!
//! All operators are dense `n×n` matrices acting on arrays sampled at `n`
//! points with spacing `h`.

use ndarray as nd;
use tracing::debug;

/// The `n×n` identity matrix.
pub fn eye(n: usize) -> nd::Array2<f64> { nd::Array2::eye(n) }

/// The `n×n` matrix with elements equal to 1 on the `k`-th diagonal and 0
/// elsewhere.
///
/// Positive `k` selects a superdiagonal, negative `k` a subdiagonal. If
/// `|k| >= n`, the matrix is all zeros.
pub fn diag_flat(n: usize, k: isize) -> nd::Array2<f64> {
    let mut a: nd::Array2<f64> = nd::Array2::zeros((n, n));
    let m = k.unsigned_abs();
    if m < n {
        if k >= 0 {
            a.slice_mut(nd::s![0..n - m, m..n]).diag_mut().fill(1.0);
        } else {
            a.slice_mut(nd::s![m..n, 0..n - m]).diag_mut().fill(1.0);
        }
    }
    a
}

/// Forward-difference first derivative, `D = (I{+1} - I{0}) / h`.
///
/// Row `i` computes `(f[i + 1] - f[i]) / h`; the last row sees an implicit
/// zero past the right edge of the grid. The truncation error is first order
/// in `h`.
pub fn first_derivative(n: usize, h: f64) -> nd::Array2<f64> {
    (diag_flat(n, 1) - eye(n)) / h
}

/// Second derivative composed from the forward difference as `D (-Dᵀ)`.
///
/// Away from the edges this is the usual three-point stencil
/// ```text
/// (f[i - 1] - 2 f[i] + f[i + 1]) / h²
/// ```
/// The first row drops `f[-1]` (zero boundary) and the last row reduces to
/// `(f[n - 2] - f[n - 1]) / h²`.
pub fn second_derivative(n: usize, h: f64) -> nd::Array2<f64> {
    let d = first_derivative(n, h);
    let mdt: nd::Array2<f64> = -&d.t();
    let d2 = d.dot(&mdt);
    debug!(n, h, "built second-derivative operator");
    d2
}
