//! Tests for grid generation and the finite-difference operators.

use approx::{ assert_abs_diff_eq, assert_relative_eq };
use ndarray as nd;
use dftspace::{
    error::{ ArgError, DftError },
    grid::{ linspace, spacing },
    operators::{ diag_flat, eye, first_derivative, second_derivative },
    solve::asymmetry,
};

#[test]
fn test_linspace_endpoints_and_spacing() {
    for &n in &[2_usize, 3, 7, 200] {
        let x = linspace(-2.0, 4.0, n).unwrap();
        assert_eq!(x.len(), n);
        assert_eq!(x[0], -2.0);
        assert_abs_diff_eq!(x[n - 1], 4.0, epsilon = 1e-12);
        let h = spacing(&x).unwrap();
        for k in 0..n - 1 {
            assert_abs_diff_eq!(x[k + 1] - x[k], h, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_linspace_single_point_is_end() {
    let x = linspace(-2.0, 4.0, 1).unwrap();
    assert_eq!(x, nd::array![4.0]);
}

#[test]
fn test_linspace_rejects_zero_count() {
    let err = linspace(0.0, 1.0, 0).unwrap_err();
    assert!(matches!(err, DftError::InvalidArgument(ArgError::GridCount(0))));
    assert!(!err.is_fatal());
}

#[test]
fn test_spacing_needs_two_points() {
    let x = nd::array![1.0];
    let err = spacing(&x).unwrap_err();
    assert!(matches!(err, DftError::InvalidArgument(ArgError::TooFewPoints(1))));
}

#[test]
fn test_diag_flat() {
    let up = diag_flat(4, 1);
    let down = diag_flat(4, -2);
    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(up[[i, j]], if j == i + 1 { 1.0 } else { 0.0 });
            assert_eq!(down[[i, j]], if i == j + 2 { 1.0 } else { 0.0 });
        }
    }
    assert_eq!(diag_flat(3, 0), eye(3));
    assert!(diag_flat(3, 3).iter().all(|a| *a == 0.0));
    assert!(diag_flat(3, -5).iter().all(|a| *a == 0.0));
}

/// The forward difference is exact for linear functions away from the right
/// edge.
#[test]
fn test_first_derivative_linear() {
    let x = linspace(-1.0, 1.0, 41).unwrap();
    let h = spacing(&x).unwrap();
    let f = x.mapv(|xk| 3.0 * xk - 1.0);
    let df = first_derivative(x.len(), h).dot(&f);
    for k in 0..x.len() - 1 {
        assert_relative_eq!(df[k], 3.0, epsilon = 1e-9);
    }
}

/// `D (-Dᵀ)` reproduces the second derivative of `x²` at interior points on
/// coarse and fine grids alike.
#[test]
fn test_second_derivative_quadratic() {
    for &n in &[21_usize, 201] {
        let x = linspace(-1.0, 1.0, n).unwrap();
        let h = spacing(&x).unwrap();
        let f = x.mapv(|xk| xk * xk);
        let d2f = second_derivative(n, h).dot(&f);
        let err = (1..n - 1)
            .map(|k| (d2f[k] - 2.0).abs())
            .fold(0.0, f64::max);
        assert!(err < 1e-6, "interior error {} too large for n = {}", err, n);
    }
}

#[test]
fn test_second_derivative_structure() {
    let n = 6;
    let h = 0.5;
    let d2 = second_derivative(n, h);
    assert_eq!(asymmetry(&d2), 0.0);
    for i in 0..n - 1 {
        assert_relative_eq!(d2[[i, i]], -2.0 / (h * h), epsilon = 1e-12);
        assert_relative_eq!(d2[[i, i + 1]], 1.0 / (h * h), epsilon = 1e-12);
        assert_relative_eq!(d2[[i + 1, i]], 1.0 / (h * h), epsilon = 1e-12);
    }
    assert_relative_eq!(d2[[n - 1, n - 1]], -1.0 / (h * h), epsilon = 1e-12);
    assert_eq!(d2[[0, 2]], 0.0);
}
