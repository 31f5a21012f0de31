#![allow(non_snake_case)]

//! Tests for Hamiltonian assembly, eigendecomposition, and ground-state
//! selection.

use std::f64::consts::FRAC_1_SQRT_2;
use approx::{ assert_abs_diff_eq, assert_relative_eq };
use ndarray as nd;
use dftspace::{
    Arr1,
    error::{ ArgError, DftError },
    grid::{ linspace, spacing },
    potential::{
        AnharmonicOscillator, HarmonicOscillator, ModifiedPoschlTeller, Morse,
        Potential,
    },
    solve::{ decompose, hamiltonian, select_state, Method, System },
    utils::{ extreme_index, Extremum },
};

/// Potential that drops the last grid point.
struct Truncated;

impl Potential for Truncated {
    fn at(&self, x: f64) -> f64 { x }

    fn evaluate<S>(&self, x: &Arr1<S>) -> nd::Array1<f64>
    where
        S: nd::Data<Elem = f64>,
        Self: Sized,
    {
        x.slice(nd::s![..-1]).mapv(|xk| self.at(xk))
    }
}

fn ground_energy<P: Potential>(xargs: (f64, f64, usize), p: &P, method: Method) -> f64 {
    let x = linspace(xargs.0, xargs.1, xargs.2).unwrap();
    let H = hamiltonian(&x, p).unwrap();
    let eigen = decompose(&H, method).unwrap();
    select_state(&eigen).unwrap().e
}

#[test]
fn test_hamiltonian_elements() {
    let x = linspace(-1.0, 1.0, 5).unwrap();
    let h = spacing(&x).unwrap();
    let H = hamiltonian(&x, &HarmonicOscillator).unwrap();
    assert_eq!(H.dim(), (5, 5));
    for i in 0..4 {
        assert_relative_eq!(H[[i, i]], 1.0 / (h * h) + x[i] * x[i], epsilon = 1e-12);
        assert_relative_eq!(H[[i, i + 1]], -0.5 / (h * h), epsilon = 1e-12);
        assert_relative_eq!(H[[i + 1, i]], -0.5 / (h * h), epsilon = 1e-12);
    }
    assert_relative_eq!(H[[4, 4]], 0.5 / (h * h) + x[4] * x[4], epsilon = 1e-12);
}

#[test]
fn test_hamiltonian_rejects_short_grid() {
    let x = nd::array![0.0];
    let err = hamiltonian(&x, &HarmonicOscillator).unwrap_err();
    assert!(matches!(err, DftError::InvalidArgument(ArgError::TooFewPoints(1))));
}

#[test]
fn test_hamiltonian_rejects_misaligned_potential() {
    let x = linspace(-1.0, 1.0, 5).unwrap();
    let err = hamiltonian(&x, &Truncated).unwrap_err();
    assert!(matches!(err, DftError::DimensionMismatch(_)));
}

/// `V(x) = x²/2` has the analytic ground state `E₀ = 1/2`.
#[test]
fn test_half_harmonic_ground_state() {
    let p = AnharmonicOscillator { mu: 0.5, lambda: 0.0 };
    for method in [Method::General, Method::Symmetric] {
        let e0 = ground_energy((-5.0, 5.0, 200), &p, method);
        assert_abs_diff_eq!(e0, 0.5, epsilon = 1e-3);
    }
}

/// `V(x) = x²` has frequency `√2` and ground state `E₀ = 1/√2`.
#[test]
fn test_harmonic_ground_state() {
    for method in [Method::General, Method::Symmetric] {
        let e0 = ground_energy((-5.0, 5.0, 200), &HarmonicOscillator, method);
        assert_abs_diff_eq!(e0, FRAC_1_SQRT_2, epsilon = 1e-3);
    }
}

/// With `V₀ = 1` the Pöschl–Teller well holds a single bound state at
/// `E₀ = -1/2`.
#[test]
fn test_poschl_teller_ground_state() {
    let p = ModifiedPoschlTeller { v0: 1.0 };
    let e0 = ground_energy((-10.0, 10.0, 400), &p, Method::Symmetric);
    assert_abs_diff_eq!(e0, -0.5, epsilon = 5e-3);
}

/// For unit depth and range, `E₀ = -1 + √2/2 - 1/8`.
#[test]
fn test_morse_ground_state() {
    let expected = -1.0 + FRAC_1_SQRT_2 - 0.125;
    let e0 = ground_energy((-2.0, 10.0, 1000), &Morse, Method::Symmetric);
    assert_abs_diff_eq!(e0, expected, epsilon = 1e-2);
}

#[test]
fn test_spectrum_is_sorted() {
    let system = System::new_linspace(
        (-5.0, 5.0, 200), &AnharmonicOscillator { mu: 0.5, lambda: 0.0 }).unwrap();
    let spectrum = system.solve(Method::General).unwrap().spectrum();
    assert_eq!(spectrum.len(), 200);
    assert!(spectrum.windows(2).all(|w| w[0].e <= w[1].e));
    assert_abs_diff_eq!(spectrum[0].e, 0.5, epsilon = 1e-3);
    assert_abs_diff_eq!(spectrum[1].e, 1.5, epsilon = 5e-3);
    assert_abs_diff_eq!(spectrum[2].e, 2.5, epsilon = 1e-2);
}

/// The selected wavefunction of a harmonic well is nodeless and has the grid
/// length.
#[test]
fn test_ground_state_wavefunction() {
    let system = System::new_linspace((-5.0, 5.0, 200), &HarmonicOscillator).unwrap();
    let ground = system.ground_state(Method::General).unwrap();
    assert_eq!(ground.wf.len(), system.len());
    let sign = ground.wf[100].signum();
    assert!(ground.wf.iter().all(|qk| qk * sign > 0.0));
    let norm: f64 = ground.wf.iter().map(|qk| qk * qk).sum();
    assert_relative_eq!(norm, 1.0, epsilon = 1e-8);
}

#[test]
fn test_decompose_single_element() {
    let H = nd::array![[3.5]];
    for method in [Method::General, Method::Symmetric] {
        let eigen = decompose(&H, method).unwrap();
        assert_eq!(eigen.len(), 1);
        assert_relative_eq!(eigen.values()[0].re, 3.5, epsilon = 1e-14);
        assert_eq!(eigen.values()[0].im, 0.0);
    }
}

#[test]
fn test_decompose_rejects_bad_shapes() {
    let H: nd::Array2<f64> = nd::Array2::zeros((2, 3));
    let err = decompose(&H, Method::General).unwrap_err();
    assert!(matches!(err, DftError::DimensionMismatch(_)));

    let H: nd::Array2<f64> = nd::Array2::zeros((0, 0));
    let err = decompose(&H, Method::General).unwrap_err();
    assert!(matches!(err, DftError::InvalidArgument(ArgError::EmptyMatrix)));
    assert!(!err.is_fatal());
}

#[test]
fn test_select_state_picks_minimum() {
    let H: nd::Array2<f64> = nd::Array2::from_diag(&nd::array![3.0, -1.0, 2.0]);
    for method in [Method::General, Method::Symmetric] {
        let sol = select_state(&decompose(&H, method).unwrap()).unwrap();
        assert_relative_eq!(sol.e, -1.0, epsilon = 1e-12);
        assert_relative_eq!(sol.wf[1].abs(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sol.wf[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sol.wf[2], 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_extreme_index() {
    assert_eq!(extreme_index([2.0, 1.0, 1.0, 3.0], Extremum::Min), Some(1));
    assert_eq!(extreme_index([1.0, 3.0, 3.0, 0.0], Extremum::Max), Some(1));
    assert_eq!(extreme_index([f64::NAN, 2.0, 1.0], Extremum::Min), Some(2));
    assert_eq!(extreme_index([4_i32, -2, 7], Extremum::Min), Some(1));
    assert_eq!(extreme_index(Vec::<f64>::new(), Extremum::Min), None);
    assert_eq!(extreme_index([f64::NAN], Extremum::Max), None);
}

#[test]
fn test_system_rejects_mismatched_arrays() {
    let err = System::new_arrays(nd::array![0.0, 1.0, 2.0], nd::array![0.0, 1.0])
        .unwrap_err();
    assert!(matches!(err, DftError::DimensionMismatch(_)));
}
