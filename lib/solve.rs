//! Functions to compute stationary states of the one-dimensional,
//! time-independent Schrödinger equation (TISE) by direct diagonalization of a
//! finite-difference Hamiltonian.

use std::cmp;
use ndarray as nd;
use ndarray_linalg::{ self as la, Eig, EighInto };
use num_complex::Complex64 as C64;
use serde::{ Deserialize, Serialize };
use tracing::{ debug, error, info, warn };
use crate::{
    Arr1,
    Arr2,
    error::{ ArgError, DftError, DftResult, LengthError },
    grid,
    operators::second_derivative,
    potential::Potential,
    utils::{ extreme_index, Extremum },
};

// largest tolerated |H[i, j] - H[j, i]| before the symmetric driver warns
const ASYMMETRY_WARN: f64 = 1e-10;

/// A single solution to the TISE.
///
/// This struct is usually only returned by a solver function; you probably
/// won't ever instantiate it yourself.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Energy
    pub e: f64,
    /// Wavefunction, as the raw (unnormalized) eigenvector.
    pub wf: nd::Array1<f64>,
}

impl Solution {
    /// Compare two `Solution`s by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<cmp::Ordering> {
        self.e.partial_cmp(&other.e)
    }
}

/// Assemble the Hamiltonian `-½ D2 + V` from a grid spacing and a potential
/// array.
///
/// `D2` is [`second_derivative`]; `V` is placed on the diagonal.
pub fn hamiltonian_arrays<S>(dx: f64, V: &Arr1<S>) -> nd::Array2<f64>
where S: nd::Data<Elem = f64>
{
    let n = V.len();
    let mut H: nd::Array2<f64> = second_derivative(n, dx) * -0.5;
    let mut H_diag = H.diag_mut();
    H_diag += V;
    H
}

/// Assemble the Hamiltonian for a potential sampled over a uniform grid.
///
/// Fails if the grid has fewer than two points or the potential returns an
/// array of the wrong length.
pub fn hamiltonian<S, P>(x: &Arr1<S>, potential: &P) -> DftResult<nd::Array2<f64>>
where
    S: nd::Data<Elem = f64>,
    P: Potential,
{
    let dx = grid::spacing(x)?;
    let V = potential.evaluate(x);
    LengthError::check(x, &V)?;
    Ok(hamiltonian_arrays(dx, &V))
}

/// Return `(H + Hᵀ) / 2`.
pub fn symmetrize<S>(H: &Arr2<S>) -> nd::Array2<f64>
where S: nd::Data<Elem = f64>
{
    (H + &H.t()) * 0.5
}

/// Return the largest absolute difference between mirrored elements of `H`.
pub fn asymmetry<S>(H: &Arr2<S>) -> f64
where S: nd::Data<Elem = f64>
{
    H.iter().zip(H.t().iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}

/// Eigensolver selector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// General real eigenproblem (LAPACK `geev`). Eigenpairs come back
    /// complex, in no particular order.
    #[default]
    General,
    /// Symmetric eigenproblem (LAPACK `syev`) on the symmetrized matrix.
    /// Eigenpairs are real and ordered by ascending energy.
    Symmetric,
}

impl Method {
    /// Return `true` if `self` is `General`.
    pub fn is_general(&self) -> bool { matches!(self, Self::General) }

    /// Return `true` if `self` is `Symmetric`.
    pub fn is_symmetric(&self) -> bool { matches!(self, Self::Symmetric) }
}

/// Eigenvalues of a Hamiltonian paired with its right eigenvectors.
///
/// Eigenvector `k` is column `k` of [`Self::vectors`].
#[derive(Clone, Debug)]
pub struct Eigen {
    values: nd::Array1<C64>,
    vectors: nd::Array2<C64>,
}

impl Eigen {
    /// Get a reference to the eigenvalues.
    pub fn values(&self) -> &nd::Array1<C64> { &self.values }

    /// Get a reference to the eigenvector matrix.
    pub fn vectors(&self) -> &nd::Array2<C64> { &self.vectors }

    /// Get the number of eigenpairs.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.values.len() }

    /// Return the real parts of all eigenvalues.
    pub fn energies(&self) -> nd::Array1<f64> { self.values.mapv(|v| v.re) }

    /// Return the `k`-th eigenpair with the real part of its eigenvector.
    pub fn state(&self, k: usize) -> Option<Solution> {
        (k < self.len()).then(|| {
            Solution {
                e: self.values[k].re,
                wf: self.vectors.column(k).mapv(|v| v.re),
            }
        })
    }

    /// Return the index of the eigenvalue with the smallest real part, with
    /// ties going to the lowest index.
    pub fn ground_index(&self) -> Option<usize> {
        extreme_index(self.values.iter().map(|v| v.re), Extremum::Min)
    }

    /// Return all eigenpairs, sorted by ascending energy.
    pub fn spectrum(&self) -> Vec<Solution> {
        let mut sols: Vec<Solution>
            = (0..self.len()).filter_map(|k| self.state(k)).collect();
        sols.sort_by(|l, r| l.cmp_energy(r).unwrap_or(cmp::Ordering::Equal));
        sols
    }
}

/// Compute all eigenvalues and right eigenvectors of a real, square matrix.
///
/// Non-convergence of the LAPACK driver returns
/// [`DftError::EigenFactorizationFailed`]. Unlike the other errors in this
/// crate, this one is not recoverable: there is no fallback solver, and
/// callers should abandon the calculation ([`DftError::is_fatal`]).
pub fn decompose<S>(H: &Arr2<S>, method: Method) -> DftResult<Eigen>
where S: nd::Data<Elem = f64>
{
    LengthError::check_square(H)?;
    if H.is_empty() { return Err(ArgError::EmptyMatrix.into()); }
    let res = match method {
        Method::General => {
            H.eig().map(|(values, vectors)| Eigen { values, vectors })
        },
        Method::Symmetric => {
            let skew = asymmetry(H);
            if skew > ASYMMETRY_WARN {
                warn!(skew, "hamiltonian is not symmetric; symmetrizing");
            }
            symmetrize(H).eigh_into(la::UPLO::Lower)
                .map(|(e, v)| {
                    Eigen { values: e.mapv(C64::from), vectors: v.mapv(C64::from) }
                })
        },
    };
    let eigen = res.map_err(|err| {
        error!(%err, "eigendecomposition failed");
        DftError::from(err)
    })?;
    let (rows, cols) = eigen.vectors.dim();
    debug!(rows, cols, "computed eigenvectors");
    Ok(eigen)
}

/// Select the ground state: the eigenpair whose eigenvalue has the smallest
/// real part.
///
/// Ties go to the lowest index. The wavefunction is the real part of the
/// corresponding eigenvector, not renormalized.
pub fn select_state(eigen: &Eigen) -> DftResult<Solution> {
    let k = eigen.ground_index().ok_or(ArgError::NoEigenvalues)?;
    let sol = eigen.state(k).ok_or(ArgError::NoEigenvalues)?;
    info!(index = k, energy = sol.e, "selected ground state");
    Ok(sol)
}

/// Simple record to keep track of coordinate and potential arrays.
///
/// Arrays borrowed from this type are guaranteed to have the same length (at
/// least 2) and to be sampled over a uniformly spaced coordinate grid.
#[derive(Clone, Debug)]
pub struct System {
    // coordinate array
    x: nd::Array1<f64>,
    // coordinate array grid spacing
    dx: f64,
    // potential array
    V: nd::Array1<f64>,
    // array sizes
    n: usize,
}

impl System {
    /// Create a new `System`, generating the coordinate array from
    /// "linspace-style" arguments (start, inclusive end, and an array length).
    ///
    /// Fails if the number of points is less than 2.
    pub fn new_linspace<P>(xargs: (f64, f64, usize), potential: &P)
        -> DftResult<Self>
    where P: Potential
    {
        let x = grid::linspace(xargs.0, xargs.1, xargs.2)?;
        let V = potential.evaluate(&x);
        Self::new_arrays(x, V)
    }

    /// Create a new `System` from bare coordinate and potential arrays.
    ///
    /// Fails if the number of points is less than 2 or the arrays differ in
    /// length.
    pub fn new_arrays(x: nd::Array1<f64>, V: nd::Array1<f64>) -> DftResult<Self> {
        LengthError::check(&x, &V)?;
        let dx = grid::spacing(&x)?;
        let n = x.len();
        Ok(Self { x, dx, V, n })
    }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get a reference to the potential array.
    pub fn get_V(&self) -> &nd::Array1<f64> { &self.V }

    /// Get the coordinate array grid spacing.
    pub fn get_dx(&self) -> f64 { self.dx }

    /// Get the length of the coordinate and potential arrays.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n }

    /// Thin interface to [`hamiltonian_arrays`].
    pub fn hamiltonian(&self) -> nd::Array2<f64> {
        hamiltonian_arrays(self.dx, &self.V)
    }

    /// Diagonalize the Hamiltonian of `self`.
    pub fn solve(&self, method: Method) -> DftResult<Eigen> {
        decompose(&self.hamiltonian(), method)
    }

    /// Diagonalize the Hamiltonian of `self` and [select][select_state] the
    /// ground state.
    pub fn ground_state(&self, method: Method) -> DftResult<Solution> {
        select_state(&self.solve(method)?)
    }
}
