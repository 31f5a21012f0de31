//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length, or when a square matrix is expected but not given.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }

    pub(crate) fn check_square<S, A>(a: &nd::ArrayBase<S, nd::Ix2>)
        -> Result<(), Self>
    where S: nd::Data<Elem = A>
    {
        let (nrows, ncols) = a.dim();
        (nrows == ncols).then_some(()).ok_or(Self(nrows, ncols))
    }
}

/// Malformed input values.
#[derive(Debug, Error)]
pub enum ArgError {
    /// Returned when a grid is requested with no points.
    #[error("grid point count must be at least 1; got {0}")]
    GridCount(usize),

    /// Returned when an operation needs a grid spacing or an integration
    /// interval, but fewer than two points are given.
    #[error("at least 2 grid points are required; got {0}")]
    TooFewPoints(usize),

    /// Returned when a matrix with no elements is passed to a solver.
    #[error("cannot decompose an empty matrix")]
    EmptyMatrix,

    /// Returned when an eigendecomposition holds no eigenvalue that can be
    /// ordered (e.g. all are `NaN`).
    #[error("no comparable eigenvalue to select a state from")]
    NoEigenvalues,

    /// Returned when a wavefunction cannot be normalized by its integral.
    #[error("wavefunction integral must be finite and non-zero; got {0}")]
    DegenerateNorm(f64),

    /// Returned when a density array holds a negative value, for which the
    /// LDA exchange potential is undefined.
    #[error("density must be non-negative; got {value} at index {index}")]
    NegativeDensity { index: usize, value: f64 },
}

impl ArgError {
    pub(crate) fn check_grid_count(count: usize) -> Result<(), Self> {
        (count >= 1).then_some(()).ok_or(Self::GridCount(count))
    }

    pub(crate) fn check_points(n: usize) -> Result<(), Self> {
        (n >= 2).then_some(()).ok_or(Self::TooFewPoints(n))
    }
}

pub type DftResult<T> = Result<T, DftError>;

/// Returned from all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum DftError {
    /// [`ArgError`]
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgError),

    /// [`LengthError`]
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(#[from] LengthError),

    /// [`LinalgError`] from the eigensolver.
    ///
    /// This is fatal: there is no fallback solver, so callers are expected to
    /// abort the whole calculation rather than retry.
    #[error("eigendecomposition failed: {0}")]
    EigenFactorizationFailed(#[from] LinalgError),
}

impl DftError {
    /// Return `true` if the error must terminate the calculation.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::EigenFactorizationFailed(_))
    }
}
