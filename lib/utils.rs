//! Miscellaneous tools.

use ndarray as nd;
use num_traits::Float;
use crate::{
    Arr1,
    error::{ ArgError, DftResult, LengthError },
};

/// Integrate `y` over the (possibly non-uniform) abscissas `x` using the
/// trapezoidal rule.
///
/// ```
/// use ndarray as nd;
/// use dftspace::utils::integral;
///
/// let x: nd::Array1<f64> = nd::array![0.0, 1.0, 2.0];
/// assert_eq!(integral(&x, &x).unwrap(), 2.0);
/// ```
pub fn integral<S, T, A>(x: &Arr1<S>, y: &Arr1<T>) -> DftResult<A>
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Float,
{
    LengthError::check(x, y)?;
    ArgError::check_points(x.len())?;
    let two = A::one() + A::one();
    let sum: A
        = x.iter().zip(x.iter().skip(1))
        .zip(y.iter().zip(y.iter().skip(1)))
        .fold(A::zero(), |acc, ((xk, xkp1), (yk, ykp1))| {
            acc + (*ykp1 + *yk) * (*xkp1 - *xk) / two
        });
    Ok(sum)
}

/// Which end of an ordering [`extreme_index`] looks for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Extremum {
    /// Smallest value.
    Min,
    /// Largest value.
    Max,
}

/// Return the index of the smallest or largest item in a sequence.
///
/// Ties go to the lowest index. Items that do not compare with themselves
/// (e.g. `NaN`) are skipped. Returns `None` if no comparable item exists.
pub fn extreme_index<I, A>(values: I, which: Extremum) -> Option<usize>
where
    I: IntoIterator<Item = A>,
    A: PartialOrd,
{
    values.into_iter().enumerate()
        .filter(|(_, a)| a.partial_cmp(a).is_some())
        .fold(None, |best: Option<(usize, A)>, (k, a)| {
            match best {
                None => Some((k, a)),
                Some((j, b)) => {
                    let better = match which {
                        Extremum::Min => a < b,
                        Extremum::Max => a > b,
                    };
                    if better { Some((k, a)) } else { Some((j, b)) }
                },
            }
        })
        .map(|(k, _)| k)
}
