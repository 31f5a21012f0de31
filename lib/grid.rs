//! Uniform coordinate grids.
//!
//! ```
//! use dftspace::grid::{ linspace, spacing };
//!
//! let x = linspace(-1.0, 1.0, 5).unwrap();
//! assert_eq!(x.len(), 5);
//! assert_eq!(x[0], -1.0);
//! assert_eq!(spacing(&x).unwrap(), 0.5);
//! ```

use ndarray as nd;
use crate::{
    Arr1,
    error::{ ArgError, DftResult },
};

/// Generate `count` evenly spaced points from `start` to `end`, inclusive of
/// both endpoints.
///
/// A single point is placed at `end`, not at `start` or the midpoint. Fails
/// with [`ArgError::GridCount`] if `count` is zero.
pub fn linspace(start: f64, end: f64, count: usize)
    -> DftResult<nd::Array1<f64>>
{
    ArgError::check_grid_count(count)?;
    if count == 1 { return Ok(nd::array![end]); }
    let delta = (end - start) / (count - 1) as f64;
    Ok((0..count).map(|i| start + delta * i as f64).collect())
}

/// Return the spacing between the first two points of a grid.
///
/// Grids produced by [`linspace`] are uniform, so this is the spacing
/// everywhere.
pub fn spacing<S>(x: &Arr1<S>) -> DftResult<f64>
where S: nd::Data<Elem = f64>
{
    ArgError::check_points(x.len())?;
    Ok(x[1] - x[0])
}
