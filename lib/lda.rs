//! Local density approximation (LDA) exchange.
//!
//! Both quantities depend on the density alone:
//! ```text
//! Ex    = -(3/4) (3/π)^(1/3) ∫ρ(x) dx
//! vx(x) = -(3/π)^(1/3) ρ(x)^(1/3)
//! ```

use std::f64::consts::PI;
use ndarray as nd;
use crate::{
    Arr1,
    error::{ ArgError, DftResult },
    utils::integral,
};

/// `(3/π)^(1/3)`
pub fn dirac_factor() -> f64 { (3.0 / PI).powf(1.0 / 3.0) }

/// Compute the LDA exchange energy of a density sampled over `x`.
pub fn exchange_energy<S, T>(x: &Arr1<S>, density: &Arr1<T>) -> DftResult<f64>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    let c = -3.0 / 4.0 * dirac_factor();
    Ok(c * integral(x, density)?)
}

/// Compute the LDA exchange potential at every point of a density.
///
/// Negative densities have no physical meaning here and return
/// [`ArgError::NegativeDensity`] for the first offending index, rather than a
/// `NaN`. Densities from [`build_density`][crate::density::build_density]
/// already have roundoff-level entries cleared to zero.
pub fn exchange_potential<S>(density: &Arr1<S>) -> DftResult<nd::Array1<f64>>
where S: nd::Data<Elem = f64>
{
    if let Some((index, value))
        = density.iter().enumerate().find(|(_, rk)| **rk < 0.0)
    {
        return Err(ArgError::NegativeDensity { index, value: *value }.into());
    }
    let c = -dirac_factor();
    Ok(density.mapv(|rk| c * rk.powf(1.0 / 3.0)))
}
