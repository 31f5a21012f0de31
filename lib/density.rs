//! Electron densities built from a single-particle wavefunction.
//!
//! Electrons are paired into spatial orbitals, so `n_elec` electrons occupy
//! `⌈n_elec / 2⌉` slots, each with occupation 2. A single-particle solve yields
//! only one orbital, and every slot reuses it.

use ndarray as nd;
use crate::{
    Arr1,
    error::{ ArgError, DftResult, LengthError },
    utils::{ extreme_index, integral, Extremum },
};

/// Occupation of a single spatial orbital.
pub const SLOT_OCCUPATION: f64 = 2.0;

/// Return the number of doubly occupied orbital slots needed for `n_elec`
/// electrons.
pub fn occupied_slots(n_elec: usize) -> usize { n_elec.div_ceil(2) }

/// Return the occupation of every slot for `n_elec` electrons.
///
/// An odd electron count still fills its last slot with
/// [`SLOT_OCCUPATION`].
pub fn occupations(n_elec: usize) -> nd::Array1<f64> {
    nd::Array1::from_elem(occupied_slots(n_elec), SLOT_OCCUPATION)
}

/// Build the electron density for `n_elec` electrons from a wavefunction `q`
/// sampled over `x`.
///
/// The wavefunction is first divided by its own integral `∫q dx` (of `q`
/// itself, not `|q|²`), which also fixes its overall sign to positive. The
/// density is then the sum over [occupied slots][occupations] of the
/// occupation times this normalized wavefunction.
///
/// Entries within roundoff of zero are [cleared][clear_roundoff], so
/// eigenvector tails that have decayed to noise do not leave tiny negative
/// densities behind.
///
/// Fails on mismatched or too-short arrays, and when `∫q dx` is zero or not
/// finite.
pub fn build_density<S, T>(x: &Arr1<S>, q: &Arr1<T>, n_elec: usize)
    -> DftResult<nd::Array1<f64>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    LengthError::check(x, q)?;
    let norm: f64 = integral(x, q)?;
    if !norm.is_normal() { return Err(ArgError::DegenerateNorm(norm).into()); }
    let q_norm: nd::Array1<f64> = q / norm;
    let mut density: nd::Array1<f64> = nd::Array1::zeros(q.len());
    occupations(n_elec).iter()
        .for_each(|f| { density.scaled_add(*f, &q_norm); });
    clear_roundoff(&mut density);
    Ok(density)
}

/// Set every entry with `|ρ[k]| <= ε n max|ρ|` to exactly zero, where `ε` is
/// the machine epsilon and `n` the array length.
///
/// Values of either sign below this bound are indistinguishable from
/// roundoff in a density built from a unit-norm eigenvector.
pub fn clear_roundoff<S>(density: &mut Arr1<S>)
where S: nd::DataMut<Elem = f64>
{
    let Some(k) = extreme_index(density.iter().map(|rk| rk.abs()), Extremum::Max)
        else { return; };
    let tol = f64::EPSILON * density.len() as f64 * density[k].abs();
    density.mapv_inplace(|rk| if rk.abs() <= tol { 0.0 } else { rk });
}

/// Return the number of electrons described by a density, `∫ρ dx`.
pub fn electron_count<S, T>(x: &Arr1<S>, density: &Arr1<T>) -> DftResult<f64>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    integral(x, density)
}
