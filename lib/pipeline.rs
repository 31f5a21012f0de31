//! The full single-particle → LDA calculation chain.
//!
//! Grid → Hamiltonian → eigendecomposition → ground state → density → LDA
//! exchange. Each stage is pure, and the first error aborts the run; no
//! partial [`Calculation`] is ever returned.

use ndarray as nd;
use tracing::{ debug, info };
use crate::{
    config::Config,
    density::build_density,
    error::DftResult,
    lda::{ exchange_energy, exchange_potential },
    solve::select_state,
};

/// Everything computed by [`run`], aligned index-for-index with `x` where
/// applicable.
#[derive(Clone, Debug)]
pub struct Calculation {
    /// Coordinate array.
    pub x: nd::Array1<f64>,
    /// Potential array.
    pub v: nd::Array1<f64>,
    /// Ground state energy.
    pub e: f64,
    /// Ground state wavefunction, as the raw eigenvector.
    pub wf: nd::Array1<f64>,
    /// Electron density.
    pub density: nd::Array1<f64>,
    /// LDA exchange energy.
    pub exchange_energy: f64,
    /// LDA exchange potential.
    pub exchange_potential: nd::Array1<f64>,
}

/// Run the full calculation described by `config`.
///
/// A failed eigendecomposition ends the run with
/// [`DftError::EigenFactorizationFailed`][crate::error::DftError], which
/// should be treated as fatal.
pub fn run(config: &Config) -> DftResult<Calculation> {
    config.validate()?;
    debug!(?config, "starting calculation");
    let system = config.system()?;
    let eigen = system.solve(config.method)?;
    let ground = select_state(&eigen)?;
    let x = system.get_x();
    let density = build_density(x, &ground.wf, config.n_elec)?;
    let ex = exchange_energy(x, &density)?;
    let vx = exchange_potential(&density)?;
    info!(energy = ground.e, exchange_energy = ex, "calculation complete");
    Ok(Calculation {
        x: x.clone(),
        v: system.get_V().clone(),
        e: ground.e,
        wf: ground.wf,
        density,
        exchange_energy: ex,
        exchange_potential: vx,
    })
}
