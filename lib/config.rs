//! Run parameters for a single [pipeline][crate::pipeline] calculation.
//!
//! [`Config`] derives `serde` traits so that it can be read from any
//! self-describing format; every field falls back to its default when omitted.
//!
//! ```
//! use dftspace::{ config::Config, potential::Model };
//!
//! let config = Config {
//!     potential: Model::Harmonic,
//!     ..Config::default()
//! };
//! assert!(config.validate().is_ok());
//! assert_eq!(config.grid.count, 200);
//! ```

use serde::{ Deserialize, Serialize };
use crate::{
    DEF_GRID_COUNT,
    DEF_GRID_END,
    DEF_GRID_START,
    DEF_N_ELEC,
    error::{ ArgError, DftResult },
    potential::Model,
    solve::{ Method, System },
};

/// "linspace-style" grid parameters: start, inclusive end, and point count.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self { start: DEF_GRID_START, end: DEF_GRID_END, count: DEF_GRID_COUNT }
    }
}

/// Full parameter set for a calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Coordinate grid.
    pub grid: GridSpec,
    /// Model potential (default: modified Pöschl–Teller with `v0 = 0`).
    pub potential: Model,
    /// Number of electrons placed in the density (default: `2`).
    pub n_elec: usize,
    /// Eigensolver (default: [`Method::General`]).
    pub method: Method,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridSpec::default(),
            potential: Model::default(),
            n_elec: DEF_N_ELEC,
            method: Method::default(),
        }
    }
}

impl Config {
    /// Check that the grid can carry a Hamiltonian, i.e. has at least 2
    /// points.
    pub fn validate(&self) -> DftResult<()> {
        ArgError::check_grid_count(self.grid.count)?;
        ArgError::check_points(self.grid.count)?;
        Ok(())
    }

    /// Sample the configured potential over the configured grid.
    pub fn system(&self) -> DftResult<System> {
        let GridSpec { start, end, count } = self.grid;
        System::new_linspace((start, end, count), &self.potential)
    }
}
