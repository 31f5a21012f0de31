//! Closed-form model potentials.
//!
//! Every model is a pure function of position, evaluated pointwise over a
//! coordinate array.
//!
//! ```
//! use ndarray as nd;
//! use dftspace::potential::{ HarmonicOscillator, Potential };
//!
//! let x: nd::Array1<f64> = nd::array![-1.0, 0.0, 2.0];
//! assert_eq!(HarmonicOscillator.evaluate(&x), nd::array![1.0, 0.0, 4.0]);
//! ```

use ndarray as nd;
use serde::{ Deserialize, Serialize };
use crate::Arr1;

/// A potential energy function of one coordinate.
pub trait Potential {
    /// Evaluate the potential at a single point.
    fn at(&self, x: f64) -> f64;

    /// Evaluate the potential at every point of a coordinate array. The
    /// returned array is aligned index-for-index with `x`.
    fn evaluate<S>(&self, x: &Arr1<S>) -> nd::Array1<f64>
    where
        S: nd::Data<Elem = f64>,
        Self: Sized,
    {
        x.mapv(|xk| self.at(xk))
    }
}

/// `V(x) = x²`
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HarmonicOscillator;

impl Potential for HarmonicOscillator {
    fn at(&self, x: f64) -> f64 { x * x }
}

/// `V(x) = μ x² + λ x⁴`
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnharmonicOscillator {
    /// Quadratic coefficient.
    pub mu: f64,
    /// Quartic coefficient.
    pub lambda: f64,
}

impl Potential for AnharmonicOscillator {
    fn at(&self, x: f64) -> f64 {
        let x2 = x * x;
        let x4 = x2 * x2;
        self.mu * x2 + self.lambda * x4
    }
}

/// `V(x) = exp(-2x) - 2 exp(-x)`
///
/// Unit well depth and range, with the minimum `V = -1` at `x = 0`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Morse;

impl Potential for Morse {
    fn at(&self, x: f64) -> f64 { (-2.0 * x).exp() - 2.0 * (-x).exp() }
}

/// `V(x) = -V₀ / cosh²(x)`
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModifiedPoschlTeller {
    /// Well depth.
    pub v0: f64,
}

impl Potential for ModifiedPoschlTeller {
    fn at(&self, x: f64) -> f64 {
        let cosh2 = x.cosh() * x.cosh();
        -self.v0 / cosh2
    }
}

/// Runtime selector over the model potentials.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Model {
    /// [`HarmonicOscillator`]
    Harmonic,
    /// [`AnharmonicOscillator`]
    Anharmonic { mu: f64, lambda: f64 },
    /// [`Morse`]
    Morse,
    /// [`ModifiedPoschlTeller`]
    PoschlTeller { v0: f64 },
}

impl Default for Model {
    fn default() -> Self { Self::PoschlTeller { v0: 0.0 } }
}

impl Potential for Model {
    fn at(&self, x: f64) -> f64 {
        match *self {
            Self::Harmonic => HarmonicOscillator.at(x),
            Self::Anharmonic { mu, lambda }
                => AnharmonicOscillator { mu, lambda }.at(x),
            Self::Morse => Morse.at(x),
            Self::PoschlTeller { v0 } => ModifiedPoschlTeller { v0 }.at(x),
        }
    }
}

impl From<HarmonicOscillator> for Model {
    fn from(_: HarmonicOscillator) -> Self { Self::Harmonic }
}

impl From<AnharmonicOscillator> for Model {
    fn from(p: AnharmonicOscillator) -> Self {
        Self::Anharmonic { mu: p.mu, lambda: p.lambda }
    }
}

impl From<Morse> for Model {
    fn from(_: Morse) -> Self { Self::Morse }
}

impl From<ModifiedPoschlTeller> for Model {
    fn from(p: ModifiedPoschlTeller) -> Self { Self::PoschlTeller { v0: p.v0 } }
}
