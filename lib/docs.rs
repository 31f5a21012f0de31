//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Finite differences](#finite-differences)
//! - [Ground state selection](#ground-state-selection)
//! - [Electron density](#electron-density)
//! - [LDA exchange](#lda-exchange)
//!
//! # Background
//! All quantities in this crate are expressed in Hartree atomic units
//! (*ħ* = *m*<sub>e</sub> = *e* = 1), in which the one-dimensional
//! time-independent Schrödinger equation (TISE) for a single particle reads
//! ```text
//!    1 ∂²
//! - --- --- ψ(x) + V(x) ψ(x) = E ψ(x)
//!    2 ∂x²
//! ```
//! Solutions are eigenpairs of the Hamiltonian operator -(1/2) (∂²/∂x²) +
//! *V*(*x*). On a uniform grid
//! ```text
//! x[i] = x₀ + i h, i ∊ {0, ..., N - 1}
//! ```
//! both terms become *N*×*N* matrices, and the TISE becomes an ordinary matrix
//! eigenvalue problem whose *N* eigenpairs approximate the lowest part of the
//! true spectrum. Only states well inside the grid (i.e. decayed to near zero
//! at both ends) are meaningful.
//!
//! # Finite differences
//! Writing *I*{*k*} for the *N*×*N* matrix with 1 on the *k*-th diagonal and 0
//! elsewhere, the forward-difference first derivative is
//! ```text
//! D = (I{+1} - I{0}) / h
//! (D f)[i] = (f[i + 1] - f[i]) / h
//! ```
//! which carries an *O*(*h*) truncation error. The second derivative is
//! composed from it as
//! ```text
//! D2 = D (-Dᵀ)
//! ```
//! which is exactly symmetric. Its rows reproduce the centered three-point
//! stencil
//! ```text
//! (D2 f)[i] = (f[i - 1] - 2 f[i] + f[i + 1]) / h²
//! ```
//! everywhere except the last row, where the missing right neighbor leaves
//! ```text
//! (D2 f)[N - 1] = (f[N - 2] - f[N - 1]) / h²
//! ```
//! The left edge therefore behaves like a hard wall (*f*\[-1\] = 0) and the
//! right edge like a zero-slope boundary. Neither matters for states that have
//! decayed before reaching the edges. The Hamiltonian is then
//! ```text
//! H = -(1/2) D2 + diag(V[0], ..., V[N - 1])
//! ```
//!
//! # Ground state selection
//! `H` is symmetric, so its eigenvalues are real in exact arithmetic. The
//! general real eigensolver may nevertheless return tiny imaginary parts, so
//! eigenvalues are compared by real part only. The ground state is the
//! eigenpair with the smallest real eigenvalue (lowest index on ties), and its
//! wavefunction is the real part of the matching eigenvector column. The
//! eigenvector is returned as computed, i.e. normalized to unit Euclidean norm
//! with an arbitrary overall sign.
//!
//! # Electron density
//! Electrons are paired into spatial orbitals with occupation 2, so *n*
//! electrons fill ⌈*n*/2⌉ slots. Only one orbital is available from a
//! single-particle solve, so every slot uses the ground state. The
//! wavefunction is first scaled by its own integral,
//! ```text
//! φ(x) = ψ(x) / ∫ψ dx
//! ρ(x) = Σ_slots 2 φ(x) = 2 ⌈n/2⌉ φ(x)
//! ```
//! Note that this is the integral of ψ itself, not of |ψ|², and that the density
//! is built from φ rather than |φ|². With this convention ∫ρ dx = 2 ⌈*n*/2⌉
//! exactly, and the overall sign of the eigenvector drops out.
//!
//! In classically forbidden regions the computed eigenvector decays to the level
//! of floating-point noise, where individual entries may come out with either
//! sign (e.g. `-1e-15` against a peak of order one). The density therefore
//! clears every entry with |ρ_k| ≤ ε *n* max|ρ| (machine epsilon ε, grid size
//! *n*) to exactly zero. Only then is a nodeless ground state guaranteed to
//! give a non-negative density; anything more negative than this bound is a
//! real sign change and the exchange potential still rejects it.
//!
//! # LDA exchange
//! The exchange energy and potential are evaluated as
//! ```text
//! Ex    = -(3/4) (3/π)^(1/3) ∫ρ(x) dx
//! vx(x) = -(3/π)^(1/3) ρ(x)^(1/3)
//! ```
//! Both vanish identically for ρ = 0. The potential is undefined for negative
//! densities, which are rejected.
