#![allow(non_snake_case)]

//! Provides functions and higher-level constructs for the solution of the
//! one-dimensional, time-independent Schrödinger equation by diagonalization
//! of a finite-difference Hamiltonian, and for the evaluation of local density
//! approximation (LDA) exchange quantities from the resulting ground state.
//!
//! The calculation chain is:
//! - [Grid][grid] generation
//! - [Finite-difference][operators] kinetic operator
//! - [Hamiltonian assembly, eigendecomposition, and ground-state
//!   selection][solve]
//! - [Electron density][density]
//! - [LDA exchange energy and potential][lda]
//!
//! with [`pipeline::run`] driving all of them from a [`config::Config`].
//!
//! Model potentials live in [`potential`]. See [`docs`] for theoretical
//! background.
//!
//! This crate emits [`tracing`] events but never installs a subscriber.

pub mod error;
pub mod grid;
pub mod operators;
pub mod potential;
pub mod solve;
pub mod density;
pub mod lda;
pub mod config;
pub mod pipeline;
pub mod utils;

pub mod docs;

pub(crate) const DEF_GRID_START: f64 = -5.0;
pub(crate) const DEF_GRID_END: f64 = 5.0;
pub(crate) const DEF_GRID_COUNT: usize = 200;
pub(crate) const DEF_N_ELEC: usize = 2;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
