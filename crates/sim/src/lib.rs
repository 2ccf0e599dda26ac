//! Staggered-grid incompressible flow solver.
//!
//! A 2D MAC-grid Eulerian model that advances a velocity field under
//! gravity and relaxes it toward zero per-cell divergence with an
//! iterative local projection. Each tick runs a configurable number of
//! full-dt relaxation passes and records a divergence-derived pressure
//! readout per cell for external visualization.
//!
//! This crate is framework-agnostic - it handles simulation only.
//! Any rendering or input shell lives in its own crate.

pub mod grid;
pub mod physics;
pub mod scenario;
pub mod solver;

mod diagnostics;

pub use grid::{Direction, MacGrid};
pub use scenario::{fill_disc, fill_noise};
pub use solver::FluidSolver;
