//! Relaxation solver: gravity integration plus an iterative local
//! divergence projection over the staggered grid.
//!
//! Algorithm, once per substep:
//! 1. Classify the four faces of each cell (domain boundary only)
//! 2. Apply gravity to every open face
//! 3. Redistribute the cell's divergence across its open faces
//! 4. Record the divergence-derived pressure readout
//!
//! There is no advection step; the field responds to gravity and the
//! projection only.

use crate::grid::{Direction, MacGrid};
use crate::physics;

/// Eulerian velocity solver over a square MAC grid.
///
/// Configuration fields may be changed at any time and take effect on the
/// next step. Single-threaded; a step runs to completion once entered, and
/// the grid must not be read or written concurrently with one.
pub struct FluidSolver {
    pub grid: MacGrid,
    /// Width of one grid cell in world units.
    pub grid_spacing: f32,
    /// Fluid density used to scale the pressure readout.
    pub density: f32,
    /// Divergence correction multiplier, conventionally in [0, 2].
    pub over_relaxation: f32,
    /// Gravitational acceleration applied each substep.
    pub gravity: f32,
    /// Relaxation passes per `update` call.
    pub substeps: u32,
}

impl FluidSolver {
    /// Create a solver with a zeroed N×N grid and default tuning.
    pub fn new(resolution: usize) -> Self {
        Self {
            grid: MacGrid::new(resolution),
            grid_spacing: physics::GRID_SPACING,
            density: physics::WATER_DENSITY,
            over_relaxation: physics::OVER_RELAXATION,
            gravity: physics::GRAVITY,
            substeps: physics::SUBSTEPS,
        }
    }

    /// Simulated cells per side.
    pub fn resolution(&self) -> usize {
        self.grid.resolution()
    }

    /// Zero the velocity field and the pressure readout.
    pub fn reset(&mut self) {
        self.grid.reset();
    }

    /// Pressure readout, row-major resolution².
    pub fn pressure(&self) -> &[f32] {
        self.grid.pressure()
    }

    /// Advance one tick: `substeps` relaxation passes, each integrating
    /// the full `dt`.
    ///
    /// The delta is NOT subdivided across substeps; substeps buy extra
    /// correction iterations, not finer time resolution.
    pub fn update(&mut self, dt: f32) {
        for _ in 0..self.substeps {
            self.step(dt);
        }
    }

    /// One relaxation pass over every simulated cell, in fixed
    /// column-major order.
    pub fn step(&mut self, dt: f32) {
        assert!(dt > 0.0, "dt must be positive, got {}", dt);
        let n = self.grid.resolution() as i32;
        for x in 0..n {
            for y in 0..n {
                self.relax_cell(x, y, dt);
            }
        }
    }

    /// Gravity plus divergence correction for a single cell.
    ///
    /// Updates are sequential and in place, so later cells see the
    /// corrections of earlier ones (Gauss-Seidel); repeated passes
    /// propagate the correction across the grid. Shared faces receive the
    /// gravity term from both of their cells within one pass.
    fn relax_cell(&mut self, x: i32, y: i32, dt: f32) {
        let mut open = [false; 4];
        let mut weight = 0.0f32;

        for (i, &dir) in Direction::ALL.iter().enumerate() {
            open[i] = !self.grid.is_obstacle(x, y, dir);
            if open[i] {
                *self.grid.face_mut(x, y, dir) += self.gravity * dt * -1.0;
                weight += 1.0;
            }
        }

        // All four faces obstructed: nothing to correct, no readout write.
        if weight < 0.01 {
            return;
        }

        // Net outflow through the cell's faces, read after the gravity
        // update. Positive means too much outflow, negative too much
        // inflow; zero is incompressible.
        let divergence = self.over_relaxation
            * ((self.grid.face(x, y, Direction::Right) - self.grid.face(x, y, Direction::Left))
                + (self.grid.face(x, y, Direction::Up) - self.grid.face(x, y, Direction::Down)));

        let push = divergence / weight;

        for (i, &dir) in Direction::ALL.iter().enumerate() {
            if open[i] {
                *self.grid.face_mut(x, y, dir) += push * dir.sign() * -1.0;
            }
        }

        let idx = self.grid.cell_index(x as usize, y as usize);
        self.grid.pressure_mut()[idx] =
            (divergence / weight) * (self.density * self.grid_spacing / dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A cell outside the domain has all four faces classified solid; the
    /// zero-weight guard must skip it without touching the field or the
    /// readout.
    #[test]
    fn test_all_obstructed_cell_is_skipped() {
        let mut solver = FluidSolver::new(4);
        solver.relax_cell(-1, 2, 1.0 / 60.0);

        assert!(solver.pressure().iter().all(|&p| p == 0.0));
        // The right face of (-1, 2) is the left face of (0, 2); it must
        // not have picked up gravity.
        assert_eq!(solver.grid.face(0, 2, Direction::Left), 0.0);
    }

    #[test]
    #[should_panic(expected = "dt must be positive")]
    fn test_zero_dt_is_rejected() {
        let mut solver = FluidSolver::new(4);
        solver.step(0.0);
    }
}
