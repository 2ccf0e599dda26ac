//! Observational metrics over the solver state.
//!
//! Read-only: nothing here feeds back into the relaxation step. Shells and
//! tests poll these between ticks.

use glam::Vec2;

use crate::grid::Direction;
use crate::solver::FluidSolver;

impl FluidSolver {
    /// Raw divergence of one cell: (right - left) + (up - down), without
    /// the over-relaxation factor.
    pub fn cell_divergence(&self, x: i32, y: i32) -> f32 {
        (self.grid.face(x, y, Direction::Right) - self.grid.face(x, y, Direction::Left))
            + (self.grid.face(x, y, Direction::Up) - self.grid.face(x, y, Direction::Down))
    }

    /// Sum of |divergence| across all simulated cells.
    pub fn total_divergence(&self) -> f32 {
        let n = self.grid.resolution() as i32;
        let mut total = 0.0;
        for x in 0..n {
            for y in 0..n {
                total += self.cell_divergence(x, y).abs();
            }
        }
        total
    }

    /// Pressure readout statistics (min, max, avg) for debugging.
    pub fn pressure_stats(&self) -> (f32, f32, f32) {
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        let mut sum = 0.0;
        for &p in self.pressure() {
            min = min.min(p);
            max = max.max(p);
            sum += p;
        }
        (min, max, sum / self.pressure().len() as f32)
    }

    /// Largest |face velocity| across the simulated region.
    pub fn max_velocity(&self) -> f32 {
        let n = self.grid.resolution() as i32;
        let mut max = 0.0f32;
        for x in 0..n {
            for y in 0..n {
                for dir in Direction::ALL {
                    max = max.max(self.grid.face(x, y, dir).abs());
                }
            }
        }
        max
    }

    /// Net (rightward, downward) face velocity summed over the region.
    pub fn net_flow(&self) -> Vec2 {
        let n = self.grid.resolution() as i32;
        let mut flow = Vec2::ZERO;
        for x in 0..n {
            for y in 0..n {
                flow.x += self.grid.face(x, y, Direction::Right);
                flow.y += self.grid.face(x, y, Direction::Down);
            }
        }
        flow
    }
}
