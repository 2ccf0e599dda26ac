//! Initial velocity field setups for tests and diagnostics.
//!
//! The solver starts from an all-zero field; these helpers write a shaped
//! disturbance for the projection to relax.

use rand::Rng;

use crate::grid::Direction;
use crate::solver::FluidSolver;

/// Zero the field, then set every face of each cell inside a centered disc
/// to `speed`.
///
/// Cell coordinates are normalized to [-1, 1]²; `radius` is measured in
/// that space, so 0.7 covers most of the domain.
pub fn fill_disc(solver: &mut FluidSolver, radius: f32, speed: f32) {
    solver.reset();
    let n = solver.resolution() as i32;
    for x in 0..n {
        for y in 0..n {
            let u = (x as f32 / n as f32) * 2.0 - 1.0;
            let v = (y as f32 / n as f32) * 2.0 - 1.0;
            if (u * u + v * v).sqrt() < radius {
                for dir in Direction::ALL {
                    *solver.grid.face_mut(x, y, dir) = speed;
                }
            }
        }
    }
}

/// Zero the field, then give every face a random velocity in
/// [-amplitude, amplitude).
pub fn fill_noise(solver: &mut FluidSolver, amplitude: f32) {
    solver.reset();
    let mut rng = rand::thread_rng();
    let n = solver.resolution() as i32;
    for x in 0..n {
        for y in 0..n {
            for dir in Direction::ALL {
                *solver.grid.face_mut(x, y, dir) = rng.gen_range(-amplitude..amplitude);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disc_fill_covers_center_not_corners() {
        let mut solver = FluidSolver::new(16);
        fill_disc(&mut solver, 0.7, 10.0);

        // Center cell sits inside the disc.
        assert_eq!(solver.grid.face(8, 8, Direction::Right), 10.0);
        // Far corner is outside it.
        assert_eq!(solver.grid.face(15, 15, Direction::Right), 0.0);
    }

    #[test]
    fn test_noise_fill_stays_in_range() {
        let mut solver = FluidSolver::new(8);
        fill_noise(&mut solver, 2.0);

        let mut touched = false;
        for x in 0..8 {
            for y in 0..8 {
                for dir in Direction::ALL {
                    let v = solver.grid.face(x, y, dir);
                    assert!(v.abs() <= 2.0, "face ({x},{y},{dir:?}) out of range: {v}");
                    touched |= v != 0.0;
                }
            }
        }
        assert!(touched, "noise fill left the whole field at zero");
    }
}
