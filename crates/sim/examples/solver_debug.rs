//! Watch divergence decay as the relaxation projection iterates.

use sim::{fill_disc, FluidSolver};

fn main() {
    println!("=== DIVERGENCE RELAXATION DEBUG ===\n");

    let mut solver = FluidSolver::new(64);
    solver.gravity = 0.0; // isolate the projection
    solver.substeps = 1;

    fill_disc(&mut solver, 0.7, 10.0);

    println!("Grid: {}x{}", solver.resolution(), solver.resolution());
    println!("Initial divergence: {:.3}\n", solver.total_divergence());

    let dt = 1.0 / 60.0;

    for frame in 0..200 {
        solver.update(dt);

        if frame % 20 == 0 {
            let (p_min, p_max, p_avg) = solver.pressure_stats();
            let flow = solver.net_flow();
            println!(
                "F{:3}: div={:10.4}, |v|max={:8.4}, flow=({:9.2},{:9.2}), p=[{:10.2},{:10.2}] avg {:9.2}",
                frame,
                solver.total_divergence(),
                solver.max_velocity(),
                flow.x,
                flow.y,
                p_min,
                p_max,
                p_avg
            );
        }
    }

    println!("\nFinal divergence: {:.4}", solver.total_divergence());
}
