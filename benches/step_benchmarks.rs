/// Simple custom benchmarking without criterion
use std::time::Instant;

use pic2d::core::{BoundaryHandling, Grid};
use pic2d::math::Vector;
use pic2d::solver::{grid_to_particle, grid_update, particle_to_grid};
use pic2d::{Particle, SceneSeeder, SeedParams, SimParams, Simulator};

fn time_it<F: FnMut()>(name: &str, iterations: usize, mut f: F) {
    // Warmup
    for _ in 0..5 {
        f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let elapsed = start.elapsed();

    let avg_ms = elapsed.as_secs_f64() * 1000.0 / iterations as f64;
    println!("{}: {:.3}ms avg ({} iterations)", name, avg_ms, iterations);
}

fn create_test_particles(count: usize) -> Vec<Particle> {
    let side = (count as f32).sqrt() as usize;
    let mut particles = Vec::with_capacity(count);

    for x in 0..side {
        for y in 0..side {
            if particles.len() >= count {
                break;
            }
            let position = Vector::new(x as f32 + 192.0, y as f32 + 192.0);
            particles.push(Particle::new(position, Vector::new(0.25, 1.0), 1.0));
        }
    }

    particles
}

fn main() {
    println!("\n=== PIC2D Benchmarks ===\n");

    println!("--- Grid Operations ---");
    let mut grid = Grid::new(pic2d::GRID_RESOLUTION);
    time_it("reset (512x512)", 50, || grid.reset());
    time_it("grid_update (empty)", 50, || {
        grid_update(&mut grid, 1.0, -0.05, 2, BoundaryHandling::Stick)
    });

    println!("\n--- Transfers ---");
    for &count in &[1024, 4096, 16384] {
        let mut particles = create_test_particles(count);

        time_it(&format!("p2g (n={})", count), 20, || {
            grid.reset();
            particle_to_grid(&mut grid, &particles);
        });

        grid_update(&mut grid, 1.0, -0.05, 2, BoundaryHandling::Stick);
        let snapshot = grid.clone();
        time_it(&format!("g2p (n={})", count), 20, || {
            grid_to_particle(&snapshot, &mut particles, 0.0);
        });
    }

    println!("\n--- Full Step ---");
    let params = SimParams::default();
    let mut sim = Simulator::new(params.clone()).expect("default params are valid");
    SceneSeeder::new(SeedParams::default().with_seed(0))
        .seed(sim.particle_set_mut(), params.grid_resolution)
        .expect("reference block fits capacity");

    time_it(
        &format!("step (n={})", sim.particle_count()),
        30,
        || sim.step(params.dt, params.gravity),
    );

    println!("\n=== Benchmark Complete ===\n");
}
