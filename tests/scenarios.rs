use pic2d::core::{BoundaryHandling, Grid, Particle, Simulator};
use pic2d::error::Result;
use pic2d::math::{IVector, Vector};
use pic2d::scene::{SceneSeeder, SeedParams};
use pic2d::solver::{grid_to_particle, grid_update, particle_to_grid};
use pic2d::{Error, SimParams};

/// One unit-mass particle sitting exactly on a cell corner splits its mass
/// evenly over the four cells that share that corner.
#[test]
fn single_particle_at_cell_center() {
    let mut grid = Grid::new(512);
    grid.reset();
    particle_to_grid(&mut grid, &[Particle::at(Vector::new(256.0, 256.0))]);

    let expected = [
        IVector::new(255, 255),
        IVector::new(255, 256),
        IVector::new(256, 255),
        IVector::new(256, 256),
    ];
    for (coord, cell) in grid.iter_cells() {
        if expected.contains(&coord) {
            assert_eq!(cell.mass, 0.25, "cell {coord}");
        } else {
            assert_eq!(cell.mass, 0.0, "cell {coord}");
        }
    }
}

#[test]
fn gravity_on_isolated_interior_cell() {
    let mut grid = Grid::new(512);
    let coord = IVector::new(256, 256);
    grid.accumulate(coord, 2.0, Vector::ZERO);

    grid_update(&mut grid, 1.0, -0.05, 2, BoundaryHandling::Stick);

    assert_eq!(grid.read(coord).velocity, Vector::new(0.0, -0.05));
}

#[test]
fn boundary_suppression() {
    let mut grid = Grid::new(512);
    let coord = IVector::new(1, 256);
    grid.accumulate(coord, 2.0, Vector::new(3.0, 0.0));

    grid_update(&mut grid, 1.0, -0.05, 2, BoundaryHandling::Stick);

    let v = grid.read(coord).velocity;
    assert_eq!(v.x, 0.0);
    assert_eq!(v.y, -0.05);
}

#[test]
fn position_clamp() {
    let mut grid = Grid::new(512);
    for (_, cell) in grid.iter_cells_mut() {
        cell.mass = 1.0;
        cell.velocity = Vector::new(-6.0, 0.0);
    }
    let mut particles = [Particle::at(Vector::new(1.0, 300.0))];

    grid_to_particle(&grid, &mut particles, 1.0);

    assert_eq!(particles[0].position, Vector::new(1.0, 300.0));
}

#[test]
fn reference_scene_runs_and_keeps_margin() -> Result<()> {
    let params = SimParams::default();
    let mut sim = Simulator::new(params.clone())?;
    let added = SceneSeeder::new(SeedParams::default().with_seed(2024))
        .seed(sim.particle_set_mut(), params.grid_resolution)?;
    assert_eq!(added, params.particle_capacity);

    let mass_before = sim.particle_set().total_mass();
    let high = params.grid_resolution as f32 - 2.0;

    for _ in 0..30 {
        sim.step(params.dt, params.gravity);
        for p in sim.particles() {
            assert!(p.position.x >= 1.0 && p.position.x <= high, "{p:?}");
            assert!(p.position.y >= 1.0 && p.position.y <= high, "{p:?}");
            assert!(p.velocity.is_finite());
        }
    }

    assert_eq!(sim.particle_set().total_mass(), mass_before);
    assert_eq!(sim.vertices().len(), added);
    assert_eq!(sim.tick_count(), 30);
    Ok(())
}

#[test]
fn seeding_past_capacity_fails_loudly() -> Result<()> {
    let mut sim = Simulator::new(SimParams::default().with_particle_capacity(100))?;
    let err = SceneSeeder::new(SeedParams::default().with_block(11, 10))
        .seed(sim.particle_set_mut(), 512)
        .unwrap_err();

    assert_eq!(
        err,
        Error::CapacityExceeded {
            capacity: 100,
            requested: 110
        }
    );
    assert_eq!(sim.particle_count(), 0);
    Ok(())
}

#[test]
fn runtime_insert_past_capacity_fails() -> Result<()> {
    let mut sim = Simulator::new(SimParams::default().with_particle_capacity(1))?;
    sim.add_particle(Particle::at(Vector::splat(100.0)))?;
    assert!(matches!(
        sim.add_particle(Particle::at(Vector::splat(101.0))),
        Err(Error::CapacityExceeded { .. })
    ));
    Ok(())
}

/// With the walls in place, a block dropped under gravity ends up resting
/// near the floor instead of leaving the grid.
#[test]
fn block_settles_on_floor() -> Result<()> {
    let params = SimParams::default().with_grid_resolution(64);
    let mut sim = Simulator::new(params.clone())?;
    SceneSeeder::new(
        SeedParams::default()
            .with_block(8, 8)
            .with_center(Vector::new(32.0, 40.0))
            .with_velocity_bias(0.0)
            .with_seed(5),
    )
    .seed(sim.particle_set_mut(), 64)?;

    for _ in 0..400 {
        sim.step(params.dt, params.gravity);
    }

    let mean_y: f32 =
        sim.particles().iter().map(|p| p.position.y).sum::<f32>() / sim.particle_count() as f32;
    assert!(mean_y < 20.0, "mean height {mean_y}");
    Ok(())
}
