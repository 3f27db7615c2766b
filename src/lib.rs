use bevy::prelude::*;

pub mod config;
pub mod core;
pub mod error;
pub mod math;
pub mod render;
pub mod scene;
pub mod solver;

// Public re-exports for clean API
pub use crate::config::{GRID_RESOLUTION, SimParams};
pub use crate::core::{BoundaryHandling, Cell, Grid, Particle, ParticleSet, Simulator};
pub use error::Error;
pub use render::{ColorMode, RenderFeed, RenderVertex};
pub use scene::{SceneSeeder, SeedParams};

use crate::config::TICK_HZ;

/// Drives the simulation from Bevy's fixed timestep.
///
/// `SimParams` and `SeedParams` are only initialised if the app has not
/// inserted its own. Drawing is left to the app; it reads [`RenderFeed`].
pub struct PicPlugin;

impl Plugin for PicPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimParams>()
            .init_resource::<SeedParams>()
            .init_resource::<RenderFeed>()
            .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
            .add_systems(Startup, setup_simulation)
            .add_systems(FixedUpdate, (step_simulation, refresh_render_feed).chain());
    }
}

/// Build the simulator and seed the initial block.
///
/// A capacity or parameter error is returned to Bevy's error handler, which
/// panics by default: the app never starts with a truncated scene.
pub fn setup_simulation(
    mut commands: Commands,
    params: Res<SimParams>,
    seed: Res<SeedParams>,
    mut feed: ResMut<RenderFeed>,
) -> Result {
    let mut sim = Simulator::new(params.clone())?;
    SceneSeeder::new(seed.clone()).seed(sim.particle_set_mut(), params.grid_resolution)?;

    sim.render_feed(&mut feed.vertices);
    commands.insert_resource(sim);
    Ok(())
}

/// Advance one tick with the simulator's own parameters.
///
/// Edits to the `SimParams` resource are pushed into the simulator first.
/// Invalid edits are logged and ignored; the simulator keeps running with the
/// last good values.
pub fn step_simulation(params: Res<SimParams>, mut sim: ResMut<Simulator>) {
    if params.is_changed() && *params != *sim.params() {
        if let Err(err) = sim.set_params(params.clone()) {
            warn!("ignoring SimParams update: {err}");
        }
    }
    sim.step_with_params();

    if sim.tick_count() % TICK_HZ as u64 == 0 {
        debug!(
            "tick {}: {} particles, total mass {:.1}",
            sim.tick_count(),
            sim.particle_count(),
            sim.particle_set().total_mass()
        );
    }
}

pub fn refresh_render_feed(sim: Res<Simulator>, mut feed: ResMut<RenderFeed>) {
    sim.render_feed(&mut feed.vertices);
    feed.tick = sim.tick_count();
}
