use bevy::log::{debug, trace};
use bevy::prelude::Resource;

use crate::config::SimParams;
use crate::error::{Error, Result};
use crate::math::Real;
use crate::render::{ColorMode, RenderVertex, write_vertices};
use crate::solver::{grid_to_particle, grid_update, particle_to_grid};

use super::grid::Grid;
use super::particle::Particle;
use super::particle_set::ParticleSet;

/// Aggregate simulation state: the scratch grid plus the live particles.
///
/// Each [`Simulator::step`] is one synchronous reset / P2G / grid update / G2P
/// pass; there are no intermediate states visible from outside.
#[derive(Resource, Clone, Debug)]
pub struct Simulator {
    particle_set: ParticleSet,
    grid: Grid,
    params: SimParams,
    color_mode: ColorMode,
    tick: u64,
}

impl Simulator {
    pub fn new(params: SimParams) -> Result<Self> {
        params.validate()?;
        debug!(
            "grid {}x{}, particle capacity {}",
            params.grid_resolution, params.grid_resolution, params.particle_capacity
        );
        Ok(Self {
            particle_set: ParticleSet::with_capacity(params.particle_capacity),
            grid: Grid::new(params.grid_resolution),
            params,
            color_mode: ColorMode::default(),
            tick: 0,
        })
    }

    pub fn particle_set(&self) -> &ParticleSet {
        &self.particle_set
    }

    pub fn particle_set_mut(&mut self) -> &mut ParticleSet {
        &mut self.particle_set
    }

    pub fn particles(&self) -> &[Particle] {
        self.particle_set.particles()
    }

    pub fn particle_count(&self) -> usize {
        self.particle_set.len()
    }

    /// Insert one particle, rejecting it if it would break the tick: see
    /// [`Particle::validate`].
    pub fn add_particle(&mut self, particle: Particle) -> Result<usize> {
        self.particle_set
            .push_checked(particle, self.grid.resolution())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Swap in new runtime parameters.
    ///
    /// Only `dt`, `gravity`, `boundary_margin` and `boundary` may change once
    /// the simulator exists; the grid and particle storage are sized at
    /// construction. On error the current parameters are kept.
    pub fn set_params(&mut self, params: SimParams) -> Result<()> {
        params.validate()?;
        if params.grid_resolution != self.params.grid_resolution
            || params.particle_capacity != self.params.particle_capacity
        {
            return Err(Error::InvalidParam(format!(
                "grid_resolution and particle_capacity are fixed at {} and {}",
                self.params.grid_resolution, self.params.particle_capacity
            )));
        }
        if params != self.params {
            debug!("dt {}, gravity {}", params.dt, params.gravity);
        }
        self.params = params;
        Ok(())
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.color_mode = mode;
    }

    /// Advance one tick with the configured `dt` and `gravity`.
    pub fn step_with_params(&mut self) {
        let (dt, gravity) = (self.params.dt, self.params.gravity);
        self.step(dt, gravity);
    }

    /// Advance one tick.
    ///
    /// `dt` should be small enough that no particle crosses more than one cell.
    pub fn step(&mut self, dt: Real, gravity: Real) {
        self.grid.reset();
        particle_to_grid(&mut self.grid, self.particle_set.particles());

        trace!(
            "tick {}: grid mass {:.3} in {} cells",
            self.tick,
            self.grid.total_mass(),
            self.grid.active_cell_count()
        );

        grid_update(
            &mut self.grid,
            dt,
            gravity,
            self.params.boundary_margin,
            self.params.boundary,
        );
        grid_to_particle(&self.grid, self.particle_set.particles_mut(), dt);

        self.tick += 1;
    }

    /// Fill `out` with one vertex per particle, in particle order.
    pub fn render_feed(&self, out: &mut Vec<RenderVertex>) {
        write_vertices(self.particle_set.particles(), self.color_mode, out);
    }

    pub fn vertices(&self) -> Vec<RenderVertex> {
        let mut out = Vec::with_capacity(self.particle_count());
        self.render_feed(&mut out);
        out
    }
}
