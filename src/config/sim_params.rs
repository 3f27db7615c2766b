use bevy::prelude::Resource;

use crate::core::BoundaryHandling;
use crate::error::{Error, Result};
use crate::math::Real;

use super::constants::{BOUNDARY_MARGIN, DT, GRAVITY, GRID_RESOLUTION, PARTICLE_CAPACITY};

/// Simulation parameters for the particle-in-cell solver
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimParams {
    /// Number of cells along each side of the square grid
    pub grid_resolution: usize,

    /// Maximum number of live particles
    pub particle_capacity: usize,

    /// Cells from each edge whose normal velocity is forced to zero
    pub boundary_margin: usize,

    /// Integration time step. A particle should not cross more than one cell per tick.
    pub dt: Real,

    /// Vertical acceleration applied to every cell with mass (negative is down)
    pub gravity: Real,

    pub boundary: BoundaryHandling,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            grid_resolution: GRID_RESOLUTION,
            particle_capacity: PARTICLE_CAPACITY,
            boundary_margin: BOUNDARY_MARGIN,
            dt: DT,
            gravity: GRAVITY,
            boundary: BoundaryHandling::Stick,
        }
    }
}

impl SimParams {
    pub fn with_grid_resolution(mut self, resolution: usize) -> Self {
        self.grid_resolution = resolution;
        self
    }

    pub fn with_particle_capacity(mut self, capacity: usize) -> Self {
        self.particle_capacity = capacity;
        self
    }

    pub fn with_boundary_margin(mut self, margin: usize) -> Self {
        self.boundary_margin = margin;
        self
    }

    pub fn with_dt(mut self, dt: Real) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_gravity(mut self, gravity: Real) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_boundary(mut self, boundary: BoundaryHandling) -> Self {
        self.boundary = boundary;
        self
    }

    /// Reject settings the transfer stencil cannot work with.
    ///
    /// The 3x3 stencil plus the one-cell position margin needs at least four
    /// cells per side, otherwise the clamp range `[1, N-2]` is empty.
    pub fn validate(&self) -> Result<()> {
        if self.grid_resolution < 4 {
            return Err(Error::InvalidParam(format!(
                "grid_resolution must be >= 4, got {}",
                self.grid_resolution
            )));
        }
        if self.grid_resolution > i32::MAX as usize {
            return Err(Error::InvalidParam(format!(
                "grid_resolution {} does not fit a cell coordinate",
                self.grid_resolution
            )));
        }
        if self.boundary_margin * 2 > self.grid_resolution {
            return Err(Error::InvalidParam(format!(
                "boundary_margin {} leaves no interior in a {}-cell grid",
                self.boundary_margin, self.grid_resolution
            )));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "dt must be finite and > 0, got {}",
                self.dt
            )));
        }
        if !self.gravity.is_finite() {
            return Err(Error::InvalidParam("gravity must be finite".into()));
        }
        Ok(())
    }
}
