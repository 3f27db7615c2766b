//! Initial particle configuration
//!
//! A rectangular block of unit-mass particles with a randomized velocity and
//! a vertical drift.

use bevy::log::info;
use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{
    BLOCK_HEIGHT, BLOCK_SPACING, BLOCK_WIDTH, GRID_RESOLUTION, PARTICLE_MASS, VELOCITY_BIAS,
};
use crate::core::{Particle, ParticleSet};
use crate::error::{Error, Result};
use crate::math::{Real, Vector, splat};

#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SeedParams {
    /// Particles per row.
    pub width: u32,
    /// Particles per column.
    pub height: u32,
    /// Grid position the block is centred on.
    pub center: Vector,
    pub spacing: Real,
    /// Added to the y component of every initial velocity before scaling.
    pub velocity_bias: Real,
    /// Fixed RNG seed for reproducible scenes. `None` draws one from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for SeedParams {
    fn default() -> Self {
        Self {
            width: BLOCK_WIDTH,
            height: BLOCK_HEIGHT,
            center: splat(GRID_RESOLUTION as Real / 2.0),
            spacing: BLOCK_SPACING,
            velocity_bias: VELOCITY_BIAS,
            seed: None,
        }
    }
}

impl SeedParams {
    pub fn with_block(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_center(mut self, center: Vector) -> Self {
        self.center = center;
        self
    }

    pub fn with_velocity_bias(mut self, bias: Real) -> Self {
        self.velocity_bias = bias;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn particle_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Lower-left particle of the block.
    pub fn origin(&self) -> Vector {
        self.center
            - Vector::new(self.width as Real, self.height as Real) * self.spacing * 0.5
    }
}

pub struct SceneSeeder {
    params: SeedParams,
    rng: StdRng,
}

impl SceneSeeder {
    pub fn new(params: SeedParams) -> Self {
        let seed = params.seed.unwrap_or_else(|| rand::rng().random());
        Self {
            params,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn params(&self) -> &SeedParams {
        &self.params
    }

    /// Append the block to `set` and return how many particles were added.
    ///
    /// Fails without inserting anything if the block does not fit the set's
    /// capacity, or if any particle would start outside `[1, N-2]` for a grid
    /// of `grid_resolution` cells (a NaN `center` counts as outside).
    pub fn seed(&mut self, set: &mut ParticleSet, grid_resolution: usize) -> Result<usize> {
        let params = &self.params;
        if !params.spacing.is_finite() || params.spacing <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "spacing must be finite and > 0, got {}",
                params.spacing
            )));
        }
        if !params.velocity_bias.is_finite() {
            return Err(Error::InvalidParam("velocity_bias must be finite".into()));
        }

        let count = params.particle_count();
        set.reserve_check(count)?;

        let origin = params.origin();
        let mut batch = Vec::with_capacity(count);
        for i in 0..params.width {
            for j in 0..params.height {
                let position = origin + Vector::new(i as Real, j as Real) * params.spacing;
                let velocity = Vector::new(
                    self.rng.random_range(-0.5..0.5_f32),
                    self.rng.random_range(-0.5..0.5_f32) + params.velocity_bias,
                ) * 0.5;

                batch.push(Particle::new(position, velocity, PARTICLE_MASS));
            }
        }

        set.extend_checked(batch, grid_resolution)?;
        info!(
            "seeded {}x{} particle block at {} ({} live)",
            params.width,
            params.height,
            params.center,
            set.len()
        );
        Ok(count)
    }
}
