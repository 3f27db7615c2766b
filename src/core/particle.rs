//! Material particles
//!
//! Particles carry position, velocity and mass. Nothing else survives a tick.

use crate::error::{Error, Result};
use crate::math::{Real, Vector, zero_vector};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vector,
    pub velocity: Vector,
    /// Always > 0.
    pub mass: Real,
}

impl Particle {
    pub fn new(position: Vector, velocity: Vector, mass: Real) -> Self {
        debug_assert!(mass > 0.0, "particle mass must be positive, got {mass}");
        Self {
            position,
            velocity,
            mass,
        }
    }

    /// Unit-mass particle at rest.
    pub fn at(position: Vector) -> Self {
        Self::new(position, zero_vector(), 1.0)
    }

    /// Check that the particle can take part in a tick on a `resolution`-cell
    /// grid: finite position inside `[1, N-2]`, finite velocity, finite
    /// positive mass.
    ///
    /// Anything else either indexes outside the grid during P2G or leaves a
    /// cell with momentum but no mass.
    pub fn validate(&self, resolution: usize) -> Result<()> {
        let low = 1.0;
        let high = resolution as Real - 2.0;
        let bounds = low..=high;
        // NaN fails `contains`, so non-finite positions are rejected here too.
        if !(bounds.contains(&self.position.x) && bounds.contains(&self.position.y)) {
            return Err(Error::InvalidParam(format!(
                "particle at {} lies outside [{low}, {high}]",
                self.position
            )));
        }
        if !self.velocity.is_finite() {
            return Err(Error::InvalidParam(format!(
                "particle velocity must be finite, got {}",
                self.velocity
            )));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(Error::InvalidParam(format!(
                "particle mass must be finite and > 0, got {}",
                self.mass
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn momentum(&self) -> Vector {
        self.velocity * self.mass
    }

    #[inline]
    pub fn speed_squared(&self) -> Real {
        self.velocity.length_squared()
    }
}
