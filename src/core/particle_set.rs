use crate::core::Particle;
use crate::error::{Error, Result};
use crate::math::{Real, Vector};

/// Growable particle storage with a hard upper bound.
///
/// Inserting past `capacity` is a configuration error and is reported as
/// [`Error::CapacityExceeded`]; particles are never dropped silently.
///
/// `push` and `extend` only check capacity. The `_checked` variants also run
/// [`Particle::validate`] against a grid resolution and are what the
/// simulator and seeder go through.
#[derive(Clone, Debug)]
pub struct ParticleSet {
    particles: Vec<Particle>,
    capacity: usize,
}

impl ParticleSet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.particles.len()
    }

    /// Make sure `additional` more particles fit.
    pub fn reserve_check(&self, additional: usize) -> Result<()> {
        let requested = self.particles.len() + additional;
        if requested > self.capacity {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
                requested,
            });
        }
        Ok(())
    }

    pub fn push(&mut self, particle: Particle) -> Result<usize> {
        self.reserve_check(1)?;
        let index = self.particles.len();
        self.particles.push(particle);
        Ok(index)
    }

    /// Insert a batch. Either every particle is added or none is.
    pub fn extend(&mut self, batch: Vec<Particle>) -> Result<()> {
        self.reserve_check(batch.len())?;
        self.particles.extend(batch);
        Ok(())
    }

    /// `push`, after checking the particle fits a `resolution`-cell grid.
    pub fn push_checked(&mut self, particle: Particle, resolution: usize) -> Result<usize> {
        self.reserve_check(1)?;
        particle.validate(resolution)?;
        self.push(particle)
    }

    /// `extend`, after checking every particle. Nothing is inserted on error.
    pub fn extend_checked(&mut self, batch: Vec<Particle>, resolution: usize) -> Result<()> {
        self.reserve_check(batch.len())?;
        batch.iter().try_for_each(|p| p.validate(resolution))?;
        self.extend(batch)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.particles.iter_mut()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Particle> {
        self.particles.get_mut(index)
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn total_mass(&self) -> Real {
        self.particles.iter().map(|p| p.mass).sum()
    }

    pub fn total_momentum(&self) -> Vector {
        self.particles.iter().map(Particle::momentum).sum()
    }
}
