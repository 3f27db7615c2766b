//! Grid-to-Particle (G2P) transfer
//!
//! Gathers grid velocities back onto particles, then advects and clamps them.

use crate::core::{Grid, Interpolation, Particle};
use crate::math::{Real, clamp, splat, zero_vector};

/// Replace every particle's velocity with the interpolated grid velocity,
/// integrate position by `dt` and clamp it to `[1, N-2]` on both axes.
///
/// The clamp is what keeps next tick's 3x3 stencil inside the grid.
pub fn grid_to_particle(grid: &Grid, particles: &mut [Particle], dt: Real) {
    let low = splat(1.0);
    let high = splat(grid.resolution() as Real - 2.0);

    for particle in particles.iter_mut() {
        let interp = Interpolation::for_position(particle.position);

        // Pure PIC: the old velocity is discarded, not blended.
        particle.velocity = zero_vector();
        for (cell, weight) in interp.iter_neighbors() {
            particle.velocity += grid.read(cell).velocity * weight;
        }

        particle.position += particle.velocity * dt;
        particle.position = clamp(particle.position, low, high);
    }
}
