//! Particle-to-Grid (P2G) transfer
//!
//! Scatters mass and momentum from particles onto the 3x3 stencil around
//! each particle. Plain PIC: no affine momentum term.

use crate::core::{Grid, Interpolation, Particle};

/// Accumulate every particle's mass and momentum into `grid`.
///
/// The grid is expected to have been reset. Afterwards each cell's `velocity`
/// holds momentum, not velocity.
pub fn particle_to_grid(grid: &mut Grid, particles: &[Particle]) {
    for particle in particles {
        let interp = Interpolation::for_position(particle.position);

        for (cell, weight) in interp.iter_neighbors() {
            let mass_contribution = weight * particle.mass;
            grid.accumulate(cell, mass_contribution, mass_contribution * particle.velocity);
        }
    }
}
