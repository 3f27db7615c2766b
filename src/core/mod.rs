pub mod grid;
pub mod kernel;
pub mod particle;
pub mod particle_set;
pub mod simulator;

pub use grid::{
    BoundaryHandling, Cell, Grid, KERNEL_SIZE, NEIGHBOR_COUNT, apply_boundary_conditions,
    in_margin,
};
pub use kernel::{Interpolation, bspline_weights};
pub use particle::Particle;
pub use particle_set::ParticleSet;
pub use simulator::Simulator;
