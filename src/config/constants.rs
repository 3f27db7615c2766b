// Reference configuration for the particle-in-cell scene
use crate::math::Real;

// Grid
pub const GRID_RESOLUTION: usize = 512;
pub const BOUNDARY_MARGIN: usize = 2;

// Particles
pub const PARTICLE_CAPACITY: usize = 16 * 1024;
pub const PARTICLE_MASS: Real = 1.0;

// Integration
pub const DT: Real = 1.0;
pub const GRAVITY: Real = -0.05;
pub const TICK_HZ: f64 = 60.0;

// Seeding
pub const BLOCK_WIDTH: u32 = 128;
pub const BLOCK_HEIGHT: u32 = 128;
pub const BLOCK_SPACING: Real = 1.0;
pub const VELOCITY_BIAS: Real = 2.75;
