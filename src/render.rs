//! Render feed handed to the external point renderer.
//!
//! One `(position, color)` vertex per live particle, produced after a tick
//! completes. Drawing them is the renderer's business.

use bevy::prelude::Resource;

use crate::core::Particle;

/// Interleaved position/colour pair, laid out for direct upload to a vertex buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct RenderVertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorMode {
    /// Every particle gets the same colour.
    Solid([f32; 3]),
    /// Shade by squared speed, brighter when faster.
    Speed,
}

impl Default for ColorMode {
    fn default() -> Self {
        ColorMode::Solid([1.0, 0.0, 0.0])
    }
}

impl ColorMode {
    pub fn color_for(&self, particle: &Particle) -> [f32; 3] {
        match *self {
            ColorMode::Solid(rgb) => rgb,
            ColorMode::Speed => {
                let s = particle.speed_squared().min(1.0);
                [s, 0.5 * s + 0.5, 1.0]
            }
        }
    }
}

/// Latest completed tick's vertices, refreshed after every step.
#[derive(Resource, Clone, Debug, Default)]
pub struct RenderFeed {
    pub vertices: Vec<RenderVertex>,
    pub tick: u64,
}

/// Clear `out` and refill it from `particles`, preserving order.
pub fn write_vertices(particles: &[Particle], mode: ColorMode, out: &mut Vec<RenderVertex>) {
    out.clear();
    out.extend(particles.iter().map(|p| RenderVertex {
        position: [p.position.x, p.position.y],
        color: mode.color_for(p),
    }));
}
