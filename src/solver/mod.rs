//! The three data-dependent phases of a tick
//!
//! P2G must finish before the grid update, which must finish before G2P.
//! [`crate::core::Simulator::step`] runs them in that order.

pub mod g2p;
pub mod grid_update;
pub mod p2g;

pub use g2p::grid_to_particle;
pub use grid_update::grid_update;
pub use p2g::particle_to_grid;
