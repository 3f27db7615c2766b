use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration-level failures.
///
/// A cell index outside the grid is not listed here: positions are clamped to
/// the one-cell margin after every tick, so an out-of-range index is a broken
/// invariant and the grid panics instead of returning an error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Inserting particles would exceed the fixed particle capacity.
    #[error("particle capacity exceeded: {requested} requested, capacity is {capacity}")]
    CapacityExceeded { capacity: usize, requested: usize },

    /// Invalid simulation or seeding parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
}
