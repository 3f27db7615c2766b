//! Background grid for the particle-in-cell transfer
//!
//! Dense N x N lattice, rebuilt from scratch every tick.

use crate::math::{IVector, Real, Vector, zero_vector};

/// Number of neighbors in 3x3 kernel
pub const NEIGHBOR_COUNT: usize = 9;
/// Stencil width per axis (quadratic B-spline)
pub const KERNEL_SIZE: usize = 3;

/// One grid node.
///
/// `velocity` is used as a momentum accumulator between P2G and the grid
/// update: P2G adds `weight * mass * velocity` into it, and the grid update
/// divides by `mass` to turn it into a real velocity. Only read it as a
/// velocity after the grid update has run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Cell {
    pub velocity: Vector,
    pub mass: Real,
}

impl Cell {
    #[inline(always)]
    pub fn zeroed() -> Self {
        Self {
            velocity: zero_vector(),
            mass: 0.0,
        }
    }

    #[inline(always)]
    pub fn zero(&mut self) {
        self.velocity = zero_vector();
        self.mass = 0.0;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::zeroed()
    }
}

#[derive(Clone, Debug)]
pub struct Grid {
    resolution: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(resolution: usize) -> Self {
        Self {
            resolution,
            cells: vec![Cell::zeroed(); resolution * resolution],
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Row-major linear index: `y * N + x`.
    ///
    /// Panics when `coord` is outside `[0, N-1]` on either axis. The position
    /// clamp in G2P keeps every particle's stencil inside the grid, so hitting
    /// this means that invariant was broken.
    #[inline(always)]
    fn index(&self, coord: IVector) -> usize {
        let n = self.resolution as i32;
        assert!(
            coord.x >= 0 && coord.x < n && coord.y >= 0 && coord.y < n,
            "cell {coord} outside {n}x{n} grid"
        );
        coord.y as usize * self.resolution + coord.x as usize
    }

    #[inline(always)]
    fn coord(&self, index: usize) -> IVector {
        IVector::new(
            (index % self.resolution) as i32,
            (index / self.resolution) as i32,
        )
    }

    /// Zero every cell's mass and velocity.
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.zero());
    }

    /// Add mass and momentum into a cell. See [`Cell`] for the momentum contract.
    #[inline(always)]
    pub fn accumulate(&mut self, coord: IVector, mass_delta: Real, momentum_delta: Vector) {
        let idx = self.index(coord);
        let cell = &mut self.cells[idx];
        cell.mass += mass_delta;
        cell.velocity += momentum_delta;
    }

    #[inline(always)]
    pub fn read(&self, coord: IVector) -> Cell {
        self.cells[self.index(coord)]
    }

    pub fn cell_mut(&mut self, coord: IVector) -> &mut Cell {
        let idx = self.index(coord);
        &mut self.cells[idx]
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (IVector, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (self.coord(idx), cell))
    }

    pub fn iter_cells_mut(&mut self) -> impl Iterator<Item = (IVector, &mut Cell)> {
        let resolution = self.resolution;
        self.cells.iter_mut().enumerate().map(move |(idx, cell)| {
            let coord = IVector::new((idx % resolution) as i32, (idx / resolution) as i32);
            (coord, cell)
        })
    }

    pub fn total_mass(&self) -> Real {
        self.cells.iter().map(|cell| cell.mass).sum()
    }

    /// Sum of the `velocity` field. Between P2G and the grid update this is
    /// the total momentum carried by the grid.
    pub fn total_momentum(&self) -> Vector {
        self.cells.iter().map(|cell| cell.velocity).sum()
    }

    pub fn active_cell_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.mass > 0.0).count()
    }
}

// Boundary handling modes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryHandling {
    /// Zero the velocity component normal to any edge within the margin
    #[default]
    Stick,
    /// No wall response; only the particle position clamp applies
    None,
}

/// Whether `index` lies within `margin` cells of either end of `[0, resolution)`.
#[inline(always)]
pub fn in_margin(index: i32, resolution: usize, margin: usize) -> bool {
    index < margin as i32 || index > resolution as i32 - 1 - margin as i32
}

#[inline(always)]
pub fn apply_boundary_conditions(
    cell: &mut Cell,
    coord: IVector,
    resolution: usize,
    margin: usize,
    boundary: BoundaryHandling,
) {
    match boundary {
        BoundaryHandling::Stick => {
            if in_margin(coord.x, resolution, margin) {
                cell.velocity.x = 0.0;
            }
            if in_margin(coord.y, resolution, margin) {
                cell.velocity.y = 0.0;
            }
        }
        BoundaryHandling::None => {}
    }
}
