use crate::core::{BoundaryHandling, Grid, apply_boundary_conditions};
use crate::math::{Real, Vector, scale};

/// Grid update stage (divides momentum by mass, applies gravity, clamps boundaries).
///
/// Cells without mass are skipped and keep the zero velocity left by the reset.
pub fn grid_update(
    grid: &mut Grid,
    dt: Real,
    gravity: Real,
    margin: usize,
    boundary: BoundaryHandling,
) {
    let resolution = grid.resolution();
    let gravity_step = scale(Vector::new(0.0, gravity), dt);

    for (coord, cell) in grid.iter_cells_mut() {
        if cell.mass > 0.0 {
            cell.velocity /= cell.mass;
            cell.velocity += gravity_step;
            apply_boundary_conditions(cell, coord, resolution, margin, boundary);
        }
    }
}
