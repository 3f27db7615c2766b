use crate::math::{IVector, Real, Vector, sub, to_ivector, to_vector};

use super::grid::{KERNEL_SIZE, NEIGHBOR_COUNT};

/// Quadratic B-spline weights for a per-axis offset `d` in `[-0.5, 0.5)`.
///
/// The three weights always sum to one, which is what keeps P2G mass and
/// momentum conserving.
#[inline(always)]
pub fn bspline_weights(d: Real) -> [Real; KERNEL_SIZE] {
    [
        0.5 * (0.5 - d) * (0.5 - d),
        0.75 - d * d,
        0.5 * (0.5 + d) * (0.5 + d),
    ]
}

/// Base cell and stencil weights for one particle.
///
/// P2G and G2P both build this from the particle's pre-tick position; nothing
/// is cached between the two phases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interpolation {
    /// Cell containing the particle. The stencil spans `base - 1 ..= base + 1`.
    pub base: IVector,
    /// Offset from the centre of `base`, per axis.
    pub offset: Vector,
    /// `weights[g]` holds the x and y weight for stencil column/row `g`.
    pub weights: [Vector; KERNEL_SIZE],
}

impl Interpolation {
    #[inline(always)]
    pub fn for_position(position: Vector) -> Self {
        let base = to_ivector(position);
        let offset = sub(position, to_vector(base)) - 0.5;

        let wx = bspline_weights(offset.x);
        let wy = bspline_weights(offset.y);

        Self {
            base,
            offset,
            weights: [
                Vector::new(wx[0], wy[0]),
                Vector::new(wx[1], wy[1]),
                Vector::new(wx[2], wy[2]),
            ],
        }
    }

    #[inline(always)]
    pub fn weight(&self, gx: usize, gy: usize) -> Real {
        self.weights[gx].x * self.weights[gy].y
    }

    /// The 9 `(cell, weight)` pairs, `gx` outer and `gy` inner.
    #[inline(always)]
    pub fn iter_neighbors(&self) -> impl Iterator<Item = (IVector, Real)> + '_ {
        (0..NEIGHBOR_COUNT).map(move |idx| {
            let gx = idx / KERNEL_SIZE;
            let gy = idx % KERNEL_SIZE;
            let cell = self.base + IVector::new(gx as i32 - 1, gy as i32 - 1);
            (cell, self.weight(gx, gy))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn weights_partition_unity(d in -0.5f32..0.5) {
            let w = bspline_weights(d);
            prop_assert!((w.iter().sum::<Real>() - 1.0).abs() < 1e-6);
            prop_assert!(w.iter().all(|&x| x >= 0.0));
        }

        #[test]
        fn stencil_weights_sum_to_one(x in 1.0f32..510.0, y in 1.0f32..510.0) {
            let interp = Interpolation::for_position(Vector::new(x, y));
            let total: Real = interp.iter_neighbors().map(|(_, w)| w).sum();
            prop_assert!((total - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn cell_corner_splits_between_two_cells() {
        let interp = Interpolation::for_position(Vector::new(256.0, 256.0));
        assert_eq!(interp.base, IVector::new(256, 256));
        assert_eq!(interp.offset, Vector::splat(-0.5));
        assert_eq!(interp.weights[0], Vector::splat(0.5));
        assert_eq!(interp.weights[1], Vector::splat(0.5));
        assert_eq!(interp.weights[2], Vector::splat(0.0));
    }

    #[test]
    fn cell_centre_weights() {
        let w = bspline_weights(0.0);
        assert_eq!(w, [0.125, 0.75, 0.125]);
    }

    #[test]
    fn neighbors_cover_three_by_three_block() {
        let interp = Interpolation::for_position(Vector::new(10.3, 20.7));
        let cells: Vec<IVector> = interp.iter_neighbors().map(|(c, _)| c).collect();
        assert_eq!(cells.len(), NEIGHBOR_COUNT);
        assert_eq!(cells[0], IVector::new(9, 19));
        assert_eq!(cells[1], IVector::new(9, 20));
        assert_eq!(cells[8], IVector::new(11, 21));
    }
}
