//! Component-wise 2-D vector helpers.
//!
//! `Vector` and `IVector` are glam types re-exported by Bevy, so the usual
//! operators already work on them. The named helpers below exist so the
//! transfer code reads the same way the kernel math is written down.

use bevy::math::{IVec2, Vec2};

pub type Real = f32;

pub type Vector = Vec2;
/// Integer pair, only used as grid cell coordinates.
pub type IVector = IVec2;

#[inline(always)]
pub fn zero_vector() -> Vector {
    Vec2::ZERO
}

#[inline(always)]
pub fn splat(value: Real) -> Vector {
    Vec2::splat(value)
}

#[inline(always)]
pub fn add(a: Vector, b: Vector) -> Vector {
    a + b
}

#[inline(always)]
pub fn sub(a: Vector, b: Vector) -> Vector {
    a - b
}

#[inline(always)]
pub fn mul(a: Vector, b: Vector) -> Vector {
    a * b
}

/// Component-wise division. The caller guarantees both components of `b` are non-zero.
#[inline(always)]
pub fn div(a: Vector, b: Vector) -> Vector {
    debug_assert!(b.x != 0.0 && b.y != 0.0, "division by zero component: {b:?}");
    a / b
}

#[inline(always)]
pub fn pow(a: Vector, exponent: Real) -> Vector {
    a.powf(exponent)
}

#[inline(always)]
pub fn scale(a: Vector, s: Real) -> Vector {
    a * s
}

/// Clamp each component to the closed interval `[low, high]`.
#[inline(always)]
pub fn clamp(value: Vector, low: Vector, high: Vector) -> Vector {
    value.clamp(low, high)
}

/// Cell coordinate containing `v`, rounding toward negative infinity.
#[inline(always)]
pub fn to_ivector(v: Vector) -> IVector {
    v.floor().as_ivec2()
}

/// Truncating conversion. Matches `to_ivector` only for non-negative input.
#[inline(always)]
pub fn truncate_to_ivector(v: Vector) -> IVector {
    v.as_ivec2()
}

#[inline(always)]
pub fn to_vector(v: IVector) -> Vector {
    v.as_vec2()
}
