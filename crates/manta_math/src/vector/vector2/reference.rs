//! Reference [`Vector2`] operations using plain arithmetic.

pub use super::{
    barycentric, barycentric_into, catmull_rom, catmull_rom_into, hermite, hermite_into,
    perpendicular_left, perpendicular_left_into, perpendicular_right, perpendicular_right_into,
};

use super::Vector2;
use crate::{scalar::reference as scalar, vector::ANGLE_DENOMINATOR_THRESHOLD};

#[inline]
pub fn component_min(a: Vector2, b: Vector2) -> Vector2 {
    Vector2::new(scalar::min(a.x, b.x), scalar::min(a.y, b.y))
}

#[inline]
pub fn component_max(a: Vector2, b: Vector2) -> Vector2 {
    Vector2::new(scalar::max(a.x, b.x), scalar::max(a.y, b.y))
}

#[inline]
pub fn component_clamp(vector: Vector2, min: Vector2, max: Vector2) -> Vector2 {
    Vector2::new(
        scalar::clamp(vector.x, min.x, max.x),
        scalar::clamp(vector.y, min.y, max.y),
    )
}

/// Returns the vector with the smaller magnitude, or `right` if the
/// magnitudes are equal.
#[inline]
pub fn min(left: Vector2, right: Vector2) -> Vector2 {
    if magnitude_squared(left) < magnitude_squared(right) {
        left
    } else {
        right
    }
}

/// Returns the vector with the larger magnitude, or `right` if the
/// magnitudes are equal.
#[inline]
pub fn max(left: Vector2, right: Vector2) -> Vector2 {
    if magnitude_squared(left) > magnitude_squared(right) {
        left
    } else {
        right
    }
}

/// Scales the vector down to `max_length` if it is longer.
#[inline]
pub fn magnitude_clamp(vector: Vector2, max_length: f32) -> Vector2 {
    if magnitude_squared(vector) > max_length * max_length {
        multiply(normalize(vector), max_length)
    } else {
        vector
    }
}

#[inline]
pub fn magnitude(vector: Vector2) -> f32 {
    scalar::sqrt(magnitude_squared(vector))
}

#[inline]
pub fn magnitude_fast(vector: Vector2) -> f32 {
    let length_squared = magnitude_squared(vector);
    length_squared * scalar::inv_sqrt_fast(length_squared)
}

#[inline]
pub fn magnitude_squared(vector: Vector2) -> f32 {
    dot(vector, vector)
}

#[inline]
pub fn normalize(vector: Vector2) -> Vector2 {
    divide(vector, magnitude(vector))
}

#[inline]
pub fn normalize_fast(vector: Vector2) -> Vector2 {
    multiply(vector, scalar::inv_sqrt_fast(magnitude_squared(vector)))
}

#[inline]
pub fn add(a: Vector2, b: Vector2) -> Vector2 {
    Vector2::new(a.x + b.x, a.y + b.y)
}

#[inline]
pub fn subtract(a: Vector2, b: Vector2) -> Vector2 {
    Vector2::new(a.x - b.x, a.y - b.y)
}

#[inline]
pub fn negate(vector: Vector2) -> Vector2 {
    Vector2::new(-vector.x, -vector.y)
}

#[inline]
pub fn multiply(vector: Vector2, scale: f32) -> Vector2 {
    Vector2::new(vector.x * scale, vector.y * scale)
}

#[inline]
pub fn component_multiply(a: Vector2, b: Vector2) -> Vector2 {
    Vector2::new(a.x * b.x, a.y * b.y)
}

#[inline]
pub fn divide(vector: Vector2, divisor: f32) -> Vector2 {
    Vector2::new(vector.x / divisor, vector.y / divisor)
}

#[inline]
pub fn component_divide(a: Vector2, b: Vector2) -> Vector2 {
    Vector2::new(a.x / b.x, a.y / b.y)
}

#[inline]
pub fn dot(a: Vector2, b: Vector2) -> f32 {
    a.x * b.x + a.y * b.y
}

/// Reflects the vector off the plane with the given normal.
#[inline]
pub fn reflect(vector: Vector2, normal: Vector2) -> Vector2 {
    subtract(vector, multiply(normal, 2.0 * dot(vector, normal)))
}

#[inline]
pub fn distance(a: Vector2, b: Vector2) -> f32 {
    scalar::sqrt(distance_squared(a, b))
}

#[inline]
pub fn distance_squared(a: Vector2, b: Vector2) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Computes the unsigned angle between the vectors in radians, or zero if
/// either is too short.
#[inline]
pub fn angle(from: Vector2, to: Vector2) -> f32 {
    let denominator = scalar::sqrt(magnitude_squared(from) * magnitude_squared(to));
    if denominator < ANGLE_DENOMINATOR_THRESHOLD {
        0.0
    } else {
        scalar::clamp(dot(from, to) / denominator, -1.0, 1.0).acos()
    }
}

/// Computes the angle between the vectors multiplied by the sign of
/// `from.x * to.y - from.x * to.y`.
///
/// The sign factor is zero for all finite input, so this gives zero.
#[inline]
pub fn signed_angle(from: Vector2, to: Vector2) -> f32 {
    scalar::sign(from.x * to.y - from.x * to.y) * angle(from, to)
}

#[inline]
pub fn lerp(a: Vector2, b: Vector2, t: f32) -> Vector2 {
    Vector2::new(t * (b.x - a.x) + a.x, t * (b.y - a.y) + a.y)
}

#[inline]
pub fn lerp_clamped(a: Vector2, b: Vector2, t: f32) -> Vector2 {
    lerp(a, b, scalar::clamp01(t))
}

/// Moves `a` towards `b` by a distance of at most `max_delta`.
#[inline]
pub fn move_towards(a: Vector2, b: Vector2, max_delta: f32) -> Vector2 {
    let delta = subtract(b, a);
    if magnitude_squared(delta) <= max_delta * max_delta {
        b
    } else {
        add(a, multiply(normalize(delta), max_delta))
    }
}

/// Applies [`smooth_step`](scalar::smooth_step) to each component pair.
#[inline]
pub fn smooth_step(a: Vector2, b: Vector2, t: f32) -> Vector2 {
    Vector2::new(
        scalar::smooth_step(a.x, b.x, t),
        scalar::smooth_step(a.y, b.y, t),
    )
}

define_into_variants! {
    component_min => component_min_into(a: Vector2, b: Vector2) -> Vector2;
    component_max => component_max_into(a: Vector2, b: Vector2) -> Vector2;
    component_clamp => component_clamp_into(vector: Vector2, min: Vector2, max: Vector2) -> Vector2;
    min => min_into(left: Vector2, right: Vector2) -> Vector2;
    max => max_into(left: Vector2, right: Vector2) -> Vector2;
    magnitude_clamp => magnitude_clamp_into(vector: Vector2; max_length: f32) -> Vector2;
    normalize => normalize_into(vector: Vector2) -> Vector2;
    normalize_fast => normalize_fast_into(vector: Vector2) -> Vector2;
    add => add_into(a: Vector2, b: Vector2) -> Vector2;
    subtract => subtract_into(a: Vector2, b: Vector2) -> Vector2;
    negate => negate_into(vector: Vector2) -> Vector2;
    multiply => multiply_into(vector: Vector2; scale: f32) -> Vector2;
    component_multiply => component_multiply_into(a: Vector2, b: Vector2) -> Vector2;
    divide => divide_into(vector: Vector2; divisor: f32) -> Vector2;
    component_divide => component_divide_into(a: Vector2, b: Vector2) -> Vector2;
    reflect => reflect_into(vector: Vector2, normal: Vector2) -> Vector2;
    lerp => lerp_into(a: Vector2, b: Vector2; t: f32) -> Vector2;
    lerp_clamped => lerp_clamped_into(a: Vector2, b: Vector2; t: f32) -> Vector2;
    move_towards => move_towards_into(a: Vector2, b: Vector2; max_delta: f32) -> Vector2;
    smooth_step => smooth_step_into(a: Vector2, b: Vector2; t: f32) -> Vector2;
}
