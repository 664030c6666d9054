//! Accelerated [`Vector2`] operations on the lower two lanes of a SIMD
//! register.

pub use super::{
    barycentric, barycentric_into, catmull_rom, catmull_rom_into, hermite, hermite_into,
    perpendicular_left, perpendicular_left_into, perpendicular_right, perpendicular_right_into,
};

use super::Vector2;
use crate::{
    scalar::accelerated as scalar,
    simd::{Accelerated, SimdBackend},
    vector::ANGLE_DENOMINATOR_THRESHOLD,
};

type F32x4 = <Accelerated as SimdBackend>::F32x4;

#[inline]
fn load(vector: Vector2) -> F32x4 {
    Accelerated::load2(vector.as_array())
}

#[inline]
fn store(v: F32x4) -> Vector2 {
    Vector2::from(Accelerated::store2(v))
}

/// Squared length broadcast to both lanes.
#[inline]
fn lane_magnitude_squared(v: F32x4) -> F32x4 {
    Accelerated::horizontal_add2(Accelerated::mul(v, v))
}

#[inline]
pub fn component_min(a: Vector2, b: Vector2) -> Vector2 {
    store(Accelerated::min(load(a), load(b)))
}

#[inline]
pub fn component_max(a: Vector2, b: Vector2) -> Vector2 {
    store(Accelerated::max(load(a), load(b)))
}

#[inline]
pub fn component_clamp(vector: Vector2, min: Vector2, max: Vector2) -> Vector2 {
    store(Accelerated::max(
        Accelerated::min(load(vector), load(max)),
        load(min),
    ))
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
    Accelerated::scalar_sqrt(magnitude_squared(vector))
}

#[inline]
pub fn magnitude_fast(vector: Vector2) -> f32 {
    let length_squared = magnitude_squared(vector);
    length_squared * Accelerated::scalar_rsqrt(length_squared)
}

#[inline]
pub fn magnitude_squared(vector: Vector2) -> f32 {
    Accelerated::first(lane_magnitude_squared(load(vector)))
}

#[inline]
pub fn normalize(vector: Vector2) -> Vector2 {
    let v = load(vector);
    store(Accelerated::div(
        v,
        Accelerated::sqrt(lane_magnitude_squared(v)),
    ))
}

#[inline]
pub fn normalize_fast(vector: Vector2) -> Vector2 {
    let v = load(vector);
    store(Accelerated::mul(
        v,
        Accelerated::rsqrt(lane_magnitude_squared(v)),
    ))
}

#[inline]
pub fn add(a: Vector2, b: Vector2) -> Vector2 {
    store(Accelerated::add(load(a), load(b)))
}

#[inline]
pub fn subtract(a: Vector2, b: Vector2) -> Vector2 {
    store(Accelerated::sub(load(a), load(b)))
}

#[inline]
pub fn negate(vector: Vector2) -> Vector2 {
    store(Accelerated::negate(load(vector)))
}

#[inline]
pub fn multiply(vector: Vector2, scale: f32) -> Vector2 {
    store(Accelerated::mul(load(vector), Accelerated::splat(scale)))
}

#[inline]
pub fn component_multiply(a: Vector2, b: Vector2) -> Vector2 {
    store(Accelerated::mul(load(a), load(b)))
}

#[inline]
pub fn divide(vector: Vector2, divisor: f32) -> Vector2 {
    store(Accelerated::div(load(vector), Accelerated::splat(divisor)))
}

#[inline]
pub fn component_divide(a: Vector2, b: Vector2) -> Vector2 {
    store(Accelerated::div(load(a), load(b)))
}

#[inline]
pub fn dot(a: Vector2, b: Vector2) -> f32 {
    Accelerated::first(Accelerated::horizontal_add2(Accelerated::mul(
        load(a),
        load(b),
    )))
}

/// Reflects the vector off the plane with the given normal.
#[inline]
pub fn reflect(vector: Vector2, normal: Vector2) -> Vector2 {
    let v = load(vector);
    let n = load(normal);
    let two_dot = Accelerated::splat(2.0 * dot(vector, normal));
    store(Accelerated::sub(v, Accelerated::mul(n, two_dot)))
}

#[inline]
pub fn distance(a: Vector2, b: Vector2) -> f32 {
    Accelerated::scalar_sqrt(distance_squared(a, b))
}

#[inline]
pub fn distance_squared(a: Vector2, b: Vector2) -> f32 {
    Accelerated::first(lane_magnitude_squared(Accelerated::sub(load(a), load(b))))
}

/// Computes the unsigned angle between the vectors in radians, or zero if
/// either is too short.
#[inline]
pub fn angle(from: Vector2, to: Vector2) -> f32 {
    let denominator = Accelerated::scalar_sqrt(magnitude_squared(from) * magnitude_squared(to));
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
    scalar::sign(from.x() * to.y() - from.x() * to.y()) * angle(from, to)
}

#[inline]
pub fn lerp(a: Vector2, b: Vector2, t: f32) -> Vector2 {
    let a = load(a);
    let delta = Accelerated::sub(load(b), a);
    store(Accelerated::add(
        Accelerated::mul(Accelerated::splat(t), delta),
        a,
    ))
}

#[inline]
pub fn lerp_clamped(a: Vector2, b: Vector2, t: f32) -> Vector2 {
    lerp(a, b, scalar::clamp01(t))
}

/// Moves `a` towards `b` by a distance of at most `max_delta`.
#[inline]
pub fn move_towards(a: Vector2, b: Vector2, max_delta: f32) -> Vector2 {
    let start = load(a);
    let delta = Accelerated::sub(load(b), start);
    let length = Accelerated::sqrt(lane_magnitude_squared(delta));
    if Accelerated::first(length) <= max_delta {
        b
    } else {
        let step = Accelerated::mul(
            Accelerated::div(delta, length),
            Accelerated::splat(max_delta),
        );
        store(Accelerated::add(start, step))
    }
}

/// Applies [`smooth_step`](scalar::smooth_step) to each component pair.
#[inline]
pub fn smooth_step(a: Vector2, b: Vector2, t: f32) -> Vector2 {
    Vector2::new(
        scalar::smooth_step(a.x(), b.x(), t),
        scalar::smooth_step(a.y(), b.y(), t),
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
