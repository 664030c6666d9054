//! Accelerated [`Vector4`] operations on full 128-bit SIMD registers.

use super::Vector4;
use crate::{
    scalar::accelerated as scalar,
    simd::{Accelerated, SimdBackend},
    vector::SMALLEST_POSITIVE_SUBNORMAL,
};

type F32x4 = <Accelerated as SimdBackend>::F32x4;

#[inline]
fn load(vector: Vector4) -> F32x4 {
    Accelerated::load4(vector.as_array())
}

#[inline]
fn store(v: F32x4) -> Vector4 {
    Vector4::from(Accelerated::store4(v))
}

/// Dot product broadcast to every lane.
#[inline]
fn lane_dot(a: F32x4, b: F32x4) -> F32x4 {
    Accelerated::horizontal_add4(Accelerated::mul(a, b))
}

#[inline]
pub fn component_min(a: Vector4, b: Vector4) -> Vector4 {
    store(Accelerated::min(load(a), load(b)))
}

#[inline]
pub fn component_max(a: Vector4, b: Vector4) -> Vector4 {
    store(Accelerated::max(load(a), load(b)))
}

#[inline]
pub fn component_clamp(vector: Vector4, min: Vector4, max: Vector4) -> Vector4 {
    store(Accelerated::max(
        Accelerated::min(load(vector), load(max)),
        load(min),
    ))
}

/// Returns the vector with the smaller magnitude, or `right` if the
/// magnitudes are equal.
#[inline]
pub fn min(left: Vector4, right: Vector4) -> Vector4 {
    if magnitude_squared(left) < magnitude_squared(right) {
        left
    } else {
        right
    }
}

/// Returns the vector with the larger magnitude, or `left` if the
/// magnitudes are equal.
#[inline]
pub fn max(left: Vector4, right: Vector4) -> Vector4 {
    if magnitude_squared(left) >= magnitude_squared(right) {
        left
    } else {
        right
    }
}

/// Scales the vector down to `max_length` if it is longer.
#[inline]
pub fn magnitude_clamp(vector: Vector4, max_length: f32) -> Vector4 {
    if magnitude_squared(vector) > max_length * max_length {
        multiply(normalize(vector), max_length)
    } else {
        vector
    }
}

#[inline]
pub fn magnitude(vector: Vector4) -> f32 {
    Accelerated::scalar_sqrt(magnitude_squared(vector))
}

#[inline]
pub fn magnitude_fast(vector: Vector4) -> f32 {
    let length_squared = magnitude_squared(vector);
    length_squared * Accelerated::scalar_rsqrt(length_squared)
}

#[inline]
pub fn magnitude_squared(vector: Vector4) -> f32 {
    let v = load(vector);
    Accelerated::first(lane_dot(v, v))
}

#[inline]
pub fn normalize(vector: Vector4) -> Vector4 {
    let v = load(vector);
    store(Accelerated::div(v, Accelerated::sqrt(lane_dot(v, v))))
}

#[inline]
pub fn normalize_fast(vector: Vector4) -> Vector4 {
    let v = load(vector);
    store(Accelerated::mul(v, Accelerated::rsqrt(lane_dot(v, v))))
}

#[inline]
pub fn add(a: Vector4, b: Vector4) -> Vector4 {
    store(Accelerated::add(load(a), load(b)))
}

#[inline]
pub fn subtract(a: Vector4, b: Vector4) -> Vector4 {
    store(Accelerated::sub(load(a), load(b)))
}

#[inline]
pub fn negate(vector: Vector4) -> Vector4 {
    store(Accelerated::negate(load(vector)))
}

#[inline]
pub fn multiply(vector: Vector4, scale: f32) -> Vector4 {
    store(Accelerated::mul(load(vector), Accelerated::splat(scale)))
}

#[inline]
pub fn component_multiply(a: Vector4, b: Vector4) -> Vector4 {
    store(Accelerated::mul(load(a), load(b)))
}

#[inline]
pub fn divide(vector: Vector4, divisor: f32) -> Vector4 {
    store(Accelerated::div(load(vector), Accelerated::splat(divisor)))
}

#[inline]
pub fn component_divide(a: Vector4, b: Vector4) -> Vector4 {
    store(Accelerated::div(load(a), load(b)))
}

#[inline]
pub fn dot(a: Vector4, b: Vector4) -> f32 {
    Accelerated::first(lane_dot(load(a), load(b)))
}

/// Projects the vector onto `normal`. A normal with a squared length below
/// the smallest positive subnormal gives the zero vector.
#[inline]
pub fn project(vector: Vector4, normal: Vector4) -> Vector4 {
    let n = load(normal);
    let normal_length_squared = lane_dot(n, n);
    if Accelerated::first(normal_length_squared) < SMALLEST_POSITIVE_SUBNORMAL {
        Vector4::ZERO
    } else {
        let scale = Accelerated::div(lane_dot(load(vector), n), normal_length_squared);
        store(Accelerated::mul(n, scale))
    }
}

#[inline]
pub fn distance(a: Vector4, b: Vector4) -> f32 {
    Accelerated::scalar_sqrt(distance_squared(a, b))
}

#[inline]
pub fn distance_squared(a: Vector4, b: Vector4) -> f32 {
    let delta = Accelerated::sub(load(a), load(b));
    Accelerated::first(lane_dot(delta, delta))
}

/// Interpolates as `t * b - (t * a - a)`.
#[inline]
pub fn lerp(a: Vector4, b: Vector4, t: f32) -> Vector4 {
    let a = load(a);
    let t = Accelerated::splat(t);
    store(Accelerated::sub(
        Accelerated::mul(t, load(b)),
        Accelerated::sub(Accelerated::mul(t, a), a),
    ))
}

#[inline]
pub fn lerp_clamped(a: Vector4, b: Vector4, t: f32) -> Vector4 {
    lerp(a, b, scalar::clamp01(t))
}

/// Moves `a` towards `b` by a distance of at most `max_delta`.
#[inline]
pub fn move_towards(a: Vector4, b: Vector4, max_delta: f32) -> Vector4 {
    let start = load(a);
    let delta = Accelerated::sub(load(b), start);
    let length = Accelerated::sqrt(lane_dot(delta, delta));
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

define_into_variants! {
    component_min => component_min_into(a: Vector4, b: Vector4) -> Vector4;
    component_max => component_max_into(a: Vector4, b: Vector4) -> Vector4;
    component_clamp => component_clamp_into(vector: Vector4, min: Vector4, max: Vector4) -> Vector4;
    min => min_into(left: Vector4, right: Vector4) -> Vector4;
    max => max_into(left: Vector4, right: Vector4) -> Vector4;
    magnitude_clamp => magnitude_clamp_into(vector: Vector4; max_length: f32) -> Vector4;
    normalize => normalize_into(vector: Vector4) -> Vector4;
    normalize_fast => normalize_fast_into(vector: Vector4) -> Vector4;
    add => add_into(a: Vector4, b: Vector4) -> Vector4;
    subtract => subtract_into(a: Vector4, b: Vector4) -> Vector4;
    negate => negate_into(vector: Vector4) -> Vector4;
    multiply => multiply_into(vector: Vector4; scale: f32) -> Vector4;
    component_multiply => component_multiply_into(a: Vector4, b: Vector4) -> Vector4;
    divide => divide_into(vector: Vector4; divisor: f32) -> Vector4;
    component_divide => component_divide_into(a: Vector4, b: Vector4) -> Vector4;
    project => project_into(vector: Vector4, normal: Vector4) -> Vector4;
    lerp => lerp_into(a: Vector4, b: Vector4; t: f32) -> Vector4;
    lerp_clamped => lerp_clamped_into(a: Vector4, b: Vector4; t: f32) -> Vector4;
    move_towards => move_towards_into(a: Vector4, b: Vector4; max_delta: f32) -> Vector4;
}
