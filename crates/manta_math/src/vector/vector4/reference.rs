//! Reference [`Vector4`] operations using plain arithmetic.

use super::Vector4;
use crate::{scalar::reference as scalar, vector::SMALLEST_POSITIVE_SUBNORMAL};

#[inline]
fn map(vector: Vector4, f: impl Fn(f32) -> f32) -> Vector4 {
    Vector4::new(f(vector.x), f(vector.y), f(vector.z), f(vector.w))
}

#[inline]
fn zip(a: Vector4, b: Vector4, f: impl Fn(f32, f32) -> f32) -> Vector4 {
    Vector4::new(f(a.x, b.x), f(a.y, b.y), f(a.z, b.z), f(a.w, b.w))
}

#[inline]
pub fn component_min(a: Vector4, b: Vector4) -> Vector4 {
    zip(a, b, scalar::min)
}

#[inline]
pub fn component_max(a: Vector4, b: Vector4) -> Vector4 {
    zip(a, b, scalar::max)
}

#[inline]
pub fn component_clamp(vector: Vector4, min: Vector4, max: Vector4) -> Vector4 {
    component_max(component_min(vector, max), min)
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
    scalar::sqrt(magnitude_squared(vector))
}

#[inline]
pub fn magnitude_fast(vector: Vector4) -> f32 {
    let length_squared = magnitude_squared(vector);
    length_squared * scalar::inv_sqrt_fast(length_squared)
}

#[inline]
pub fn magnitude_squared(vector: Vector4) -> f32 {
    dot(vector, vector)
}

#[inline]
pub fn normalize(vector: Vector4) -> Vector4 {
    divide(vector, magnitude(vector))
}

#[inline]
pub fn normalize_fast(vector: Vector4) -> Vector4 {
    multiply(vector, scalar::inv_sqrt_fast(magnitude_squared(vector)))
}

#[inline]
pub fn add(a: Vector4, b: Vector4) -> Vector4 {
    zip(a, b, |a, b| a + b)
}

#[inline]
pub fn subtract(a: Vector4, b: Vector4) -> Vector4 {
    zip(a, b, |a, b| a - b)
}

#[inline]
pub fn negate(vector: Vector4) -> Vector4 {
    map(vector, |x| -x)
}

#[inline]
pub fn multiply(vector: Vector4, scale: f32) -> Vector4 {
    map(vector, |x| x * scale)
}

#[inline]
pub fn component_multiply(a: Vector4, b: Vector4) -> Vector4 {
    zip(a, b, |a, b| a * b)
}

#[inline]
pub fn divide(vector: Vector4, divisor: f32) -> Vector4 {
    map(vector, |x| x / divisor)
}

#[inline]
pub fn component_divide(a: Vector4, b: Vector4) -> Vector4 {
    zip(a, b, |a, b| a / b)
}

/// Sums the pairwise products as `(x + y) + (z + w)`.
#[inline]
pub fn dot(a: Vector4, b: Vector4) -> f32 {
    (a.x * b.x + a.y * b.y) + (a.z * b.z + a.w * b.w)
}

/// Projects the vector onto `normal`. A normal with a squared length below
/// the smallest positive subnormal gives the zero vector.
#[inline]
pub fn project(vector: Vector4, normal: Vector4) -> Vector4 {
    let normal_length_squared = magnitude_squared(normal);
    if normal_length_squared < SMALLEST_POSITIVE_SUBNORMAL {
        Vector4::ZERO
    } else {
        multiply(normal, dot(vector, normal) / normal_length_squared)
    }
}

#[inline]
pub fn distance(a: Vector4, b: Vector4) -> f32 {
    magnitude(subtract(a, b))
}

#[inline]
pub fn distance_squared(a: Vector4, b: Vector4) -> f32 {
    magnitude_squared(subtract(a, b))
}

#[inline]
pub fn lerp(a: Vector4, b: Vector4, t: f32) -> Vector4 {
    zip(a, b, |a, b| t * (b - a) + a)
}

#[inline]
pub fn lerp_clamped(a: Vector4, b: Vector4, t: f32) -> Vector4 {
    lerp(a, b, scalar::clamp01(t))
}

/// Moves `a` towards `b` by a distance of at most `max_delta`.
#[inline]
pub fn move_towards(a: Vector4, b: Vector4, max_delta: f32) -> Vector4 {
    let delta = subtract(b, a);
    if magnitude_squared(delta) <= max_delta * max_delta {
        b
    } else {
        add(a, multiply(normalize(delta), max_delta))
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
