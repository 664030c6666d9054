//! Reference [`Vector4Int`] operations using plain arithmetic.

use super::Vector4Int;
use crate::{scalar::reference as scalar, vector::Vector4};

#[inline]
fn zip(a: Vector4Int, b: Vector4Int, f: impl Fn(i32, i32) -> i32) -> Vector4Int {
    Vector4Int::new(f(a.x, b.x), f(a.y, b.y), f(a.z, b.z), f(a.w, b.w))
}

#[inline]
fn round_with(vector: Vector4, f: impl Fn(f32) -> i32) -> Vector4Int {
    Vector4Int::new(f(vector.x()), f(vector.y()), f(vector.z()), f(vector.w()))
}

#[inline]
pub fn component_min(a: Vector4Int, b: Vector4Int) -> Vector4Int {
    zip(a, b, scalar::min)
}

#[inline]
pub fn component_max(a: Vector4Int, b: Vector4Int) -> Vector4Int {
    zip(a, b, scalar::max)
}

#[inline]
pub fn component_clamp(vector: Vector4Int, min: Vector4Int, max: Vector4Int) -> Vector4Int {
    component_max(component_min(vector, max), min)
}

#[inline]
pub fn ceil(vector: Vector4) -> Vector4Int {
    round_with(vector, scalar::ceil_to_int)
}

#[inline]
pub fn floor(vector: Vector4) -> Vector4Int {
    round_with(vector, scalar::floor_to_int)
}

/// Rounds each component to the nearest integer, with ties to even.
#[inline]
pub fn round(vector: Vector4) -> Vector4Int {
    round_with(vector, scalar::round_to_int)
}

#[inline]
pub fn magnitude(vector: Vector4Int) -> f32 {
    scalar::sqrt(magnitude_squared(vector) as f32)
}

#[inline]
pub fn magnitude_squared(vector: Vector4Int) -> i32 {
    vector.x * vector.x + vector.y * vector.y + vector.z * vector.z + vector.w * vector.w
}

#[inline]
pub fn add(a: Vector4Int, b: Vector4Int) -> Vector4Int {
    zip(a, b, |a, b| a + b)
}

#[inline]
pub fn subtract(a: Vector4Int, b: Vector4Int) -> Vector4Int {
    zip(a, b, |a, b| a - b)
}

#[inline]
pub fn negate(vector: Vector4Int) -> Vector4Int {
    Vector4Int::new(-vector.x, -vector.y, -vector.z, -vector.w)
}

#[inline]
pub fn scale(vector: Vector4Int, factor: i32) -> Vector4Int {
    zip(vector, Vector4Int::same(factor), |a, b| a * b)
}

#[inline]
pub fn multiply(a: Vector4Int, b: Vector4Int) -> Vector4Int {
    zip(a, b, |a, b| a * b)
}

#[inline]
pub fn distance(a: Vector4Int, b: Vector4Int) -> f32 {
    magnitude(subtract(a, b))
}

#[inline]
pub fn distance_squared(a: Vector4Int, b: Vector4Int) -> i32 {
    magnitude_squared(subtract(a, b))
}

#[inline]
pub fn to_float(vector: Vector4Int) -> Vector4 {
    Vector4::new(
        vector.x as f32,
        vector.y as f32,
        vector.z as f32,
        vector.w as f32,
    )
}

define_into_variants! {
    component_min => component_min_into(a: Vector4Int, b: Vector4Int) -> Vector4Int;
    component_max => component_max_into(a: Vector4Int, b: Vector4Int) -> Vector4Int;
    component_clamp => component_clamp_into(vector: Vector4Int, min: Vector4Int, max: Vector4Int) -> Vector4Int;
    ceil => ceil_into(vector: Vector4) -> Vector4Int;
    floor => floor_into(vector: Vector4) -> Vector4Int;
    round => round_into(vector: Vector4) -> Vector4Int;
    add => add_into(a: Vector4Int, b: Vector4Int) -> Vector4Int;
    subtract => subtract_into(a: Vector4Int, b: Vector4Int) -> Vector4Int;
    negate => negate_into(vector: Vector4Int) -> Vector4Int;
    scale => scale_into(vector: Vector4Int; factor: i32) -> Vector4Int;
    multiply => multiply_into(a: Vector4Int, b: Vector4Int) -> Vector4Int;
    to_float => to_float_into(vector: Vector4Int) -> Vector4;
}
