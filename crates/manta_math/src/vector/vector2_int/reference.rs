//! Reference [`Vector2Int`] operations using plain arithmetic.

use super::Vector2Int;
use crate::{scalar::reference as scalar, vector::Vector2};

#[inline]
pub fn component_min(a: Vector2Int, b: Vector2Int) -> Vector2Int {
    Vector2Int::new(scalar::min(a.x, b.x), scalar::min(a.y, b.y))
}

#[inline]
pub fn component_max(a: Vector2Int, b: Vector2Int) -> Vector2Int {
    Vector2Int::new(scalar::max(a.x, b.x), scalar::max(a.y, b.y))
}

#[inline]
pub fn component_clamp(vector: Vector2Int, min: Vector2Int, max: Vector2Int) -> Vector2Int {
    Vector2Int::new(
        scalar::clamp(vector.x, min.x, max.x),
        scalar::clamp(vector.y, min.y, max.y),
    )
}

#[inline]
pub fn ceil(vector: Vector2) -> Vector2Int {
    Vector2Int::new(scalar::ceil_to_int(vector.x()), scalar::ceil_to_int(vector.y()))
}

#[inline]
pub fn floor(vector: Vector2) -> Vector2Int {
    Vector2Int::new(
        scalar::floor_to_int(vector.x()),
        scalar::floor_to_int(vector.y()),
    )
}

/// Rounds each component to the nearest integer, with ties to even.
#[inline]
pub fn round(vector: Vector2) -> Vector2Int {
    Vector2Int::new(
        scalar::round_to_int(vector.x()),
        scalar::round_to_int(vector.y()),
    )
}

#[inline]
pub fn magnitude(vector: Vector2Int) -> f32 {
    scalar::sqrt(magnitude_squared(vector) as f32)
}

#[inline]
pub fn magnitude_squared(vector: Vector2Int) -> i32 {
    vector.x * vector.x + vector.y * vector.y
}

#[inline]
pub fn add(a: Vector2Int, b: Vector2Int) -> Vector2Int {
    Vector2Int::new(a.x + b.x, a.y + b.y)
}

#[inline]
pub fn subtract(a: Vector2Int, b: Vector2Int) -> Vector2Int {
    Vector2Int::new(a.x - b.x, a.y - b.y)
}

#[inline]
pub fn negate(vector: Vector2Int) -> Vector2Int {
    Vector2Int::new(-vector.x, -vector.y)
}

#[inline]
pub fn scale(vector: Vector2Int, factor: i32) -> Vector2Int {
    Vector2Int::new(vector.x * factor, vector.y * factor)
}

#[inline]
pub fn multiply(a: Vector2Int, b: Vector2Int) -> Vector2Int {
    Vector2Int::new(a.x * b.x, a.y * b.y)
}

#[inline]
pub fn distance(a: Vector2Int, b: Vector2Int) -> f32 {
    scalar::sqrt(distance_squared(a, b) as f32)
}

#[inline]
pub fn distance_squared(a: Vector2Int, b: Vector2Int) -> i32 {
    magnitude_squared(subtract(a, b))
}

#[inline]
pub fn to_float(vector: Vector2Int) -> Vector2 {
    Vector2::new(vector.x as f32, vector.y as f32)
}

define_into_variants! {
    component_min => component_min_into(a: Vector2Int, b: Vector2Int) -> Vector2Int;
    component_max => component_max_into(a: Vector2Int, b: Vector2Int) -> Vector2Int;
    component_clamp => component_clamp_into(vector: Vector2Int, min: Vector2Int, max: Vector2Int) -> Vector2Int;
    ceil => ceil_into(vector: Vector2) -> Vector2Int;
    floor => floor_into(vector: Vector2) -> Vector2Int;
    round => round_into(vector: Vector2) -> Vector2Int;
    add => add_into(a: Vector2Int, b: Vector2Int) -> Vector2Int;
    subtract => subtract_into(a: Vector2Int, b: Vector2Int) -> Vector2Int;
    negate => negate_into(vector: Vector2Int) -> Vector2Int;
    scale => scale_into(vector: Vector2Int; factor: i32) -> Vector2Int;
    multiply => multiply_into(a: Vector2Int, b: Vector2Int) -> Vector2Int;
    to_float => to_float_into(vector: Vector2Int) -> Vector2;
}
