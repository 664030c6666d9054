//! Accelerated [`Vector2Int`] operations on the lower two lanes of a SIMD
//! register.

use super::Vector2Int;
use crate::{
    simd::{Accelerated, SimdBackend},
    vector::Vector2,
};

type I32x4 = <Accelerated as SimdBackend>::I32x4;

#[inline]
fn load(vector: Vector2Int) -> I32x4 {
    Accelerated::load2_i32(vector.as_array())
}

#[inline]
fn store(v: I32x4) -> Vector2Int {
    Vector2Int::from(Accelerated::store2_i32(v))
}

#[inline]
pub fn component_min(a: Vector2Int, b: Vector2Int) -> Vector2Int {
    store(Accelerated::min_i32(load(a), load(b)))
}

#[inline]
pub fn component_max(a: Vector2Int, b: Vector2Int) -> Vector2Int {
    store(Accelerated::max_i32(load(a), load(b)))
}

#[inline]
pub fn component_clamp(vector: Vector2Int, min: Vector2Int, max: Vector2Int) -> Vector2Int {
    store(Accelerated::max_i32(
        Accelerated::min_i32(load(vector), load(max)),
        load(min),
    ))
}

#[inline]
pub fn ceil(vector: Vector2) -> Vector2Int {
    store(Accelerated::ceil_to_i32(Accelerated::load2(vector.as_array())))
}

#[inline]
pub fn floor(vector: Vector2) -> Vector2Int {
    store(Accelerated::floor_to_i32(Accelerated::load2(vector.as_array())))
}

/// Rounds each component to the nearest integer, with ties to even.
#[inline]
pub fn round(vector: Vector2) -> Vector2Int {
    store(Accelerated::round_to_i32(Accelerated::load2(vector.as_array())))
}

#[inline]
pub fn magnitude(vector: Vector2Int) -> f32 {
    Accelerated::scalar_sqrt(magnitude_squared(vector) as f32)
}

#[inline]
pub fn magnitude_squared(vector: Vector2Int) -> i32 {
    let v = load(vector);
    Accelerated::first_i32(Accelerated::horizontal_add2_i32(Accelerated::mul_i32(v, v)))
}

#[inline]
pub fn add(a: Vector2Int, b: Vector2Int) -> Vector2Int {
    store(Accelerated::add_i32(load(a), load(b)))
}

#[inline]
pub fn subtract(a: Vector2Int, b: Vector2Int) -> Vector2Int {
    store(Accelerated::sub_i32(load(a), load(b)))
}

#[inline]
pub fn negate(vector: Vector2Int) -> Vector2Int {
    store(Accelerated::negate_i32(load(vector)))
}

#[inline]
pub fn scale(vector: Vector2Int, factor: i32) -> Vector2Int {
    store(Accelerated::mul_i32(load(vector), Accelerated::splat_i32(factor)))
}

#[inline]
pub fn multiply(a: Vector2Int, b: Vector2Int) -> Vector2Int {
    store(Accelerated::mul_i32(load(a), load(b)))
}

#[inline]
pub fn distance(a: Vector2Int, b: Vector2Int) -> f32 {
    Accelerated::scalar_sqrt(distance_squared(a, b) as f32)
}

#[inline]
pub fn distance_squared(a: Vector2Int, b: Vector2Int) -> i32 {
    let delta = Accelerated::sub_i32(load(a), load(b));
    Accelerated::first_i32(Accelerated::horizontal_add2_i32(Accelerated::mul_i32(
        delta, delta,
    )))
}

#[inline]
pub fn to_float(vector: Vector2Int) -> Vector2 {
    Vector2::from(Accelerated::store2(Accelerated::convert_to_f32(load(vector))))
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
