//! Accelerated [`Vector4Int`] operations on full 128-bit SIMD registers.
//!
//! Integer lane arithmetic wraps on overflow.

use super::Vector4Int;
use crate::{
    simd::{Accelerated, SimdBackend},
    vector::Vector4,
};

type I32x4 = <Accelerated as SimdBackend>::I32x4;

#[inline]
fn load(vector: Vector4Int) -> I32x4 {
    Accelerated::load4_i32(vector.as_array())
}

#[inline]
fn store(v: I32x4) -> Vector4Int {
    Vector4Int::from(Accelerated::store4_i32(v))
}

#[inline]
fn load_float(vector: Vector4) -> <Accelerated as SimdBackend>::F32x4 {
    Accelerated::load4(vector.as_array())
}

#[inline]
fn lane_magnitude_squared(v: I32x4) -> i32 {
    Accelerated::first_i32(Accelerated::horizontal_add4_i32(Accelerated::mul_i32(v, v)))
}

#[inline]
pub fn component_min(a: Vector4Int, b: Vector4Int) -> Vector4Int {
    store(Accelerated::min_i32(load(a), load(b)))
}

#[inline]
pub fn component_max(a: Vector4Int, b: Vector4Int) -> Vector4Int {
    store(Accelerated::max_i32(load(a), load(b)))
}

#[inline]
pub fn component_clamp(vector: Vector4Int, min: Vector4Int, max: Vector4Int) -> Vector4Int {
    store(Accelerated::max_i32(
        Accelerated::min_i32(load(vector), load(max)),
        load(min),
    ))
}

#[inline]
pub fn ceil(vector: Vector4) -> Vector4Int {
    store(Accelerated::ceil_to_i32(load_float(vector)))
}

#[inline]
pub fn floor(vector: Vector4) -> Vector4Int {
    store(Accelerated::floor_to_i32(load_float(vector)))
}

/// Rounds each component to the nearest integer, with ties to even.
#[inline]
pub fn round(vector: Vector4) -> Vector4Int {
    store(Accelerated::round_to_i32(load_float(vector)))
}

#[inline]
pub fn magnitude(vector: Vector4Int) -> f32 {
    Accelerated::scalar_sqrt(magnitude_squared(vector) as f32)
}

#[inline]
pub fn magnitude_squared(vector: Vector4Int) -> i32 {
    lane_magnitude_squared(load(vector))
}

#[inline]
pub fn add(a: Vector4Int, b: Vector4Int) -> Vector4Int {
    store(Accelerated::add_i32(load(a), load(b)))
}

#[inline]
pub fn subtract(a: Vector4Int, b: Vector4Int) -> Vector4Int {
    store(Accelerated::sub_i32(load(a), load(b)))
}

#[inline]
pub fn negate(vector: Vector4Int) -> Vector4Int {
    store(Accelerated::negate_i32(load(vector)))
}

#[inline]
pub fn scale(vector: Vector4Int, factor: i32) -> Vector4Int {
    store(Accelerated::mul_i32(load(vector), Accelerated::splat_i32(factor)))
}

#[inline]
pub fn multiply(a: Vector4Int, b: Vector4Int) -> Vector4Int {
    store(Accelerated::mul_i32(load(a), load(b)))
}

#[inline]
pub fn distance(a: Vector4Int, b: Vector4Int) -> f32 {
    Accelerated::scalar_sqrt(distance_squared(a, b) as f32)
}

#[inline]
pub fn distance_squared(a: Vector4Int, b: Vector4Int) -> i32 {
    lane_magnitude_squared(Accelerated::sub_i32(load(a), load(b)))
}

#[inline]
pub fn to_float(vector: Vector4Int) -> Vector4 {
    Vector4::from(Accelerated::store4(Accelerated::convert_to_f32(load(vector))))
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
