//! SIMD backends for the accelerated math paths.
//!
//! Every accelerated operation is written once against [`SimdBackend`] and
//! executed by the backend that [`Accelerated`] resolves to at build time. On
//! x86_64 this is [`Sse2`], which only uses instructions from the x86_64
//! baseline and hence needs no runtime feature detection. Everywhere else, or
//! when the `portable_simd` feature is enabled, the lane-by-lane [`Portable`]
//! backend is used instead.

mod portable;
#[cfg(target_arch = "x86_64")]
mod sse2;

pub use portable::Portable;
#[cfg(target_arch = "x86_64")]
pub use sse2::Sse2;

/// The backend used by the accelerated paths.
#[cfg(all(target_arch = "x86_64", not(feature = "portable_simd")))]
pub type Accelerated = Sse2;

/// The backend used by the accelerated paths.
#[cfg(any(not(target_arch = "x86_64"), feature = "portable_simd"))]
pub type Accelerated = Portable;

/// Name of the backend used by the accelerated paths.
pub const BACKEND_NAME: &str = <Accelerated as SimdBackend>::NAME;

/// Four-lane register operations used by the accelerated paths.
///
/// Two-component vectors are loaded into the two lowest lanes with the upper
/// lanes zeroed, and only the two lowest lanes are stored back. Lane-wise
/// float `min` and `max` follow the hardware convention of returning the
/// second operand unless the first compares strictly less (or greater), so
/// NaN operands propagate the same way on all backends. Integer lane
/// arithmetic wraps on overflow.
pub trait SimdBackend {
    /// Human readable name of the backend.
    const NAME: &'static str;

    /// Register holding four `f32` lanes.
    type F32x4: Copy;

    /// Register holding four `i32` lanes.
    type I32x4: Copy;

    /// Loads two floats into the lowest lanes and zeroes the rest.
    fn load2(values: &[f32; 2]) -> Self::F32x4;

    /// Loads four floats.
    fn load4(values: &[f32; 4]) -> Self::F32x4;

    /// Creates a register with the given value in every lane.
    fn splat(value: f32) -> Self::F32x4;

    /// Stores the two lowest lanes.
    fn store2(v: Self::F32x4) -> [f32; 2];

    /// Stores all four lanes.
    fn store4(v: Self::F32x4) -> [f32; 4];

    /// Extracts the lowest lane.
    fn first(v: Self::F32x4) -> f32;

    fn add(a: Self::F32x4, b: Self::F32x4) -> Self::F32x4;

    fn sub(a: Self::F32x4, b: Self::F32x4) -> Self::F32x4;

    fn mul(a: Self::F32x4, b: Self::F32x4) -> Self::F32x4;

    fn div(a: Self::F32x4, b: Self::F32x4) -> Self::F32x4;

    /// Lane-wise `if a < b { a } else { b }`.
    fn min(a: Self::F32x4, b: Self::F32x4) -> Self::F32x4;

    /// Lane-wise `if a > b { a } else { b }`.
    fn max(a: Self::F32x4, b: Self::F32x4) -> Self::F32x4;

    /// Flips the sign bit of every lane.
    fn negate(v: Self::F32x4) -> Self::F32x4;

    fn sqrt(v: Self::F32x4) -> Self::F32x4;

    /// Approximate reciprocal square root of every lane, with a relative
    /// error of at most 1.5 * 2^-12.
    fn rsqrt(v: Self::F32x4) -> Self::F32x4;

    /// Sum of the two lowest lanes, broadcast to every lane.
    fn horizontal_add2(v: Self::F32x4) -> Self::F32x4;

    /// Sum of all four lanes, computed as `(v0 + v1) + (v2 + v3)` and
    /// broadcast to every lane.
    fn horizontal_add4(v: Self::F32x4) -> Self::F32x4;

    /// Loads two integers into the lowest lanes and zeroes the rest.
    fn load2_i32(values: &[i32; 2]) -> Self::I32x4;

    fn load4_i32(values: &[i32; 4]) -> Self::I32x4;

    fn splat_i32(value: i32) -> Self::I32x4;

    fn store2_i32(v: Self::I32x4) -> [i32; 2];

    fn store4_i32(v: Self::I32x4) -> [i32; 4];

    fn first_i32(v: Self::I32x4) -> i32;

    fn add_i32(a: Self::I32x4, b: Self::I32x4) -> Self::I32x4;

    fn sub_i32(a: Self::I32x4, b: Self::I32x4) -> Self::I32x4;

    /// Lane-wise product, keeping the low 32 bits.
    fn mul_i32(a: Self::I32x4, b: Self::I32x4) -> Self::I32x4;

    fn min_i32(a: Self::I32x4, b: Self::I32x4) -> Self::I32x4;

    fn max_i32(a: Self::I32x4, b: Self::I32x4) -> Self::I32x4;

    fn negate_i32(v: Self::I32x4) -> Self::I32x4;

    /// Sum of the two lowest lanes, broadcast to every lane.
    fn horizontal_add2_i32(v: Self::I32x4) -> Self::I32x4;

    /// Sum of all four lanes, broadcast to every lane.
    fn horizontal_add4_i32(v: Self::I32x4) -> Self::I32x4;

    /// Converts every integer lane to the nearest float.
    fn convert_to_f32(v: Self::I32x4) -> Self::F32x4;

    /// Rounds every lane to the nearest integer, with ties to even.
    ///
    /// Lanes that are NaN or outside the `i32` range produce `i32::MIN`.
    fn round_to_i32(v: Self::F32x4) -> Self::I32x4;

    /// Rounds every lane towards negative infinity. Only defined for lanes
    /// within the `i32` range.
    fn floor_to_i32(v: Self::F32x4) -> Self::I32x4;

    /// Rounds every lane towards positive infinity. Only defined for lanes
    /// within the `i32` range.
    fn ceil_to_i32(v: Self::F32x4) -> Self::I32x4;

    /// Single-lane `if a < b { a } else { b }`.
    fn scalar_min(a: f32, b: f32) -> f32;

    /// Single-lane `if a > b { a } else { b }`.
    fn scalar_max(a: f32, b: f32) -> f32;

    fn scalar_sqrt(x: f32) -> f32;

    /// Single-lane approximate reciprocal square root, with a relative error
    /// of at most 1.5 * 2^-12.
    fn scalar_rsqrt(x: f32) -> f32;

    fn scalar_min_f64(a: f64, b: f64) -> f64;

    fn scalar_max_f64(a: f64, b: f64) -> f64;

    fn scalar_sqrt_f64(x: f64) -> f64;
}
