//! Lane-by-lane backend that mirrors the semantics of the hardware backends.

use super::SimdBackend;

/// Backend operating on plain arrays, one lane at a time.
#[derive(Clone, Copy, Debug)]
pub struct Portable;

#[inline]
fn map<T: Copy, U>(v: [T; 4], f: impl Fn(T) -> U) -> [U; 4] {
    [f(v[0]), f(v[1]), f(v[2]), f(v[3])]
}

#[inline]
fn zip<T: Copy, U>(a: [T; 4], b: [T; 4], f: impl Fn(T, T) -> U) -> [U; 4] {
    [f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2]), f(a[3], b[3])]
}

#[inline]
fn lane_min(a: f32, b: f32) -> f32 {
    if a < b { a } else { b }
}

#[inline]
fn lane_max(a: f32, b: f32) -> f32 {
    if a > b { a } else { b }
}

/// Converts to an integer the way `cvtps2dq` does for an already rounded
/// value: NaN and out-of-range values become `i32::MIN`.
#[inline]
fn integer_indefinite(rounded: f32) -> i32 {
    if rounded >= -2_147_483_648.0 && rounded < 2_147_483_648.0 {
        rounded as i32
    } else {
        i32::MIN
    }
}

impl SimdBackend for Portable {
    const NAME: &'static str = "portable";

    type F32x4 = [f32; 4];
    type I32x4 = [i32; 4];

    #[inline]
    fn load2(values: &[f32; 2]) -> [f32; 4] {
        [values[0], values[1], 0.0, 0.0]
    }

    #[inline]
    fn load4(values: &[f32; 4]) -> [f32; 4] {
        *values
    }

    #[inline]
    fn splat(value: f32) -> [f32; 4] {
        [value; 4]
    }

    #[inline]
    fn store2(v: [f32; 4]) -> [f32; 2] {
        [v[0], v[1]]
    }

    #[inline]
    fn store4(v: [f32; 4]) -> [f32; 4] {
        v
    }

    #[inline]
    fn first(v: [f32; 4]) -> f32 {
        v[0]
    }

    #[inline]
    fn add(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        zip(a, b, |a, b| a + b)
    }

    #[inline]
    fn sub(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        zip(a, b, |a, b| a - b)
    }

    #[inline]
    fn mul(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        zip(a, b, |a, b| a * b)
    }

    #[inline]
    fn div(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        zip(a, b, |a, b| a / b)
    }

    #[inline]
    fn min(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        zip(a, b, lane_min)
    }

    #[inline]
    fn max(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        zip(a, b, lane_max)
    }

    #[inline]
    fn negate(v: [f32; 4]) -> [f32; 4] {
        map(v, |x| -x)
    }

    #[inline]
    fn sqrt(v: [f32; 4]) -> [f32; 4] {
        map(v, f32::sqrt)
    }

    #[inline]
    fn rsqrt(v: [f32; 4]) -> [f32; 4] {
        map(v, |x| 1.0 / x.sqrt())
    }

    #[inline]
    fn horizontal_add2(v: [f32; 4]) -> [f32; 4] {
        [v[0] + v[1]; 4]
    }

    #[inline]
    fn horizontal_add4(v: [f32; 4]) -> [f32; 4] {
        [(v[0] + v[1]) + (v[2] + v[3]); 4]
    }

    #[inline]
    fn load2_i32(values: &[i32; 2]) -> [i32; 4] {
        [values[0], values[1], 0, 0]
    }

    #[inline]
    fn load4_i32(values: &[i32; 4]) -> [i32; 4] {
        *values
    }

    #[inline]
    fn splat_i32(value: i32) -> [i32; 4] {
        [value; 4]
    }

    #[inline]
    fn store2_i32(v: [i32; 4]) -> [i32; 2] {
        [v[0], v[1]]
    }

    #[inline]
    fn store4_i32(v: [i32; 4]) -> [i32; 4] {
        v
    }

    #[inline]
    fn first_i32(v: [i32; 4]) -> i32 {
        v[0]
    }

    #[inline]
    fn add_i32(a: [i32; 4], b: [i32; 4]) -> [i32; 4] {
        zip(a, b, i32::wrapping_add)
    }

    #[inline]
    fn sub_i32(a: [i32; 4], b: [i32; 4]) -> [i32; 4] {
        zip(a, b, i32::wrapping_sub)
    }

    #[inline]
    fn mul_i32(a: [i32; 4], b: [i32; 4]) -> [i32; 4] {
        zip(a, b, i32::wrapping_mul)
    }

    #[inline]
    fn min_i32(a: [i32; 4], b: [i32; 4]) -> [i32; 4] {
        zip(a, b, i32::min)
    }

    #[inline]
    fn max_i32(a: [i32; 4], b: [i32; 4]) -> [i32; 4] {
        zip(a, b, i32::max)
    }

    #[inline]
    fn negate_i32(v: [i32; 4]) -> [i32; 4] {
        map(v, i32::wrapping_neg)
    }

    #[inline]
    fn horizontal_add2_i32(v: [i32; 4]) -> [i32; 4] {
        [v[0].wrapping_add(v[1]); 4]
    }

    #[inline]
    fn horizontal_add4_i32(v: [i32; 4]) -> [i32; 4] {
        [v[0]
            .wrapping_add(v[1])
            .wrapping_add(v[2])
            .wrapping_add(v[3]); 4]
    }

    #[inline]
    fn convert_to_f32(v: [i32; 4]) -> [f32; 4] {
        map(v, |x| x as f32)
    }

    #[inline]
    fn round_to_i32(v: [f32; 4]) -> [i32; 4] {
        map(v, |x| integer_indefinite(x.round_ties_even()))
    }

    #[inline]
    fn floor_to_i32(v: [f32; 4]) -> [i32; 4] {
        map(v, |x| integer_indefinite(x.floor()))
    }

    #[inline]
    fn ceil_to_i32(v: [f32; 4]) -> [i32; 4] {
        map(v, |x| integer_indefinite(x.ceil()))
    }

    #[inline]
    fn scalar_min(a: f32, b: f32) -> f32 {
        lane_min(a, b)
    }

    #[inline]
    fn scalar_max(a: f32, b: f32) -> f32 {
        lane_max(a, b)
    }

    #[inline]
    fn scalar_sqrt(x: f32) -> f32 {
        x.sqrt()
    }

    #[inline]
    fn scalar_rsqrt(x: f32) -> f32 {
        1.0 / x.sqrt()
    }

    #[inline]
    fn scalar_min_f64(a: f64, b: f64) -> f64 {
        if a < b { a } else { b }
    }

    #[inline]
    fn scalar_max_f64(a: f64, b: f64) -> f64 {
        if a > b { a } else { b }
    }

    #[inline]
    fn scalar_sqrt_f64(x: f64) -> f64 {
        x.sqrt()
    }
}
