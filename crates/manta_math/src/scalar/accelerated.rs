//! Accelerated scalar math using single-lane SIMD instructions and bit
//! tricks.

pub use super::{
    approximately_equal, approximately_equal_relative, approximately_equal_ulps, barycentric,
    catmull_rom, ceil_to_int, copysign, cycle, delta_angle, floor_to_int, hermite, inverse_lerp,
    lerp, lerp_angle, linear_to_srgb, move_towards, move_towards_angle, ping_pong, round_to_int,
    sign, srgb_to_linear, wrap_angle,
};

use super::{Extremum, IntegerPowerOfTwo, PowerOfTwo, SquareRoot};
use crate::{
    num::Float,
    simd::{Accelerated, SimdBackend},
};

#[inline]
pub fn min<T: Extremum>(x: T, y: T) -> T {
    x.accelerated_min(y)
}

#[inline]
pub fn max<T: Extremum>(x: T, y: T) -> T {
    x.accelerated_max(y)
}

/// Clamps `x` to `[min, max]`. The `min` bound is applied last, so it wins
/// when `min > max`.
#[inline]
pub fn clamp<T: Extremum>(x: T, min: T, max: T) -> T {
    x.accelerated_min(max).accelerated_max(min)
}

#[inline]
pub fn clamp01<F: Float + Extremum>(x: F) -> F {
    clamp(x, F::ZERO, F::ONE)
}

#[inline]
pub fn sqrt<F: SquareRoot>(x: F) -> F {
    x.accelerated_sqrt()
}

/// Approximates `1 / sqrt(x)` with a relative error of at most 1.5 * 2^-12.
#[inline]
pub fn inv_sqrt_fast(x: f32) -> f32 {
    Accelerated::scalar_rsqrt(x)
}

/// Returns the smallest power of two that is greater than or equal to `x`.
///
/// Integer input must be positive. Float input may be zero, giving zero.
#[inline]
pub fn next_power_of_two<T: PowerOfTwo>(x: T) -> T {
    x.accelerated_next_power_of_two()
}

/// Whether clearing the lowest set bit of `x` gives zero, which includes
/// zero itself.
#[inline]
pub fn is_power_of_two<T: IntegerPowerOfTwo>(x: T) -> bool {
    x.accelerated_is_power_of_two()
}

/// Computes `n!` for `n <= 20`.
#[inline]
pub fn factorial(n: i32) -> i64 {
    let mut n = i64::from(n);
    let mut result = 1;
    while n > 1 {
        result *= n;
        n -= 1;
    }
    result
}

/// Computes the number of ways to choose `k` out of `n` elements, iterating
/// over the smaller of `k` and `n - k`.
#[inline]
pub fn binomial_coefficient(n: i32, k: i32) -> i64 {
    let n = i64::from(n);
    let k = i64::from(k).min(n - i64::from(k));
    let mut result = 1;
    for i in 0..k {
        result *= n - i;
        result /= i + 1;
    }
    result
}

#[inline]
pub fn lerp_clamped<F: Float + Extremum>(a: F, b: F, t: F) -> F {
    lerp(a, b, clamp01(t))
}

#[inline]
pub fn lerp_angle_clamped<F: Float + Extremum>(a: F, b: F, t: F) -> F {
    lerp_angle(a, b, clamp01(t))
}

/// Cubic interpolation from zero at `a` to one at `b`.
#[inline]
pub fn smooth_step<F: Float + Extremum>(a: F, b: F, t: F) -> F {
    let t = clamp01((t - a) / (b - a));
    t * t * (F::THREE - F::TWO * t)
}
