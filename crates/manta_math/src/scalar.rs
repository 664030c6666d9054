//! Scalar math.
//!
//! Operations whose reference and accelerated formulas differ live in the
//! [`reference`] and [`accelerated`] modules, which expose identical function
//! lists. Operations with a single formula are defined here and re-exported
//! from both modules.

pub mod accelerated;
pub mod reference;

use crate::{
    num::Float,
    simd::{Accelerated, SimdBackend},
};

pub const PI: f32 = std::f32::consts::PI;
pub const PI_OVER_2: f32 = std::f32::consts::FRAC_PI_2;
pub const PI_OVER_3: f32 = std::f32::consts::FRAC_PI_3;
pub const PI_OVER_4: f32 = std::f32::consts::FRAC_PI_4;
pub const PI_OVER_6: f32 = std::f32::consts::FRAC_PI_6;
pub const TWO_PI: f32 = std::f32::consts::TAU;
pub const TAU: f32 = std::f32::consts::TAU;
/// Multiply degrees by this to get radians.
pub const DEG_TO_RAD: f32 = PI / 180.0;
/// Multiply radians by this to get degrees.
pub const RAD_TO_DEG: f32 = 180.0 / PI;
pub const E: f32 = std::f32::consts::E;
pub const LOG10_E: f32 = std::f32::consts::LOG10_E;
pub const LOG2_E: f32 = std::f32::consts::LOG2_E;

/// Number of low-order bits in which two floats may differ and still be
/// considered equal by [`approximately_equal_ulps`].
pub const DEFAULT_MAX_DELTA_BITS: u32 = 1;

/// Default epsilon for [`approximately_equal_relative`].
pub const DEFAULT_RELATIVE_EPSILON: f32 = 0.001;

/// Types with a reference and an accelerated minimum and maximum.
pub trait Extremum: Copy {
    fn reference_min(self, other: Self) -> Self;
    fn reference_max(self, other: Self) -> Self;
    fn accelerated_min(self, other: Self) -> Self;
    fn accelerated_max(self, other: Self) -> Self;
}

/// Types with a reference and an accelerated next power of two.
pub trait PowerOfTwo: Copy {
    fn reference_next_power_of_two(self) -> Self;
    fn accelerated_next_power_of_two(self) -> Self;
}

/// Integer types with a reference and an accelerated power-of-two check.
pub trait IntegerPowerOfTwo: PowerOfTwo {
    fn reference_is_power_of_two(self) -> bool;
    fn accelerated_is_power_of_two(self) -> bool;
}

/// Float types with a reference and an accelerated square root.
pub trait SquareRoot: Float {
    fn reference_sqrt(self) -> Self;
    fn accelerated_sqrt(self) -> Self;
}

/// Conversion of floats to `i32` by rounding.
///
/// Results for values outside the `i32` range are saturated, which is not
/// guaranteed to match any other conversion in this crate.
pub trait RoundToInt: Copy {
    fn ceil_to_int(self) -> i32;
    fn floor_to_int(self) -> i32;
    /// Rounds half-way cases to the nearest even integer.
    fn round_to_int(self) -> i32;
}

macro_rules! impl_integer_scalar {
    ($t:ty, $u:ty) => {
        impl Extremum for $t {
            #[inline]
            fn reference_min(self, other: Self) -> Self {
                Ord::min(self, other)
            }

            #[inline]
            fn reference_max(self, other: Self) -> Self {
                Ord::max(self, other)
            }

            #[inline]
            fn accelerated_min(self, other: Self) -> Self {
                if self < other { self } else { other }
            }

            #[inline]
            fn accelerated_max(self, other: Self) -> Self {
                if self > other { self } else { other }
            }
        }

        impl PowerOfTwo for $t {
            #[inline]
            fn reference_next_power_of_two(self) -> Self {
                debug_assert!(self > 0);
                (self as $u).next_power_of_two() as $t
            }

            #[inline]
            fn accelerated_next_power_of_two(self) -> Self {
                debug_assert!(self > 0);
                // Shifting first makes powers of two map to themselves
                let shifted = (self << 1).wrapping_sub(1);
                1 << (<$t>::BITS - 1 - shifted.leading_zeros())
            }
        }

        impl IntegerPowerOfTwo for $t {
            #[inline]
            fn reference_is_power_of_two(self) -> bool {
                self.count_ones() <= 1
            }

            #[inline]
            fn accelerated_is_power_of_two(self) -> bool {
                self & self.wrapping_sub(1) == 0
            }
        }
    };
}

impl_integer_scalar!(i32, u32);
impl_integer_scalar!(i64, u64);

macro_rules! impl_float_scalar {
    ($t:ty, $min:ident, $max:ident, $sqrt:ident) => {
        impl Extremum for $t {
            #[inline]
            fn reference_min(self, other: Self) -> Self {
                if self < other { self } else { other }
            }

            #[inline]
            fn reference_max(self, other: Self) -> Self {
                if self > other { self } else { other }
            }

            #[inline]
            fn accelerated_min(self, other: Self) -> Self {
                Accelerated::$min(self, other)
            }

            #[inline]
            fn accelerated_max(self, other: Self) -> Self {
                Accelerated::$max(self, other)
            }
        }

        impl PowerOfTwo for $t {
            #[inline]
            fn reference_next_power_of_two(self) -> Self {
                <$t>::powf(2.0, self.log2().ceil())
            }

            #[inline]
            fn accelerated_next_power_of_two(self) -> Self {
                self.reference_next_power_of_two()
            }
        }

        impl SquareRoot for $t {
            #[inline]
            fn reference_sqrt(self) -> Self {
                self.sqrt()
            }

            #[inline]
            fn accelerated_sqrt(self) -> Self {
                Accelerated::$sqrt(self)
            }
        }

        impl RoundToInt for $t {
            #[inline]
            fn ceil_to_int(self) -> i32 {
                self.ceil() as i32
            }

            #[inline]
            fn floor_to_int(self) -> i32 {
                self.floor() as i32
            }

            #[inline]
            fn round_to_int(self) -> i32 {
                self.round_ties_even() as i32
            }
        }
    };
}

impl_float_scalar!(f32, scalar_min, scalar_max, scalar_sqrt);
impl_float_scalar!(f64, scalar_min_f64, scalar_max_f64, scalar_sqrt_f64);

/// Returns `1` for positive values, `-1` for negative values and the value
/// itself for zero and NaN.
#[inline]
pub fn sign<F: Float>(x: F) -> F {
    if x > F::ZERO {
        F::ONE
    } else if x < F::ZERO {
        F::NEG_ONE
    } else {
        x
    }
}

/// Returns the magnitude of `to` with the sign of `from`.
#[inline]
pub fn copysign<F: Float>(to: F, from: F) -> F {
    to.abs().copysign(from)
}

#[inline]
pub fn ceil_to_int<F: RoundToInt>(x: F) -> i32 {
    x.ceil_to_int()
}

#[inline]
pub fn floor_to_int<F: RoundToInt>(x: F) -> i32 {
    x.floor_to_int()
}

#[inline]
pub fn round_to_int<F: RoundToInt>(x: F) -> i32 {
    x.round_to_int()
}

/// Linearly interpolates from `a` to `b` by the unclamped factor `t`.
#[inline]
pub fn lerp<F: Float>(a: F, b: F, t: F) -> F {
    a + (b - a) * t
}

/// Computes the factor `t` for which [`lerp`] of `a` and `b` gives `value`,
/// or zero if `a` and `b` are equal.
#[inline]
pub fn inverse_lerp<F: Float>(a: F, b: F, value: F) -> F {
    if a != b {
        (value - a) / (b - a)
    } else {
        F::ZERO
    }
}

/// Linearly interpolates from angle `a` to angle `b` (in radians) along the
/// shortest arc.
#[inline]
pub fn lerp_angle<F: Float>(a: F, b: F, t: F) -> F {
    a + delta_angle(a, b) * t
}

/// Moves `a` towards `b` by at most `max_delta`.
#[inline]
pub fn move_towards<F: Float>(a: F, b: F, max_delta: F) -> F {
    let delta = b - a;
    if delta.abs() <= max_delta {
        b
    } else {
        a + copysign(max_delta, delta)
    }
}

/// Moves angle `from` towards angle `to` (in radians) along the shortest arc
/// by at most `max_delta`.
#[inline]
pub fn move_towards_angle<F: Float>(from: F, to: F, max_delta: F) -> F {
    let delta = delta_angle(from, to);
    if -max_delta < delta && delta < max_delta {
        to
    } else {
        move_towards(from, from + delta, max_delta)
    }
}

/// Wraps `n` into the range `[0, size)`.
#[inline]
pub fn cycle<F: Float>(n: F, size: F) -> F {
    n - (n / size).floor() * size
}

/// Makes `n` bounce back and forth between zero and `size`.
#[inline]
pub fn ping_pong<F: Float>(n: F, size: F) -> F {
    size - (cycle(n, size * F::TWO) - size).abs()
}

/// Reduces the given angle (in radians) to the range `(-π, π]`.
#[inline]
pub fn wrap_angle<F: Float>(angle: F) -> F {
    if angle > -F::PI && angle <= F::PI {
        return angle;
    }
    let angle = angle % F::TWO_PI;
    if angle <= -F::PI {
        angle + F::TWO_PI
    } else if angle > F::PI {
        angle - F::TWO_PI
    } else {
        angle
    }
}

/// Computes the signed shortest difference from angle `from` to angle `to`
/// (in radians).
#[inline]
pub fn delta_angle<F: Float>(from: F, to: F) -> F {
    let delta = cycle(to - from, F::TWO_PI);
    if delta > F::PI {
        delta - F::TWO_PI
    } else {
        delta
    }
}

/// Evaluates one coordinate of the point with barycentric coordinates `u`
/// (weight of `b`) and `v` (weight of `c`) in the triangle `(a, b, c)`.
#[inline]
pub fn barycentric<F: Float>(a: F, b: F, c: F, u: F, v: F) -> F {
    a + (b - a) * u + (c - a) * v
}

/// Catmull-Rom spline interpolation between `p1` and `p2`.
#[inline]
pub fn catmull_rom<F: Float>(p0: F, p1: F, p2: F, p3: F, t: F) -> F {
    let t2 = t * t;
    let t3 = t2 * t;
    F::ONE_HALF
        * ((F::THREE * p1 - p0 - F::THREE * p2 + p3) * t3
            + (F::TWO * p0 - F::FIVE * p1 + F::FOUR * p2 - p3) * t2
            + (p2 - p0) * t
            + F::TWO * p1)
}

/// Cubic Hermite spline interpolation from position `p0` with tangent `m0` to
/// position `p1` with tangent `m1`.
#[inline]
pub fn hermite<F: Float>(p0: F, m0: F, p1: F, m1: F, t: F) -> F {
    let t2 = t * t;
    let t3 = t2 * t;
    (F::TWO * p0 - F::TWO * p1 + m1 + m0) * t3
        + (F::THREE * p1 - F::THREE * p0 - F::TWO * m0 - m1) * t2
        + m0 * t
        + p0
}

/// Converts a linear color channel value to the sRGB transfer curve.
#[inline]
pub fn linear_to_srgb(value: f32) -> f32 {
    if value <= 0.003_130_8 {
        12.92 * value
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    }
}

/// Converts an sRGB encoded color channel value to linear.
#[inline]
pub fn srgb_to_linear(value: f32) -> f32 {
    if value <= 0.040_45 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Whether `a` and `b` are at most `1 << max_delta_bits` representable
/// values apart. A `max_delta_bits` of 63 or more accepts any pair of values.
///
/// Negative values are mapped so that the integer interpretation of the bits
/// is monotonic across zero, making `-0.0` and `0.0` equal.
#[inline]
pub fn approximately_equal_ulps(a: f32, b: f32, max_delta_bits: u32) -> bool {
    let delta = (monotonic_bits(a) - monotonic_bits(b)).abs();
    1_i64
        .checked_shl(max_delta_bits)
        .filter(|max_delta| *max_delta > 0)
        .is_none_or(|max_delta| delta <= max_delta)
}

/// Maps the bits of `x` to an integer that increases monotonically with `x`.
#[inline]
pub(crate) fn monotonic_bits(x: f32) -> i64 {
    let bits = i64::from(x.to_bits() as i32);
    if bits < 0 {
        i64::from(i32::MIN) - bits
    } else {
        bits
    }
}

/// Whether `a` and `b` differ by at most `tolerance`. Equal infinities
/// compare equal.
#[inline]
pub fn approximately_equal<F: Float>(a: F, b: F, tolerance: F) -> bool {
    a == b || (a - b).abs() <= tolerance
}

/// Whether the difference between `a` and `b` relative to their magnitudes is
/// below `epsilon`.
///
/// When either value is zero, or the two are closer than the smallest normal
/// value, the difference is instead compared against `epsilon` times the
/// smallest normal value.
#[inline]
pub fn approximately_equal_relative<F: Float>(a: F, b: F, epsilon: F) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    if a == F::ZERO || b == F::ZERO || diff < F::MIN_POSITIVE {
        diff < epsilon * F::MIN_POSITIVE
    } else {
        diff / (a.abs() + b.abs()).min(F::MAX) < epsilon
    }
}
