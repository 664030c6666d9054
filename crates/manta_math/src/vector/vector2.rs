//! Two-component float vectors.

pub mod accelerated;
pub mod reference;

use crate::{scalar, vector::Vector3};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A 2-dimensional vector of `f32` components.
///
/// The components fill the lower 64 bits of a SIMD register when loaded.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector2 {
    x: f32,
    y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const UNIT_X: Self = Self::new(1.0, 0.0);
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a new vector with the same value for every component.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value)
    }

    /// Creates a 3-dimensional vector from this vector and the given
    /// z-component.
    #[inline]
    pub const fn extended(&self, z: f32) -> Vector3 {
        Vector3::new(self.x, self.y, z)
    }

    /// The vector rotated a quarter turn clockwise, `(y, -x)`.
    #[inline]
    pub fn perpendicular_right(&self) -> Self {
        perpendicular_right(*self)
    }

    /// The vector rotated a quarter turn counterclockwise, `(-y, x)`.
    #[inline]
    pub fn perpendicular_left(&self) -> Self {
        perpendicular_left(*self)
    }

    #[inline]
    pub fn length(&self) -> f32 {
        accelerated::magnitude(*self)
    }

    /// Approximates the length using the approximate reciprocal square root.
    #[inline]
    pub fn length_fast(&self) -> f32 {
        accelerated::magnitude_fast(*self)
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        accelerated::magnitude_squared(*self)
    }

    /// Computes the normalized version of the vector. A zero vector gives NaN
    /// components.
    #[inline]
    pub fn normalized(&self) -> Self {
        accelerated::normalize(*self)
    }

    /// Approximates the normalized version of the vector using the
    /// approximate reciprocal square root.
    #[inline]
    pub fn normalized_fast(&self) -> Self {
        accelerated::normalize_fast(*self)
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        accelerated::dot(*self, *other)
    }
}

/// Returns `(y, -x)`.
#[inline]
pub fn perpendicular_right(vector: Vector2) -> Vector2 {
    Vector2::new(vector.y, -vector.x)
}

/// Returns `(-y, x)`.
#[inline]
pub fn perpendicular_left(vector: Vector2) -> Vector2 {
    Vector2::new(-vector.y, vector.x)
}

/// Evaluates the point with barycentric coordinates `u` (weight of `b`) and
/// `v` (weight of `c`) in the triangle `(a, b, c)`.
#[inline]
pub fn barycentric(a: Vector2, b: Vector2, c: Vector2, u: f32, v: f32) -> Vector2 {
    Vector2::new(
        scalar::barycentric(a.x, b.x, c.x, u, v),
        scalar::barycentric(a.y, b.y, c.y, u, v),
    )
}

/// Catmull-Rom spline interpolation between `b` and `c`.
#[inline]
pub fn catmull_rom(a: Vector2, b: Vector2, c: Vector2, d: Vector2, t: f32) -> Vector2 {
    Vector2::new(
        scalar::catmull_rom(a.x, b.x, c.x, d.x, t),
        scalar::catmull_rom(a.y, b.y, c.y, d.y, t),
    )
}

/// Cubic Hermite spline interpolation from position `p0` with tangent `m0` to
/// position `p1` with tangent `m1`.
#[inline]
pub fn hermite(p0: Vector2, m0: Vector2, p1: Vector2, m1: Vector2, t: f32) -> Vector2 {
    Vector2::new(
        scalar::hermite(p0.x, m0.x, p1.x, m1.x, t),
        scalar::hermite(p0.y, m0.y, p1.y, m1.y, t),
    )
}

define_into_variants! {
    perpendicular_right => perpendicular_right_into(vector: Vector2) -> Vector2;
    perpendicular_left => perpendicular_left_into(vector: Vector2) -> Vector2;
    barycentric => barycentric_into(a: Vector2, b: Vector2, c: Vector2; u: f32, v: f32) -> Vector2;
    catmull_rom => catmull_rom_into(a: Vector2, b: Vector2, c: Vector2, d: Vector2; t: f32) -> Vector2;
    hermite => hermite_into(p0: Vector2, m0: Vector2, p1: Vector2, m1: Vector2; t: f32) -> Vector2;
}

impl_components!(Vector2, f32, 2, [0 => x, x_mut; 1 => y, y_mut]);

impl_approx_eq!(Vector2, [x, y]);

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

impl_binop!(Add, add, Vector2, Vector2, Vector2, |a, b| {
    accelerated::add(a, b)
});

impl_binop!(Sub, sub, Vector2, Vector2, Vector2, |a, b| {
    accelerated::subtract(a, b)
});

impl_binop!(Mul, mul, Vector2, f32, Vector2, |a, b| {
    accelerated::multiply(a, b)
});

impl_binop!(Mul, mul, f32, Vector2, Vector2, |a, b| {
    accelerated::multiply(b, a)
});

impl_binop!(Mul, mul, Vector2, Vector2, Vector2, |a, b| {
    accelerated::component_multiply(a, b)
});

impl_binop!(Div, div, Vector2, f32, Vector2, |a, b| {
    accelerated::divide(a, b)
});

impl_binop!(Div, div, Vector2, Vector2, Vector2, |a, b| {
    accelerated::component_divide(a, b)
});

impl_binop_assign!(AddAssign, add_assign, Vector2, Vector2, Add, add);
impl_binop_assign!(SubAssign, sub_assign, Vector2, Vector2, Sub, sub);
impl_binop_assign!(MulAssign, mul_assign, Vector2, f32, Mul, mul);
impl_binop_assign!(MulAssign, mul_assign, Vector2, Vector2, Mul, mul);
impl_binop_assign!(DivAssign, div_assign, Vector2, f32, Div, div);
impl_binop_assign!(DivAssign, div_assign, Vector2, Vector2, Div, div);

impl_unary_op!(Neg, neg, Vector2, Vector2, |val| {
    accelerated::negate(val)
});

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::{abs_diff_eq, assert_abs_diff_eq, relative_eq};
    use proptest::prelude::*;

    const EPSILON: f32 = 1e-6;

    prop_compose! {
        fn vector2_strategy(max_value: f32)(
            x in -max_value..max_value,
            y in -max_value..max_value,
        ) -> Vector2 {
            Vector2::new(x, y)
        }
    }

    #[test]
    fn computing_vector2_length_works() {
        let v = Vector2::new(3.0, 4.0);
        for length in [reference::magnitude(v), accelerated::magnitude(v), v.length()] {
            assert_abs_diff_eq!(length, 5.0, epsilon = EPSILON);
        }
        assert_abs_diff_eq!(reference::magnitude_fast(v), 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(accelerated::magnitude_fast(v), 5.0, epsilon = 1e-2);
        assert_eq!(reference::magnitude_squared(v), 25.0);
        assert_eq!(accelerated::magnitude_squared(v), 25.0);
    }

    #[test]
    fn normalizing_vector2_gives_unit_vector() {
        let v = Vector2::new(3.0, 4.0);
        for normalized in [reference::normalize(v), accelerated::normalize(v)] {
            assert_abs_diff_eq!(normalized, Vector2::new(0.6, 0.8), epsilon = EPSILON);
        }
        assert_abs_diff_eq!(
            accelerated::normalize_fast(v),
            Vector2::new(0.6, 0.8),
            epsilon = 1e-3
        );
    }

    #[test]
    fn normalizing_zero_vector2_gives_nan() {
        for normalized in [
            reference::normalize(Vector2::ZERO),
            accelerated::normalize(Vector2::ZERO),
        ] {
            assert!(normalized.x().is_nan() && normalized.y().is_nan());
        }
    }

    #[test]
    fn vector2_component_extrema_work() {
        let a = Vector2::new(-1.0, 2.0);
        let b = Vector2::new(3.0, -4.0);
        for (min, max) in [
            (reference::component_min(a, b), reference::component_max(a, b)),
            (accelerated::component_min(a, b), accelerated::component_max(a, b)),
        ] {
            assert_eq!(min, Vector2::new(-1.0, -4.0));
            assert_eq!(max, Vector2::new(3.0, 2.0));
        }

        let lower = Vector2::new(0.0, -1.0);
        let upper = Vector2::new(1.0, 1.0);
        assert_eq!(reference::component_clamp(b, lower, upper), Vector2::new(1.0, -1.0));
        assert_eq!(accelerated::component_clamp(b, lower, upper), Vector2::new(1.0, -1.0));
    }

    #[test]
    fn vector2_max_of_equal_magnitudes_selects_right() {
        let left = Vector2::new(3.0, 4.0);
        let right = Vector2::new(-4.0, 3.0);
        assert_eq!(reference::max(left, right), right);
        assert_eq!(accelerated::max(left, right), right);
        assert_eq!(reference::min(left, right), right);
        assert_eq!(accelerated::min(left, right), right);
        assert_eq!(accelerated::max(left, Vector2::ZERO), left);
        assert_eq!(accelerated::min(left, Vector2::ZERO), Vector2::ZERO);
    }

    #[test]
    fn clamping_vector2_magnitude_works() {
        let v = Vector2::new(3.0, 4.0);
        assert_abs_diff_eq!(
            reference::magnitude_clamp(v, 2.5),
            Vector2::new(1.5, 2.0),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            accelerated::magnitude_clamp(v, 2.5),
            Vector2::new(1.5, 2.0),
            epsilon = EPSILON
        );
        assert_eq!(accelerated::magnitude_clamp(v, 6.0), v);
    }

    #[test]
    fn vector2_arithmetic_operations_work() {
        let v1 = Vector2::new(1.0, 2.0);
        let v2 = Vector2::new(3.0, 4.0);

        assert_eq!(&v1 + &v2, Vector2::new(4.0, 6.0));
        assert_eq!(&v1 - &v2, Vector2::new(-2.0, -2.0));
        assert_eq!(&v1 * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(3.0 * &v1, Vector2::new(3.0, 6.0));
        assert_eq!(v1 * v2, Vector2::new(3.0, 8.0));
        assert_eq!(&v1 / 2.0, Vector2::new(0.5, 1.0));
        assert_eq!(v2 / v1, Vector2::new(3.0, 2.0));
        assert_eq!(-&v1, Vector2::new(-1.0, -2.0));

        assert_eq!(reference::add(v1, v2), Vector2::new(4.0, 6.0));
        assert_eq!(reference::subtract(v1, v2), Vector2::new(-2.0, -2.0));
        assert_eq!(reference::negate(v1), Vector2::new(-1.0, -2.0));
        assert_eq!(reference::multiply(v1, 2.0), Vector2::new(2.0, 4.0));
        assert_eq!(reference::component_multiply(v1, v2), Vector2::new(3.0, 8.0));
        assert_eq!(reference::divide(v1, 2.0), Vector2::new(0.5, 1.0));
        assert_eq!(reference::component_divide(v2, v1), Vector2::new(3.0, 2.0));
    }

    #[test]
    fn vector2_compound_assignment_works() {
        let mut v = Vector2::new(1.0, 2.0);
        v += Vector2::ONE;
        v *= 2.0;
        v -= &Vector2::UNIT_X;
        v /= Vector2::new(3.0, 2.0);
        assert_eq!(v, Vector2::new(1.0, 3.0));
    }

    #[test]
    fn output_parameter_forms_match_value_forms() {
        let a = Vector2::new(1.0, -2.0);
        let b = Vector2::new(0.5, 4.0);
        let mut result = Vector2::ZERO;

        reference::add_into(&a, &b, &mut result);
        assert_eq!(result, reference::add(a, b));
        accelerated::lerp_into(&a, &b, 0.25, &mut result);
        assert_eq!(result, accelerated::lerp(a, b, 0.25));
        accelerated::normalize_into(&a, &mut result);
        assert_eq!(result, accelerated::normalize(a));
        perpendicular_left_into(&a, &mut result);
        assert_eq!(result, Vector2::new(2.0, 1.0));
    }

    #[test]
    fn vector2_dot_and_distance_work() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(4.0, 6.0);
        assert_eq!(reference::dot(a, b), 16.0);
        assert_eq!(accelerated::dot(a, b), 16.0);
        assert_eq!(reference::distance(a, b), 5.0);
        assert_eq!(accelerated::distance(a, b), 5.0);
        assert_eq!(reference::distance_squared(a, b), 25.0);
        assert_eq!(accelerated::distance_squared(a, b), 25.0);
    }

    #[test]
    fn perpendiculars_and_reflection_work() {
        let v = Vector2::new(1.0, 2.0);
        assert_eq!(v.perpendicular_right(), Vector2::new(2.0, -1.0));
        assert_eq!(v.perpendicular_left(), Vector2::new(-2.0, 1.0));
        assert_eq!(reference::reflect(v, Vector2::UNIT_Y), Vector2::new(1.0, -2.0));
        assert_eq!(accelerated::reflect(v, Vector2::UNIT_X), Vector2::new(-1.0, 2.0));
    }

    #[test]
    fn vector2_angle_works() {
        let angle = std::f32::consts::FRAC_PI_2;
        assert_abs_diff_eq!(
            reference::angle(Vector2::UNIT_X, Vector2::new(0.0, 3.0)),
            angle,
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            accelerated::angle(Vector2::UNIT_X, Vector2::new(0.0, 3.0)),
            angle,
            epsilon = EPSILON
        );
        assert_eq!(reference::angle(Vector2::ZERO, Vector2::UNIT_Y), 0.0);
        assert_eq!(accelerated::angle(Vector2::UNIT_X, Vector2::ZERO), 0.0);
    }

    #[test]
    fn vector2_signed_angle_is_always_zero_for_finite_input() {
        // The sign is taken of `from.x * to.y - from.x * to.y`, which vanishes
        assert_eq!(reference::signed_angle(Vector2::UNIT_X, Vector2::UNIT_Y), 0.0);
        assert_eq!(accelerated::signed_angle(Vector2::UNIT_X, Vector2::UNIT_Y), 0.0);
        assert_eq!(accelerated::signed_angle(Vector2::UNIT_Y, Vector2::UNIT_X), 0.0);
    }

    #[test]
    fn vector2_interpolation_works() {
        let a = Vector2::new(0.0, 2.0);
        let b = Vector2::new(4.0, 0.0);
        for lerped in [reference::lerp(a, b, 0.25), accelerated::lerp(a, b, 0.25)] {
            assert_abs_diff_eq!(lerped, Vector2::new(1.0, 1.5), epsilon = EPSILON);
        }
        assert_eq!(reference::lerp_clamped(a, b, 2.0), b);
        assert_eq!(accelerated::lerp_clamped(a, b, -1.0), a);

        let from = Vector2::new(1.0, 1.0);
        let to = Vector2::new(4.0, 5.0);
        for moved in [
            reference::move_towards(from, to, 2.5),
            accelerated::move_towards(from, to, 2.5),
        ] {
            assert_abs_diff_eq!(moved, Vector2::new(2.5, 3.0), epsilon = EPSILON);
        }
        assert_eq!(accelerated::move_towards(from, to, 5.0), to);
    }

    #[test]
    fn vector2_curves_interpolate_per_component() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(1.0, 2.0);
        let c = Vector2::new(2.0, 4.0);
        let d = Vector2::new(3.0, 6.0);
        assert_abs_diff_eq!(barycentric(a, b, c, 0.5, 0.25), Vector2::new(1.0, 2.0), epsilon = EPSILON);
        assert_abs_diff_eq!(catmull_rom(a, b, c, d, 0.5), Vector2::new(1.5, 3.0), epsilon = EPSILON);
        assert_abs_diff_eq!(hermite(b, a, c, a, 1.0), c, epsilon = EPSILON);
        assert_abs_diff_eq!(
            accelerated::smooth_step(a, c, 1.0),
            Vector2::new(0.5, 0.156_25),
            epsilon = EPSILON
        );
        assert_eq!(reference::smooth_step(a, c, 1.0), accelerated::smooth_step(a, c, 1.0));
    }

    #[test]
    fn vector2_indexing_works() {
        let mut v = Vector2::new(1.0, 2.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        v[1] = 5.0;
        *v.x_mut() = -1.0;
        assert_eq!(v, Vector2::new(-1.0, 5.0));
        assert_eq!(unsafe { v.get_unchecked(1) }, 5.0);
        assert_eq!(v.as_array(), &[-1.0, 5.0]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn indexing_vector2_out_of_bounds_panics() {
        let v = Vector2::new(1.0, 2.0);
        let _ = v[2];
    }

    #[test]
    fn formatting_vector2_works() {
        let v = Vector2::new(1.0, -2.5);
        assert_eq!(v.to_string(), "(1.00, -2.50)");
        assert_eq!(format!("{v:?}"), "Vector2 { x: 1.0, y: -2.5 }");
    }

    proptest! {
        #[test]
        fn vector2_paths_agree(a in vector2_strategy(1e2), b in vector2_strategy(1e2), t in 0.0_f32..1.0) {
            prop_assert_eq!(reference::add(a, b), accelerated::add(a, b));
            prop_assert_eq!(reference::subtract(a, b), accelerated::subtract(a, b));
            prop_assert_eq!(reference::component_multiply(a, b), accelerated::component_multiply(a, b));
            prop_assert_eq!(reference::component_min(a, b), accelerated::component_min(a, b));
            prop_assert_eq!(reference::component_max(a, b), accelerated::component_max(a, b));
            prop_assert_eq!(reference::dot(a, b), accelerated::dot(a, b));
            prop_assert_eq!(reference::lerp(a, b, t), accelerated::lerp(a, b, t));
            prop_assert!(relative_eq!(
                reference::magnitude(a),
                accelerated::magnitude(a),
                epsilon = 1e-6,
                max_relative = 1e-6
            ));
            prop_assert!(relative_eq!(
                reference::normalize_fast(a),
                accelerated::normalize_fast(a),
                epsilon = 1e-6,
                max_relative = 1e-3
            ));
        }
    }

    proptest! {
        #[test]
        fn vector2_dot_is_commutative(a in vector2_strategy(1e3), b in vector2_strategy(1e3)) {
            prop_assert_eq!(accelerated::dot(a, b), accelerated::dot(b, a));
            prop_assert_eq!(reference::dot(a, b), reference::dot(b, a));
        }
    }

    proptest! {
        #[test]
        fn normalized_vector2_has_unit_length(v in vector2_strategy(1e3)) {
            prop_assume!(v.length_squared() > 1e-6);
            prop_assert!(abs_diff_eq!(v.normalized().length(), 1.0, epsilon = 1e-5));
            prop_assert!(abs_diff_eq!(reference::normalize(v).length(), 1.0, epsilon = 1e-5));
        }
    }

    proptest! {
        #[test]
        fn vector2_component_extrema_are_idempotent_and_commutative(
            a in vector2_strategy(1e3),
            b in vector2_strategy(1e3),
        ) {
            prop_assert_eq!(accelerated::component_min(a, a), a);
            prop_assert_eq!(accelerated::component_max(a, a), a);
            prop_assert_eq!(accelerated::component_min(a, b), accelerated::component_min(b, a));
            prop_assert_eq!(accelerated::component_max(a, b), accelerated::component_max(b, a));
        }
    }
}
