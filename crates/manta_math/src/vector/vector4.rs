//! Four-component float vectors.

pub mod accelerated;
pub mod reference;

use crate::vector::{Vector2, Vector3};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A 4-dimensional vector of `f32` components.
///
/// The components fill a full 128-bit SIMD register when loaded.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector4 {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

impl Vector4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const UNIT_W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a new vector with the same value for every component.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Creates a vector from a 2-dimensional vector and the two remaining
    /// components.
    #[inline]
    pub const fn from_vector2(xy: Vector2, z: f32, w: f32) -> Self {
        Self::new(xy.x(), xy.y(), z, w)
    }

    /// Creates a vector from the two halves `xy` and `zw`.
    #[inline]
    pub const fn from_vector2s(xy: Vector2, zw: Vector2) -> Self {
        Self::new(xy.x(), xy.y(), zw.x(), zw.y())
    }

    /// Creates a vector from a 3-dimensional vector and the w-component.
    #[inline]
    pub const fn from_vector3(xyz: Vector3, w: f32) -> Self {
        Self::new(xyz.x(), xyz.y(), xyz.z(), w)
    }

    /// The x- and y-components.
    #[inline]
    pub const fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// The x-, y- and z-components.
    #[inline]
    pub const fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
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

    #[inline]
    pub fn normalized_fast(&self) -> Self {
        accelerated::normalize_fast(*self)
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        accelerated::dot(*self, *other)
    }
}

impl From<Vector3> for Vector4 {
    /// Extends the vector with a zero w-component.
    #[inline]
    fn from(vector: Vector3) -> Self {
        Self::from_vector3(vector, 0.0)
    }
}

impl From<Vector4> for Vector3 {
    #[inline]
    fn from(vector: Vector4) -> Self {
        vector.xyz()
    }
}

impl From<Vector4> for Vector2 {
    #[inline]
    fn from(vector: Vector4) -> Self {
        vector.xy()
    }
}

impl_components!(Vector4, f32, 4, [0 => x, x_mut; 1 => y, y_mut; 2 => z, z_mut; 3 => w, w_mut]);

impl_approx_eq!(Vector4, [x, y, z, w]);

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}, {:.2}, {:.2})",
            self.x, self.y, self.z, self.w
        )
    }
}

impl_binop!(Add, add, Vector4, Vector4, Vector4, |a, b| {
    accelerated::add(a, b)
});

impl_binop!(Sub, sub, Vector4, Vector4, Vector4, |a, b| {
    accelerated::subtract(a, b)
});

impl_binop!(Mul, mul, Vector4, f32, Vector4, |a, b| {
    accelerated::multiply(a, b)
});

impl_binop!(Mul, mul, f32, Vector4, Vector4, |a, b| {
    accelerated::multiply(b, a)
});

impl_binop!(Mul, mul, Vector4, Vector4, Vector4, |a, b| {
    accelerated::component_multiply(a, b)
});

impl_binop!(Div, div, Vector4, f32, Vector4, |a, b| {
    accelerated::divide(a, b)
});

impl_binop!(Div, div, Vector4, Vector4, Vector4, |a, b| {
    accelerated::component_divide(a, b)
});

impl_binop_assign!(AddAssign, add_assign, Vector4, Vector4, Add, add);
impl_binop_assign!(SubAssign, sub_assign, Vector4, Vector4, Sub, sub);
impl_binop_assign!(MulAssign, mul_assign, Vector4, f32, Mul, mul);
impl_binop_assign!(MulAssign, mul_assign, Vector4, Vector4, Mul, mul);
impl_binop_assign!(DivAssign, div_assign, Vector4, f32, Div, div);
impl_binop_assign!(DivAssign, div_assign, Vector4, Vector4, Div, div);

impl_unary_op!(Neg, neg, Vector4, Vector4, |val| {
    accelerated::negate(val)
});

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::{abs_diff_eq, assert_abs_diff_eq, relative_eq};
    use proptest::prelude::*;

    const EPSILON: f32 = 1e-6;
    const SCENARIO_EPSILON: f32 = 1e-4;

    const V0: Vector4 = Vector4::new(-3.0, 5.0, 4.0, -2.0);
    const V1: Vector4 = Vector4::new(4.0, 50.0, -2.0, -9.0);
    const A: Vector4 = Vector4::new(-3.0, 2.0, -1.0, -2.0);
    const B: Vector4 = Vector4::new(4.0, 0.0, -2.0, -9.0);

    prop_compose! {
        fn vector4_strategy(max_value: f32)(
            x in -max_value..max_value,
            y in -max_value..max_value,
            z in -max_value..max_value,
            w in -max_value..max_value,
        ) -> Vector4 {
            Vector4::new(x, y, z, w)
        }
    }

    #[test]
    fn computing_vector4_length_works() {
        for length_squared in [
            reference::magnitude_squared(V0),
            accelerated::magnitude_squared(V0),
            V0.length_squared(),
        ] {
            assert_eq!(length_squared, 54.0);
        }
        for length in [reference::magnitude(V0), accelerated::magnitude(V0)] {
            assert_abs_diff_eq!(length, 7.34847, epsilon = SCENARIO_EPSILON);
        }
        assert_abs_diff_eq!(reference::magnitude_fast(V0), 7.34847, epsilon = SCENARIO_EPSILON);
        assert_abs_diff_eq!(accelerated::magnitude_fast(V0), 7.34847, epsilon = 1e-2);
    }

    #[test]
    fn normalizing_vector4_works() {
        let expected = Vector4::new(-0.408248, 0.680414, 0.544331, -0.272166);
        for normalized in [reference::normalize(V0), accelerated::normalize(V0), V0.normalized()] {
            assert_abs_diff_eq!(normalized, expected, epsilon = SCENARIO_EPSILON);
        }
        assert_abs_diff_eq!(reference::normalize_fast(V0), expected, epsilon = SCENARIO_EPSILON);
        assert_abs_diff_eq!(accelerated::normalize_fast(V0), expected, epsilon = 1e-3);
    }

    #[test]
    fn normalizing_zero_vector4_gives_nan() {
        for normalized in [
            reference::normalize(Vector4::ZERO),
            accelerated::normalize(Vector4::ZERO),
        ] {
            assert!(normalized.as_array().iter().all(|component| component.is_nan()));
        }
    }

    #[test]
    fn clamping_vector4_magnitude_works() {
        let expected = Vector4::new(-0.816497, 1.36083, 1.08866, -0.544331);
        assert_abs_diff_eq!(reference::magnitude_clamp(V0, 2.0), expected, epsilon = SCENARIO_EPSILON);
        assert_abs_diff_eq!(accelerated::magnitude_clamp(V0, 2.0), expected, epsilon = SCENARIO_EPSILON);
        assert_eq!(accelerated::magnitude_clamp(V0, 8.0), V0);
    }

    #[test]
    fn vector4_component_extrema_work() {
        for (min, max) in [
            (reference::component_min(V0, B), reference::component_max(V0, B)),
            (accelerated::component_min(V0, B), accelerated::component_max(V0, B)),
        ] {
            assert_eq!(min, Vector4::new(-3.0, 0.0, -2.0, -9.0));
            assert_eq!(max, Vector4::new(4.0, 5.0, 4.0, -2.0));
        }

        let upper = Vector4::new(6.0, 1.0, 0.0, 18.0);
        let expected = Vector4::new(4.0, 1.0, -1.0, -2.0);
        assert_eq!(reference::component_clamp(A, B, upper), expected);
        assert_eq!(accelerated::component_clamp(A, B, upper), expected);
    }

    #[test]
    fn vector4_extrema_by_magnitude_work() {
        assert_eq!(reference::min(V0, V1), V0);
        assert_eq!(accelerated::min(V0, V1), V0);
        assert_eq!(reference::max(V0, V1), V1);
        assert_eq!(accelerated::max(V0, V1), V1);
    }

    #[test]
    fn vector4_max_of_equal_magnitudes_selects_left() {
        let left = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let right = Vector4::new(4.0, 3.0, 2.0, 1.0);
        assert_eq!(reference::max(left, right), left);
        assert_eq!(accelerated::max(left, right), left);
        assert_eq!(reference::min(left, right), right);
        assert_eq!(accelerated::min(left, right), right);
    }

    #[test]
    fn vector4_arithmetic_works() {
        assert_eq!(V0 + B, Vector4::new(1.0, 5.0, 2.0, -11.0));
        assert_eq!(&A - &B, Vector4::new(-7.0, 2.0, 1.0, 7.0));
        assert_eq!(A * 2.0, Vector4::new(-6.0, 4.0, -2.0, -4.0));
        assert_eq!(2.0 * &A, Vector4::new(-6.0, 4.0, -2.0, -4.0));
        assert_eq!(A * B, Vector4::new(-12.0, 0.0, 2.0, 18.0));
        assert_eq!(
            Vector4::new(-12.0, 0.0, 2.0, 18.0) / Vector4::new(4.0, 1.0, -2.0, -9.0),
            Vector4::new(-3.0, 0.0, -1.0, -2.0)
        );
        assert_eq!(A / 2.0, Vector4::new(-1.5, 1.0, -0.5, -1.0));
        assert_eq!(-A, Vector4::new(3.0, -2.0, 1.0, 2.0));

        assert_eq!(reference::add(V0, B), Vector4::new(1.0, 5.0, 2.0, -11.0));
        assert_eq!(reference::subtract(A, B), Vector4::new(-7.0, 2.0, 1.0, 7.0));
        assert_eq!(reference::multiply(A, 2.0), Vector4::new(-6.0, 4.0, -2.0, -4.0));
        assert_eq!(reference::component_multiply(A, B), Vector4::new(-12.0, 0.0, 2.0, 18.0));
        assert_eq!(
            reference::component_divide(
                Vector4::new(-12.0, 0.0, 2.0, 18.0),
                Vector4::new(4.0, 1.0, -2.0, -9.0)
            ),
            Vector4::new(-3.0, 0.0, -1.0, -2.0)
        );
        assert_eq!(reference::divide(A, 2.0), Vector4::new(-1.5, 1.0, -0.5, -1.0));
        assert_eq!(reference::negate(A), Vector4::new(3.0, -2.0, 1.0, 2.0));
    }

    #[test]
    fn vector4_compound_assignment_works() {
        let mut v = A;
        v += B;
        v -= &Vector4::ONE;
        v *= 2.0;
        v /= Vector4::new(1.0, 2.0, -4.0, 8.0);
        assert_eq!(v, Vector4::new(0.0, 1.0, 2.0, -3.0));
    }

    #[test]
    fn vector4_dot_projection_and_distance_work() {
        assert_eq!(reference::dot(A, B), 8.0);
        assert_eq!(accelerated::dot(A, B), 8.0);

        let expected = Vector4::new(0.316832, 0.0, -0.158416, -0.71287);
        assert_abs_diff_eq!(reference::project(A, B), expected, epsilon = SCENARIO_EPSILON);
        assert_abs_diff_eq!(accelerated::project(A, B), expected, epsilon = SCENARIO_EPSILON);

        assert_eq!(reference::distance_squared(A, B), 103.0);
        assert_eq!(accelerated::distance_squared(A, B), 103.0);
        assert_abs_diff_eq!(reference::distance(A, B), 10.1489, epsilon = SCENARIO_EPSILON);
        assert_abs_diff_eq!(accelerated::distance(A, B), 10.1489, epsilon = SCENARIO_EPSILON);
    }

    #[test]
    fn projecting_onto_degenerate_normal_gives_zero() {
        let tiny = Vector4::new(1e-30, 0.0, 0.0, 0.0);
        assert_eq!(reference::project(A, Vector4::ZERO), Vector4::ZERO);
        assert_eq!(accelerated::project(A, Vector4::ZERO), Vector4::ZERO);
        assert_eq!(reference::project(A, tiny), Vector4::ZERO);
        assert_eq!(accelerated::project(A, tiny), Vector4::ZERO);
    }

    #[test]
    fn vector4_interpolation_works() {
        let a = Vector4::new(0.0, 2.0, -1.0, -2.0);
        let b = Vector4::new(4.0, 0.0, -2.0, -18.0);
        let expected = Vector4::new(1.0, 1.5, -1.25, -6.0);
        assert_abs_diff_eq!(reference::lerp(a, b, 0.25), expected, epsilon = EPSILON);
        assert_abs_diff_eq!(accelerated::lerp(a, b, 0.25), expected, epsilon = EPSILON);
        assert_eq!(reference::lerp_clamped(a, b, 3.0), b);
        assert_eq!(accelerated::lerp_clamped(a, b, -3.0), a);

        let from = Vector4::same(1.0);
        let to = Vector4::same(2.0);
        for moved in [
            reference::move_towards(from, to, 0.5),
            accelerated::move_towards(from, to, 0.5),
        ] {
            assert_abs_diff_eq!(moved, Vector4::same(1.25), epsilon = EPSILON);
        }
        assert_eq!(reference::move_towards(from, to, 2.0), to);
        assert_eq!(accelerated::move_towards(from, to, 2.0), to);
    }

    #[test]
    fn output_parameter_forms_match_value_forms() {
        let mut result = Vector4::ZERO;
        accelerated::project_into(&A, &B, &mut result);
        assert_eq!(result, accelerated::project(A, B));
        reference::magnitude_clamp_into(&V0, 2.0, &mut result);
        assert_eq!(result, reference::magnitude_clamp(V0, 2.0));
        accelerated::component_clamp_into(&A, &B, &Vector4::same(10.0), &mut result);
        assert_eq!(result, Vector4::new(4.0, 2.0, -1.0, -2.0));
    }

    #[test]
    fn converting_between_vector_sizes_works() {
        let xy = Vector2::new(1.0, 2.0);
        let xyz = Vector3::new(1.0, 2.0, 3.0);
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Vector4::from_vector2(xy, 3.0, 4.0), v);
        assert_eq!(Vector4::from_vector2s(xy, Vector2::new(3.0, 4.0)), v);
        assert_eq!(Vector4::from_vector3(xyz, 4.0), v);
        assert_eq!(Vector4::from(xyz), Vector4::new(1.0, 2.0, 3.0, 0.0));
        assert_eq!(Vector3::from(v), xyz);
        assert_eq!(Vector2::from(v), xy);
        assert_eq!(Vector4::from([1.0, 2.0, 3.0, 4.0]), v);
        assert_eq!(<[f32; 4]>::from(v), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn vector4_indexing_works() {
        let mut v = A;
        assert_eq!(v[3], -2.0);
        v[2] = 7.0;
        *v.w_mut() = 1.0;
        assert_eq!(v, Vector4::new(-3.0, 2.0, 7.0, 1.0));
        assert_eq!(unsafe { v.get_unchecked(0) }, -3.0);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn indexing_vector4_out_of_bounds_panics() {
        let _ = A[4];
    }

    #[test]
    fn formatting_vector4_works() {
        assert_eq!(A.to_string(), "(-3.00, 2.00, -1.00, -2.00)");
        assert_eq!(
            format!("{:?}", Vector4::UNIT_W),
            "Vector4 { x: 0.0, y: 0.0, z: 0.0, w: 1.0 }"
        );
    }

    proptest! {
        #[test]
        fn vector4_paths_agree(
            a in vector4_strategy(1e2),
            b in vector4_strategy(1e2),
            s in 0.1_f32..10.0,
            t in 0.0_f32..1.0,
        ) {
            prop_assert_eq!(reference::add(a, b), accelerated::add(a, b));
            prop_assert_eq!(reference::subtract(a, b), accelerated::subtract(a, b));
            prop_assert_eq!(reference::negate(a), accelerated::negate(a));
            prop_assert_eq!(reference::multiply(a, s), accelerated::multiply(a, s));
            prop_assert_eq!(reference::divide(a, s), accelerated::divide(a, s));
            prop_assert_eq!(reference::component_min(a, b), accelerated::component_min(a, b));
            prop_assert_eq!(reference::component_max(a, b), accelerated::component_max(a, b));
            prop_assert_eq!(reference::dot(a, b), accelerated::dot(a, b));
            prop_assert_eq!(reference::magnitude(a), accelerated::magnitude(a));
            prop_assert_eq!(reference::normalize(a), accelerated::normalize(a));
            prop_assert!(abs_diff_eq!(reference::lerp(a, b, t), accelerated::lerp(a, b, t), epsilon = 1e-3));
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
        fn vector4_dot_is_commutative(a in vector4_strategy(1e3), b in vector4_strategy(1e3)) {
            prop_assert_eq!(accelerated::dot(a, b), accelerated::dot(b, a));
            prop_assert_eq!(reference::dot(a, b), reference::dot(b, a));
        }
    }

    proptest! {
        #[test]
        fn normalized_vector4_has_unit_length(v in vector4_strategy(1e3)) {
            prop_assume!(v.length_squared() > 1e-6);
            prop_assert!(abs_diff_eq!(v.normalized().length(), 1.0, epsilon = 1e-5));
            prop_assert!(abs_diff_eq!(reference::normalize(v).length(), 1.0, epsilon = 1e-5));
        }
    }

    proptest! {
        #[test]
        fn vector4_component_extrema_are_idempotent_and_commutative(
            a in vector4_strategy(1e3),
            b in vector4_strategy(1e3),
        ) {
            prop_assert_eq!(accelerated::component_min(a, a), a);
            prop_assert_eq!(accelerated::component_max(a, a), a);
            prop_assert_eq!(accelerated::component_min(a, b), accelerated::component_min(b, a));
            prop_assert_eq!(accelerated::component_max(a, b), accelerated::component_max(b, a));
        }
    }
}
