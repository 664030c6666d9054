//! Four-component integer vectors.

pub mod accelerated;
pub mod reference;

use crate::vector::{Vector2Int, Vector3Int, Vector4};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A 4-dimensional vector of `i32` components.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
pub struct Vector4Int {
    x: i32,
    y: i32,
    z: i32,
    w: i32,
}

impl Vector4Int {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);
    pub const ONE: Self = Self::new(1, 1, 1, 1);
    pub const UNIT_X: Self = Self::new(1, 0, 0, 0);
    pub const UNIT_Y: Self = Self::new(0, 1, 0, 0);
    pub const UNIT_Z: Self = Self::new(0, 0, 1, 0);
    pub const UNIT_W: Self = Self::new(0, 0, 0, 1);

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a new vector with the same value for every component.
    #[inline]
    pub const fn same(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// The x- and y-components.
    #[inline]
    pub const fn xy(&self) -> Vector2Int {
        Vector2Int::new(self.x, self.y)
    }

    /// The x-, y- and z-components.
    #[inline]
    pub const fn xyz(&self) -> Vector3Int {
        Vector3Int::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn length(&self) -> f32 {
        accelerated::magnitude(*self)
    }

    #[inline]
    pub fn length_squared(&self) -> i32 {
        accelerated::magnitude_squared(*self)
    }

    /// Converts the components to floats.
    #[inline]
    pub fn to_float(&self) -> Vector4 {
        accelerated::to_float(*self)
    }
}

impl From<Vector4Int> for Vector4 {
    #[inline]
    fn from(vector: Vector4Int) -> Self {
        vector.to_float()
    }
}

impl From<Vector4Int> for Vector3Int {
    #[inline]
    fn from(vector: Vector4Int) -> Self {
        vector.xyz()
    }
}

impl From<Vector4Int> for Vector2Int {
    #[inline]
    fn from(vector: Vector4Int) -> Self {
        vector.xy()
    }
}

impl_components!(Vector4Int, i32, 4, [0 => x, x_mut; 1 => y, y_mut; 2 => z, z_mut; 3 => w, w_mut]);

impl fmt::Display for Vector4Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl_binop!(Add, add, Vector4Int, Vector4Int, Vector4Int, |a, b| {
    accelerated::add(a, b)
});

impl_binop!(Sub, sub, Vector4Int, Vector4Int, Vector4Int, |a, b| {
    accelerated::subtract(a, b)
});

impl_binop!(Mul, mul, Vector4Int, i32, Vector4Int, |a, b| {
    accelerated::scale(a, b)
});

impl_binop!(Mul, mul, i32, Vector4Int, Vector4Int, |a, b| {
    accelerated::scale(b, a)
});

impl_binop!(Mul, mul, Vector4Int, Vector4Int, Vector4Int, |a, b| {
    accelerated::multiply(a, b)
});

impl_binop_assign!(AddAssign, add_assign, Vector4Int, Vector4Int, Add, add);
impl_binop_assign!(SubAssign, sub_assign, Vector4Int, Vector4Int, Sub, sub);
impl_binop_assign!(MulAssign, mul_assign, Vector4Int, i32, Mul, mul);
impl_binop_assign!(MulAssign, mul_assign, Vector4Int, Vector4Int, Mul, mul);

impl_unary_op!(Neg, neg, Vector4Int, Vector4Int, |val| {
    accelerated::negate(val)
});

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    const A: Vector4Int = Vector4Int::new(-3, 2, -1, -2);
    const B: Vector4Int = Vector4Int::new(4, 0, -2, -9);

    prop_compose! {
        fn vector4_int_strategy(max_value: i32)(
            x in -max_value..max_value,
            y in -max_value..max_value,
            z in -max_value..max_value,
            w in -max_value..max_value,
        ) -> Vector4Int {
            Vector4Int::new(x, y, z, w)
        }
    }

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
    fn adding_vector4_ints_works() {
        let expected = Vector4Int::new(1, 2, -3, -11);
        assert_eq!(A + B, expected);
        assert_eq!(&A + &B, expected);
        assert_eq!(reference::add(A, B), expected);
        assert_eq!(accelerated::add(A, B), expected);
    }

    #[test]
    fn vector4_int_arithmetic_works() {
        for (difference, scaled, product, negated) in [
            (
                reference::subtract(A, B),
                reference::scale(A, 3),
                reference::multiply(A, B),
                reference::negate(A),
            ),
            (
                accelerated::subtract(A, B),
                accelerated::scale(A, 3),
                accelerated::multiply(A, B),
                accelerated::negate(A),
            ),
            (A - B, A * 3, A * B, -A),
        ] {
            assert_eq!(difference, Vector4Int::new(-7, 2, 1, 7));
            assert_eq!(scaled, Vector4Int::new(-9, 6, -3, -6));
            assert_eq!(product, Vector4Int::new(-12, 0, 2, 18));
            assert_eq!(negated, Vector4Int::new(3, -2, 1, 2));
        }
        assert_eq!(3 * &A, Vector4Int::new(-9, 6, -3, -6));
    }

    #[test]
    fn vector4_int_compound_assignment_works() {
        let mut v = A;
        v += B;
        v -= &Vector4Int::ONE;
        v *= 2;
        v *= Vector4Int::new(1, -1, 1, -1);
        assert_eq!(v, Vector4Int::new(0, -2, -8, 24));
    }

    #[test]
    fn vector4_int_distance_works() {
        assert_eq!(reference::distance_squared(A, B), 103);
        assert_eq!(accelerated::distance_squared(A, B), 103);
        assert_abs_diff_eq!(reference::distance(A, B), 10.1489, epsilon = 1e-4);
        assert_abs_diff_eq!(accelerated::distance(A, B), 10.1489, epsilon = 1e-4);
    }

    #[test]
    fn vector4_int_magnitude_works() {
        let v = Vector4Int::new(-3, 5, 4, -2);
        assert_eq!(reference::magnitude_squared(v), 54);
        assert_eq!(accelerated::magnitude_squared(v), 54);
        assert_abs_diff_eq!(reference::magnitude(v), 7.34847, epsilon = 1e-4);
        assert_abs_diff_eq!(v.length(), 7.34847, epsilon = 1e-4);
    }

    #[test]
    fn vector4_int_component_extrema_work() {
        for (min, max, clamped) in [
            (
                reference::component_min(A, B),
                reference::component_max(A, B),
                reference::component_clamp(A, B, Vector4Int::new(6, 1, 0, 18)),
            ),
            (
                accelerated::component_min(A, B),
                accelerated::component_max(A, B),
                accelerated::component_clamp(A, B, Vector4Int::new(6, 1, 0, 18)),
            ),
        ] {
            assert_eq!(min, Vector4Int::new(-3, 0, -2, -9));
            assert_eq!(max, Vector4Int::new(4, 2, -1, -2));
            assert_eq!(clamped, Vector4Int::new(4, 1, -1, -2));
        }
    }

    #[test]
    fn rounding_float_vector4_to_int_works() {
        let v = Vector4::new(0.0, 0.52, -2.52, 3.41);
        for (ceiled, floored, rounded) in [
            (reference::ceil(v), reference::floor(v), reference::round(v)),
            (accelerated::ceil(v), accelerated::floor(v), accelerated::round(v)),
        ] {
            assert_eq!(ceiled, Vector4Int::new(0, 1, -2, 4));
            assert_eq!(floored, Vector4Int::new(0, 0, -3, 3));
            assert_eq!(rounded, Vector4Int::new(0, 1, -3, 3));
        }
    }

    #[test]
    fn converting_vector4_int_works() {
        let v = Vector4Int::new(1, -2, 3, -4);
        assert_eq!(reference::to_float(v), Vector4::new(1.0, -2.0, 3.0, -4.0));
        assert_eq!(Vector4::from(v), Vector4::new(1.0, -2.0, 3.0, -4.0));
        assert_eq!(Vector3Int::from(v), Vector3Int::new(1, -2, 3));
        assert_eq!(Vector2Int::from(v), Vector2Int::new(1, -2));
        assert_eq!(<[i32; 4]>::from(v), [1, -2, 3, -4]);
    }

    #[test]
    fn output_parameter_forms_match_value_forms() {
        let mut result = Vector4Int::ZERO;
        reference::scale_into(&A, 3, &mut result);
        assert_eq!(result, Vector4Int::new(-9, 6, -3, -6));
        accelerated::round_into(&Vector4::same(1.5), &mut result);
        assert_eq!(result, Vector4Int::same(2));
        let mut float_result = Vector4::ZERO;
        accelerated::to_float_into(&B, &mut float_result);
        assert_eq!(float_result, Vector4::new(4.0, 0.0, -2.0, -9.0));
    }

    #[test]
    fn formatting_vector4_int_works() {
        assert_eq!(A.to_string(), "(-3, 2, -1, -2)");
        assert_eq!(format!("{A:?}"), "Vector4Int { x: -3, y: 2, z: -1, w: -2 }");
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn indexing_vector4_int_out_of_bounds_panics() {
        let _ = B[7];
    }

    proptest! {
        #[test]
        fn vector4_int_paths_agree_exactly(
            a in vector4_int_strategy(10_000),
            b in vector4_int_strategy(10_000),
            s in -100..100,
        ) {
            prop_assert_eq!(reference::add(a, b), accelerated::add(a, b));
            prop_assert_eq!(reference::subtract(a, b), accelerated::subtract(a, b));
            prop_assert_eq!(reference::negate(a), accelerated::negate(a));
            prop_assert_eq!(reference::scale(a, s), accelerated::scale(a, s));
            prop_assert_eq!(reference::multiply(a, b), accelerated::multiply(a, b));
            prop_assert_eq!(reference::component_min(a, b), accelerated::component_min(a, b));
            prop_assert_eq!(reference::component_max(a, b), accelerated::component_max(a, b));
            prop_assert_eq!(reference::magnitude_squared(a), accelerated::magnitude_squared(a));
            prop_assert_eq!(reference::distance_squared(a, b), accelerated::distance_squared(a, b));
            prop_assert_eq!(reference::to_float(a), accelerated::to_float(a));
        }
    }

    proptest! {
        #[test]
        fn vector4_rounding_paths_agree_exactly(v in vector4_strategy(1e6)) {
            prop_assert_eq!(reference::ceil(v), accelerated::ceil(v));
            prop_assert_eq!(reference::floor(v), accelerated::floor(v));
            prop_assert_eq!(reference::round(v), accelerated::round(v));
        }
    }

    proptest! {
        #[test]
        fn vector4_int_component_extrema_are_idempotent_and_commutative(
            a in vector4_int_strategy(i32::MAX),
            b in vector4_int_strategy(i32::MAX),
        ) {
            prop_assert_eq!(accelerated::component_min(a, a), a);
            prop_assert_eq!(accelerated::component_max(a, a), a);
            prop_assert_eq!(accelerated::component_min(a, b), accelerated::component_min(b, a));
            prop_assert_eq!(accelerated::component_max(a, b), accelerated::component_max(b, a));
        }
    }
}
