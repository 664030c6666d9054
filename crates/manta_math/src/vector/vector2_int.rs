//! Two-component integer vectors.

pub mod accelerated;
pub mod reference;

use crate::vector::{Vector2, Vector3Int};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A 2-dimensional vector of `i32` components.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
pub struct Vector2Int {
    x: i32,
    y: i32,
}

impl Vector2Int {
    pub const ZERO: Self = Self::new(0, 0);
    pub const ONE: Self = Self::new(1, 1);
    pub const UNIT_X: Self = Self::new(1, 0);
    pub const UNIT_Y: Self = Self::new(0, 1);

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Creates a new vector with the same value for every component.
    #[inline]
    pub const fn same(value: i32) -> Self {
        Self::new(value, value)
    }

    /// Creates a 3-dimensional vector from this vector and the given
    /// z-component.
    #[inline]
    pub const fn extended(&self, z: i32) -> Vector3Int {
        Vector3Int::new(self.x, self.y, z)
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
    pub fn to_float(&self) -> Vector2 {
        accelerated::to_float(*self)
    }
}

impl From<Vector2Int> for Vector2 {
    #[inline]
    fn from(vector: Vector2Int) -> Self {
        vector.to_float()
    }
}

impl_components!(Vector2Int, i32, 2, [0 => x, x_mut; 1 => y, y_mut]);

impl fmt::Display for Vector2Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl_binop!(Add, add, Vector2Int, Vector2Int, Vector2Int, |a, b| {
    accelerated::add(a, b)
});

impl_binop!(Sub, sub, Vector2Int, Vector2Int, Vector2Int, |a, b| {
    accelerated::subtract(a, b)
});

impl_binop!(Mul, mul, Vector2Int, i32, Vector2Int, |a, b| {
    accelerated::scale(a, b)
});

impl_binop!(Mul, mul, i32, Vector2Int, Vector2Int, |a, b| {
    accelerated::scale(b, a)
});

impl_binop!(Mul, mul, Vector2Int, Vector2Int, Vector2Int, |a, b| {
    accelerated::multiply(a, b)
});

impl_binop_assign!(AddAssign, add_assign, Vector2Int, Vector2Int, Add, add);
impl_binop_assign!(SubAssign, sub_assign, Vector2Int, Vector2Int, Sub, sub);
impl_binop_assign!(MulAssign, mul_assign, Vector2Int, i32, Mul, mul);
impl_binop_assign!(MulAssign, mul_assign, Vector2Int, Vector2Int, Mul, mul);

impl_unary_op!(Neg, neg, Vector2Int, Vector2Int, |val| {
    accelerated::negate(val)
});

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    const EPSILON: f32 = 1e-6;

    prop_compose! {
        fn vector2_int_strategy(max_value: i32)(
            x in -max_value..max_value,
            y in -max_value..max_value,
        ) -> Vector2Int {
            Vector2Int::new(x, y)
        }
    }

    prop_compose! {
        fn vector2_strategy(max_value: f32)(
            x in -max_value..max_value,
            y in -max_value..max_value,
        ) -> Vector2 {
            Vector2::new(x, y)
        }
    }

    #[test]
    fn vector2_int_arithmetic_works() {
        let a = Vector2Int::new(-3, 2);
        let b = Vector2Int::new(4, -9);

        assert_eq!(&a + &b, Vector2Int::new(1, -7));
        assert_eq!(a - b, Vector2Int::new(-7, 11));
        assert_eq!(a * 3, Vector2Int::new(-9, 6));
        assert_eq!(-2 * &a, Vector2Int::new(6, -4));
        assert_eq!(a * b, Vector2Int::new(-12, -18));
        assert_eq!(-a, Vector2Int::new(3, -2));

        for (sum, difference, scaled, product, negated) in [
            (
                reference::add(a, b),
                reference::subtract(a, b),
                reference::scale(a, 3),
                reference::multiply(a, b),
                reference::negate(a),
            ),
            (
                accelerated::add(a, b),
                accelerated::subtract(a, b),
                accelerated::scale(a, 3),
                accelerated::multiply(a, b),
                accelerated::negate(a),
            ),
        ] {
            assert_eq!(sum, Vector2Int::new(1, -7));
            assert_eq!(difference, Vector2Int::new(-7, 11));
            assert_eq!(scaled, Vector2Int::new(-9, 6));
            assert_eq!(product, Vector2Int::new(-12, -18));
            assert_eq!(negated, Vector2Int::new(3, -2));
        }
    }

    #[test]
    fn vector2_int_compound_assignment_works() {
        let mut v = Vector2Int::new(1, 2);
        v += Vector2Int::ONE;
        v *= 3;
        v -= &Vector2Int::UNIT_Y;
        v *= Vector2Int::new(-1, 2);
        assert_eq!(v, Vector2Int::new(-6, 16));
    }

    #[test]
    fn vector2_int_magnitude_works() {
        let v = Vector2Int::new(3, -4);
        assert_eq!(reference::magnitude_squared(v), 25);
        assert_eq!(accelerated::magnitude_squared(v), 25);
        assert_eq!(v.length_squared(), 25);
        assert_abs_diff_eq!(reference::magnitude(v), 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.length(), 5.0, epsilon = EPSILON);
    }

    #[test]
    fn vector2_int_distance_works() {
        let a = Vector2Int::new(-3, 2);
        let b = Vector2Int::new(4, 0);
        assert_eq!(reference::distance_squared(a, b), 53);
        assert_eq!(accelerated::distance_squared(a, b), 53);
        assert_abs_diff_eq!(reference::distance(a, b), 7.28011, epsilon = 1e-4);
        assert_abs_diff_eq!(accelerated::distance(a, b), 7.28011, epsilon = 1e-4);
    }

    #[test]
    fn vector2_int_component_extrema_work() {
        let a = Vector2Int::new(-3, 5);
        let b = Vector2Int::new(4, -2);
        assert_eq!(reference::component_min(a, b), Vector2Int::new(-3, -2));
        assert_eq!(accelerated::component_min(a, b), Vector2Int::new(-3, -2));
        assert_eq!(reference::component_max(a, b), Vector2Int::new(4, 5));
        assert_eq!(accelerated::component_max(a, b), Vector2Int::new(4, 5));

        let lower = Vector2Int::new(0, 0);
        let upper = Vector2Int::new(2, 2);
        assert_eq!(reference::component_clamp(a, lower, upper), Vector2Int::new(0, 2));
        assert_eq!(accelerated::component_clamp(a, lower, upper), Vector2Int::new(0, 2));
    }

    #[test]
    fn rounding_float_vector2_to_int_works() {
        let v = Vector2::new(0.52, -2.52);
        for (ceiled, floored, rounded) in [
            (reference::ceil(v), reference::floor(v), reference::round(v)),
            (accelerated::ceil(v), accelerated::floor(v), accelerated::round(v)),
        ] {
            assert_eq!(ceiled, Vector2Int::new(1, -2));
            assert_eq!(floored, Vector2Int::new(0, -3));
            assert_eq!(rounded, Vector2Int::new(1, -3));
        }
    }

    #[test]
    fn rounding_half_vector2_components_goes_to_even() {
        let v = Vector2::new(2.5, -1.5);
        assert_eq!(reference::round(v), Vector2Int::new(2, -2));
        assert_eq!(accelerated::round(v), Vector2Int::new(2, -2));
    }

    #[test]
    fn converting_vector2_int_to_float_works() {
        let v = Vector2Int::new(-7, 12);
        assert_eq!(reference::to_float(v), Vector2::new(-7.0, 12.0));
        assert_eq!(Vector2::from(v), Vector2::new(-7.0, 12.0));
        assert_eq!(v.extended(3), Vector3Int::new(-7, 12, 3));
    }

    #[test]
    fn output_parameter_forms_match_value_forms() {
        let a = Vector2Int::new(-3, 2);
        let b = Vector2Int::new(4, 0);
        let mut result = Vector2Int::ZERO;

        accelerated::scale_into(&a, 5, &mut result);
        assert_eq!(result, Vector2Int::new(-15, 10));
        reference::component_clamp_into(&a, &Vector2Int::ZERO, &b, &mut result);
        assert_eq!(result, Vector2Int::new(0, 0));
        accelerated::floor_into(&Vector2::new(1.5, -0.5), &mut result);
        assert_eq!(result, Vector2Int::new(1, -1));
    }

    #[test]
    fn formatting_vector2_int_works() {
        let v = Vector2Int::new(1, -2);
        assert_eq!(v.to_string(), "(1, -2)");
        assert_eq!(format!("{v:?}"), "Vector2Int { x: 1, y: -2 }");
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn indexing_vector2_int_out_of_bounds_panics() {
        let mut v = Vector2Int::new(1, 2);
        v[2] = 0;
    }

    proptest! {
        #[test]
        fn vector2_int_paths_agree_exactly(
            a in vector2_int_strategy(10_000),
            b in vector2_int_strategy(10_000),
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
            prop_assert_eq!(reference::magnitude(a), accelerated::magnitude(a));
            prop_assert_eq!(reference::to_float(a), accelerated::to_float(a));
        }
    }

    proptest! {
        #[test]
        fn vector2_rounding_paths_agree_exactly(v in vector2_strategy(1e6)) {
            prop_assert_eq!(reference::ceil(v), accelerated::ceil(v));
            prop_assert_eq!(reference::floor(v), accelerated::floor(v));
            prop_assert_eq!(reference::round(v), accelerated::round(v));
        }
    }

    proptest! {
        #[test]
        fn vector2_int_component_extrema_are_idempotent_and_commutative(
            a in vector2_int_strategy(i32::MAX),
            b in vector2_int_strategy(i32::MAX),
        ) {
            prop_assert_eq!(accelerated::component_min(a, a), a);
            prop_assert_eq!(accelerated::component_max(a, a), a);
            prop_assert_eq!(accelerated::component_min(a, b), accelerated::component_min(b, a));
            prop_assert_eq!(accelerated::component_max(a, b), accelerated::component_max(b, a));
        }
    }
}
