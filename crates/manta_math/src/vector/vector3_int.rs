//! Three-component integer vectors.

use crate::{
    scalar::reference as scalar,
    vector::{Vector2Int, Vector3},
};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A 3-dimensional vector of `i32` components.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
pub struct Vector3Int {
    x: i32,
    y: i32,
    z: i32,
}

impl Vector3Int {
    pub const ZERO: Self = Self::new(0, 0, 0);
    pub const ONE: Self = Self::new(1, 1, 1);
    pub const UNIT_X: Self = Self::new(1, 0, 0);
    pub const UNIT_Y: Self = Self::new(0, 1, 0);
    pub const UNIT_Z: Self = Self::new(0, 0, 1);
    pub const LEFT: Self = Self::new(-1, 0, 0);
    pub const RIGHT: Self = Self::new(1, 0, 0);
    pub const DOWN: Self = Self::new(0, -1, 0);
    pub const UP: Self = Self::new(0, 1, 0);
    pub const FORWARD: Self = Self::new(0, 0, -1);
    pub const BACKWARD: Self = Self::new(0, 0, 1);

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Creates a new vector with the same value for every component.
    #[inline]
    pub const fn same(value: i32) -> Self {
        Self::new(value, value, value)
    }

    /// The x- and y-components.
    #[inline]
    pub const fn xy(&self) -> Vector2Int {
        Vector2Int::new(self.x, self.y)
    }

    #[inline]
    pub fn length(&self) -> f32 {
        magnitude(*self)
    }

    #[inline]
    pub fn length_squared(&self) -> i32 {
        magnitude_squared(*self)
    }

    /// Converts the components to floats.
    #[inline]
    pub fn to_float(&self) -> Vector3 {
        to_float(*self)
    }
}

impl From<Vector3Int> for Vector3 {
    #[inline]
    fn from(vector: Vector3Int) -> Self {
        vector.to_float()
    }
}

impl From<Vector3Int> for Vector2Int {
    #[inline]
    fn from(vector: Vector3Int) -> Self {
        vector.xy()
    }
}

#[inline]
fn zip(a: Vector3Int, b: Vector3Int, f: impl Fn(i32, i32) -> i32) -> Vector3Int {
    Vector3Int::new(f(a.x, b.x), f(a.y, b.y), f(a.z, b.z))
}

#[inline]
pub fn component_min(a: Vector3Int, b: Vector3Int) -> Vector3Int {
    zip(a, b, scalar::min)
}

#[inline]
pub fn component_max(a: Vector3Int, b: Vector3Int) -> Vector3Int {
    zip(a, b, scalar::max)
}

#[inline]
pub fn component_clamp(vector: Vector3Int, min: Vector3Int, max: Vector3Int) -> Vector3Int {
    component_max(component_min(vector, max), min)
}

#[inline]
pub fn ceil(vector: Vector3) -> Vector3Int {
    Vector3Int::new(
        scalar::ceil_to_int(vector.x()),
        scalar::ceil_to_int(vector.y()),
        scalar::ceil_to_int(vector.z()),
    )
}

#[inline]
pub fn floor(vector: Vector3) -> Vector3Int {
    Vector3Int::new(
        scalar::floor_to_int(vector.x()),
        scalar::floor_to_int(vector.y()),
        scalar::floor_to_int(vector.z()),
    )
}

/// Rounds each component to the nearest integer, with ties to even.
#[inline]
pub fn round(vector: Vector3) -> Vector3Int {
    Vector3Int::new(
        scalar::round_to_int(vector.x()),
        scalar::round_to_int(vector.y()),
        scalar::round_to_int(vector.z()),
    )
}

#[inline]
pub fn magnitude(vector: Vector3Int) -> f32 {
    scalar::sqrt(magnitude_squared(vector) as f32)
}

#[inline]
pub fn magnitude_squared(vector: Vector3Int) -> i32 {
    vector.x * vector.x + vector.y * vector.y + vector.z * vector.z
}

#[inline]
pub fn add(a: Vector3Int, b: Vector3Int) -> Vector3Int {
    zip(a, b, |a, b| a + b)
}

#[inline]
pub fn subtract(a: Vector3Int, b: Vector3Int) -> Vector3Int {
    zip(a, b, |a, b| a - b)
}

#[inline]
pub fn negate(vector: Vector3Int) -> Vector3Int {
    Vector3Int::new(-vector.x, -vector.y, -vector.z)
}

#[inline]
pub fn scale(vector: Vector3Int, factor: i32) -> Vector3Int {
    Vector3Int::new(vector.x * factor, vector.y * factor, vector.z * factor)
}

#[inline]
pub fn multiply(a: Vector3Int, b: Vector3Int) -> Vector3Int {
    zip(a, b, |a, b| a * b)
}

#[inline]
pub fn distance(a: Vector3Int, b: Vector3Int) -> f32 {
    magnitude(subtract(a, b))
}

#[inline]
pub fn distance_squared(a: Vector3Int, b: Vector3Int) -> i32 {
    magnitude_squared(subtract(a, b))
}

#[inline]
pub fn to_float(vector: Vector3Int) -> Vector3 {
    Vector3::new(vector.x as f32, vector.y as f32, vector.z as f32)
}

define_into_variants! {
    component_min => component_min_into(a: Vector3Int, b: Vector3Int) -> Vector3Int;
    component_max => component_max_into(a: Vector3Int, b: Vector3Int) -> Vector3Int;
    component_clamp => component_clamp_into(vector: Vector3Int, min: Vector3Int, max: Vector3Int) -> Vector3Int;
    ceil => ceil_into(vector: Vector3) -> Vector3Int;
    floor => floor_into(vector: Vector3) -> Vector3Int;
    round => round_into(vector: Vector3) -> Vector3Int;
    add => add_into(a: Vector3Int, b: Vector3Int) -> Vector3Int;
    subtract => subtract_into(a: Vector3Int, b: Vector3Int) -> Vector3Int;
    negate => negate_into(vector: Vector3Int) -> Vector3Int;
    scale => scale_into(vector: Vector3Int; factor: i32) -> Vector3Int;
    multiply => multiply_into(a: Vector3Int, b: Vector3Int) -> Vector3Int;
    to_float => to_float_into(vector: Vector3Int) -> Vector3;
}

impl_components!(Vector3Int, i32, 3, [0 => x, x_mut; 1 => y, y_mut; 2 => z, z_mut]);

impl fmt::Display for Vector3Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl_binop!(Add, add, Vector3Int, Vector3Int, Vector3Int, |a, b| {
    add(a, b)
});

impl_binop!(Sub, sub, Vector3Int, Vector3Int, Vector3Int, |a, b| {
    subtract(a, b)
});

impl_binop!(Mul, mul, Vector3Int, i32, Vector3Int, |a, b| {
    scale(a, b)
});

impl_binop!(Mul, mul, i32, Vector3Int, Vector3Int, |a, b| {
    scale(b, a)
});

impl_binop!(Mul, mul, Vector3Int, Vector3Int, Vector3Int, |a, b| {
    multiply(a, b)
});

impl_binop_assign!(AddAssign, add_assign, Vector3Int, Vector3Int, Add, add);
impl_binop_assign!(SubAssign, sub_assign, Vector3Int, Vector3Int, Sub, sub);
impl_binop_assign!(MulAssign, mul_assign, Vector3Int, i32, Mul, mul);
impl_binop_assign!(MulAssign, mul_assign, Vector3Int, Vector3Int, Mul, mul);

impl_unary_op!(Neg, neg, Vector3Int, Vector3Int, |val| { negate(val) });

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::collections::HashSet;

    const A: Vector3Int = Vector3Int::new(-3, 2, -1);
    const B: Vector3Int = Vector3Int::new(4, 0, -2);

    #[test]
    fn vector3_int_arithmetic_works() {
        assert_eq!(A + B, Vector3Int::new(1, 2, -3));
        assert_eq!(A - B, Vector3Int::new(-7, 2, 1));
        assert_eq!(A * 3, Vector3Int::new(-9, 6, -3));
        assert_eq!(3 * A, Vector3Int::new(-9, 6, -3));
        assert_eq!(A * B, Vector3Int::new(-12, 0, 2));
        assert_eq!(-A, Vector3Int::new(3, -2, 1));

        let mut v = A;
        v += B;
        v -= Vector3Int::ONE;
        v *= -2;
        assert_eq!(v, Vector3Int::new(0, -2, 8));
    }

    #[test]
    fn vector3_int_component_extrema_work() {
        assert_eq!(component_min(A, B), Vector3Int::new(-3, 0, -2));
        assert_eq!(component_max(A, B), Vector3Int::new(4, 2, -1));
        assert_eq!(
            component_clamp(A, Vector3Int::ZERO, Vector3Int::ONE),
            Vector3Int::new(0, 1, 0)
        );
    }

    #[test]
    fn vector3_int_distance_works() {
        assert_eq!(A.length_squared(), 14);
        assert_abs_diff_eq!(A.length(), 14.0_f32.sqrt(), epsilon = 1e-6);
        assert_eq!(distance_squared(A, B), 54);
        assert_abs_diff_eq!(distance(A, B), 7.34847, epsilon = 1e-4);
    }

    #[test]
    fn rounding_float_vector3_to_int_works() {
        let v = Vector3::new(0.52, -2.52, 3.5);
        assert_eq!(ceil(v), Vector3Int::new(1, -2, 4));
        assert_eq!(floor(v), Vector3Int::new(0, -3, 3));
        assert_eq!(round(v), Vector3Int::new(1, -3, 4));
    }

    #[test]
    fn converting_vector3_int_works() {
        assert_eq!(Vector3::from(A), Vector3::new(-3.0, 2.0, -1.0));
        assert_eq!(Vector2Int::from(A), Vector2Int::new(-3, 2));
        assert_eq!(Vector3Int::from([1, 2, 3]), Vector3Int::new(1, 2, 3));

        let mut result = Vector3::ZERO;
        to_float_into(&B, &mut result);
        assert_eq!(result, Vector3::new(4.0, 0.0, -2.0));
    }

    #[test]
    fn vector3_ints_can_be_hashed() {
        let set: HashSet<_> = [A, B, A].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn formatting_vector3_int_works() {
        assert_eq!(A.to_string(), "(-3, 2, -1)");
        assert_eq!(format!("{A:?}"), "Vector3Int { x: -3, y: 2, z: -1 }");
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn indexing_vector3_int_out_of_bounds_panics() {
        let _ = A[3];
    }
}
