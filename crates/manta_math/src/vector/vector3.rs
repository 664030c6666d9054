//! Three-component float vectors.
//!
//! Three components do not fill a SIMD register, so all operations use plain
//! arithmetic.

use crate::{
    scalar::reference as scalar,
    vector::{ANGLE_DENOMINATOR_THRESHOLD, SMALLEST_POSITIVE_SUBNORMAL, Vector2},
};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A 3-dimensional vector of `f32` components.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    x: f32,
    y: f32,
    z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const FORWARD: Self = Self::new(0.0, 0.0, -1.0);
    pub const BACKWARD: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a new vector with the same value for every component.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Creates a vector from a 2-dimensional vector and the z-component.
    #[inline]
    pub const fn from_vector2(xy: Vector2, z: f32) -> Self {
        Self::new(xy.x(), xy.y(), z)
    }

    /// The x- and y-components.
    #[inline]
    pub const fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn length(&self) -> f32 {
        magnitude(*self)
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        magnitude_squared(*self)
    }

    /// Computes the normalized version of the vector. A zero vector gives NaN
    /// components.
    #[inline]
    pub fn normalized(&self) -> Self {
        normalize(*self)
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        dot(*self, *other)
    }

    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        cross(*self, *other)
    }
}

impl From<Vector3> for Vector2 {
    #[inline]
    fn from(vector: Vector3) -> Self {
        vector.xy()
    }
}

#[inline]
fn map(vector: Vector3, f: impl Fn(f32) -> f32) -> Vector3 {
    Vector3::new(f(vector.x), f(vector.y), f(vector.z))
}

#[inline]
fn zip(a: Vector3, b: Vector3, f: impl Fn(f32, f32) -> f32) -> Vector3 {
    Vector3::new(f(a.x, b.x), f(a.y, b.y), f(a.z, b.z))
}

#[inline]
pub fn component_min(a: Vector3, b: Vector3) -> Vector3 {
    zip(a, b, scalar::min)
}

#[inline]
pub fn component_max(a: Vector3, b: Vector3) -> Vector3 {
    zip(a, b, scalar::max)
}

#[inline]
pub fn component_clamp(vector: Vector3, min: Vector3, max: Vector3) -> Vector3 {
    component_max(component_min(vector, max), min)
}

/// Returns the vector with the smaller magnitude, or `right` if the
/// magnitudes are equal.
#[inline]
pub fn min(left: Vector3, right: Vector3) -> Vector3 {
    if magnitude_squared(left) < magnitude_squared(right) {
        left
    } else {
        right
    }
}

/// Returns the vector with the larger magnitude, or `left` if the
/// magnitudes are equal.
#[inline]
pub fn max(left: Vector3, right: Vector3) -> Vector3 {
    if magnitude_squared(left) >= magnitude_squared(right) {
        left
    } else {
        right
    }
}

/// Scales the vector down to `max_length` if it is longer.
#[inline]
pub fn magnitude_clamp(vector: Vector3, max_length: f32) -> Vector3 {
    if magnitude_squared(vector) > max_length * max_length {
        multiply(normalize(vector), max_length)
    } else {
        vector
    }
}

#[inline]
pub fn magnitude(vector: Vector3) -> f32 {
    scalar::sqrt(magnitude_squared(vector))
}

#[inline]
pub fn magnitude_fast(vector: Vector3) -> f32 {
    let length_squared = magnitude_squared(vector);
    length_squared * scalar::inv_sqrt_fast(length_squared)
}

#[inline]
pub fn magnitude_squared(vector: Vector3) -> f32 {
    dot(vector, vector)
}

/// Multiplies the vector by its inverse length.
#[inline]
pub fn normalize(vector: Vector3) -> Vector3 {
    multiply(vector, 1.0 / magnitude(vector))
}

#[inline]
pub fn normalize_fast(vector: Vector3) -> Vector3 {
    multiply(vector, scalar::inv_sqrt_fast(magnitude_squared(vector)))
}

#[inline]
pub fn add(a: Vector3, b: Vector3) -> Vector3 {
    zip(a, b, |a, b| a + b)
}

#[inline]
pub fn subtract(a: Vector3, b: Vector3) -> Vector3 {
    zip(a, b, |a, b| a - b)
}

#[inline]
pub fn negate(vector: Vector3) -> Vector3 {
    map(vector, |x| -x)
}

#[inline]
pub fn multiply(vector: Vector3, scale: f32) -> Vector3 {
    map(vector, |x| x * scale)
}

#[inline]
pub fn component_multiply(a: Vector3, b: Vector3) -> Vector3 {
    zip(a, b, |a, b| a * b)
}

#[inline]
pub fn divide(vector: Vector3, divisor: f32) -> Vector3 {
    map(vector, |x| x / divisor)
}

#[inline]
pub fn component_divide(a: Vector3, b: Vector3) -> Vector3 {
    zip(a, b, |a, b| a / b)
}

#[inline]
pub fn dot(a: Vector3, b: Vector3) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

#[inline]
pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    Vector3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Projects the vector onto `normal`. A normal with a squared length not
/// above the smallest positive subnormal gives the zero vector.
#[inline]
pub fn project(vector: Vector3, normal: Vector3) -> Vector3 {
    let normal_length_squared = magnitude_squared(normal);
    if normal_length_squared > SMALLEST_POSITIVE_SUBNORMAL {
        multiply(normal, dot(vector, normal) / normal_length_squared)
    } else {
        Vector3::ZERO
    }
}

/// Removes the component of the vector along the plane normal.
#[inline]
pub fn project_on_plane(vector: Vector3, plane_normal: Vector3) -> Vector3 {
    subtract(vector, project(vector, plane_normal))
}

/// Reflects the vector off the plane with the given normal.
#[inline]
pub fn reflect(vector: Vector3, normal: Vector3) -> Vector3 {
    subtract(vector, multiply(normal, 2.0 * dot(vector, normal)))
}

#[inline]
pub fn distance(a: Vector3, b: Vector3) -> f32 {
    magnitude(subtract(a, b))
}

#[inline]
pub fn distance_squared(a: Vector3, b: Vector3) -> f32 {
    magnitude_squared(subtract(a, b))
}

/// Computes the unsigned angle between the vectors in radians, or zero if
/// either is too short.
#[inline]
pub fn angle(from: Vector3, to: Vector3) -> f32 {
    let denominator = scalar::sqrt(magnitude_squared(from) * magnitude_squared(to));
    if denominator < ANGLE_DENOMINATOR_THRESHOLD {
        0.0
    } else {
        scalar::clamp(dot(from, to) / denominator, -1.0, 1.0).acos()
    }
}

/// Computes the angle between the vectors, negative when the rotation from
/// `from` to `to` is clockwise around `axis`.
#[inline]
pub fn signed_angle(from: Vector3, to: Vector3, axis: Vector3) -> f32 {
    scalar::sign(dot(axis, cross(from, to))) * angle(from, to)
}

#[inline]
pub fn lerp(a: Vector3, b: Vector3, t: f32) -> Vector3 {
    zip(a, b, |a, b| t * (b - a) + a)
}

#[inline]
pub fn lerp_clamped(a: Vector3, b: Vector3, t: f32) -> Vector3 {
    lerp(a, b, scalar::clamp01(t))
}

/// Moves `a` towards `b` by a distance of at most `max_delta`.
#[inline]
pub fn move_towards(a: Vector3, b: Vector3, max_delta: f32) -> Vector3 {
    let delta = subtract(b, a);
    if magnitude_squared(delta) <= max_delta * max_delta {
        b
    } else {
        add(a, multiply(normalize(delta), max_delta))
    }
}

/// Evaluates the point with barycentric coordinates `u` (weight of `b`) and
/// `v` (weight of `c`) in the triangle `(a, b, c)`.
#[inline]
pub fn barycentric(a: Vector3, b: Vector3, c: Vector3, u: f32, v: f32) -> Vector3 {
    Vector3::new(
        scalar::barycentric(a.x, b.x, c.x, u, v),
        scalar::barycentric(a.y, b.y, c.y, u, v),
        scalar::barycentric(a.z, b.z, c.z, u, v),
    )
}

/// Catmull-Rom spline interpolation between `b` and `c`.
#[inline]
pub fn catmull_rom(a: Vector3, b: Vector3, c: Vector3, d: Vector3, t: f32) -> Vector3 {
    Vector3::new(
        scalar::catmull_rom(a.x, b.x, c.x, d.x, t),
        scalar::catmull_rom(a.y, b.y, c.y, d.y, t),
        scalar::catmull_rom(a.z, b.z, c.z, d.z, t),
    )
}

#[inline]
pub fn hermite(p0: Vector3, m0: Vector3, p1: Vector3, m1: Vector3, t: f32) -> Vector3 {
    Vector3::new(
        scalar::hermite(p0.x, m0.x, p1.x, m1.x, t),
        scalar::hermite(p0.y, m0.y, p1.y, m1.y, t),
        scalar::hermite(p0.z, m0.z, p1.z, m1.z, t),
    )
}

#[inline]
pub fn smooth_step(a: Vector3, b: Vector3, t: f32) -> Vector3 {
    zip(a, b, |a, b| scalar::smooth_step(a, b, t))
}

/// Normalizes `normal`, makes `tangent` a unit vector orthogonal to it and
/// returns the binormal completing the frame.
pub fn ortho_normalize(normal: &mut Vector3, tangent: &mut Vector3) -> Vector3 {
    *normal = normalize(*normal);
    let binormal = normalize(cross(*normal, *tangent));
    *tangent = cross(binormal, *normal);
    binormal
}

define_into_variants! {
    component_min => component_min_into(a: Vector3, b: Vector3) -> Vector3;
    component_max => component_max_into(a: Vector3, b: Vector3) -> Vector3;
    component_clamp => component_clamp_into(vector: Vector3, min: Vector3, max: Vector3) -> Vector3;
    min => min_into(left: Vector3, right: Vector3) -> Vector3;
    max => max_into(left: Vector3, right: Vector3) -> Vector3;
    magnitude_clamp => magnitude_clamp_into(vector: Vector3; max_length: f32) -> Vector3;
    normalize => normalize_into(vector: Vector3) -> Vector3;
    normalize_fast => normalize_fast_into(vector: Vector3) -> Vector3;
    add => add_into(a: Vector3, b: Vector3) -> Vector3;
    subtract => subtract_into(a: Vector3, b: Vector3) -> Vector3;
    negate => negate_into(vector: Vector3) -> Vector3;
    multiply => multiply_into(vector: Vector3; scale: f32) -> Vector3;
    component_multiply => component_multiply_into(a: Vector3, b: Vector3) -> Vector3;
    divide => divide_into(vector: Vector3; divisor: f32) -> Vector3;
    component_divide => component_divide_into(a: Vector3, b: Vector3) -> Vector3;
    cross => cross_into(a: Vector3, b: Vector3) -> Vector3;
    project => project_into(vector: Vector3, normal: Vector3) -> Vector3;
    project_on_plane => project_on_plane_into(vector: Vector3, plane_normal: Vector3) -> Vector3;
    reflect => reflect_into(vector: Vector3, normal: Vector3) -> Vector3;
    lerp => lerp_into(a: Vector3, b: Vector3; t: f32) -> Vector3;
    lerp_clamped => lerp_clamped_into(a: Vector3, b: Vector3; t: f32) -> Vector3;
    move_towards => move_towards_into(a: Vector3, b: Vector3; max_delta: f32) -> Vector3;
    barycentric => barycentric_into(a: Vector3, b: Vector3, c: Vector3; u: f32, v: f32) -> Vector3;
    catmull_rom => catmull_rom_into(a: Vector3, b: Vector3, c: Vector3, d: Vector3; t: f32) -> Vector3;
    hermite => hermite_into(p0: Vector3, m0: Vector3, p1: Vector3, m1: Vector3; t: f32) -> Vector3;
    smooth_step => smooth_step_into(a: Vector3, b: Vector3; t: f32) -> Vector3;
}

impl_components!(Vector3, f32, 3, [0 => x, x_mut; 1 => y, y_mut; 2 => z, z_mut]);

impl_approx_eq!(Vector3, [x, y, z]);

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

impl_binop!(Add, add, Vector3, Vector3, Vector3, |a, b| { add(a, b) });

impl_binop!(Sub, sub, Vector3, Vector3, Vector3, |a, b| {
    subtract(a, b)
});

impl_binop!(Mul, mul, Vector3, f32, Vector3, |a, b| { multiply(a, b) });

impl_binop!(Mul, mul, f32, Vector3, Vector3, |a, b| { multiply(b, a) });

impl_binop!(Mul, mul, Vector3, Vector3, Vector3, |a, b| {
    component_multiply(a, b)
});

impl_binop!(Div, div, Vector3, f32, Vector3, |a, b| { divide(a, b) });

impl_binop!(Div, div, Vector3, Vector3, Vector3, |a, b| {
    component_divide(a, b)
});

impl_binop_assign!(AddAssign, add_assign, Vector3, Vector3, Add, add);
impl_binop_assign!(SubAssign, sub_assign, Vector3, Vector3, Sub, sub);
impl_binop_assign!(MulAssign, mul_assign, Vector3, f32, Mul, mul);
impl_binop_assign!(MulAssign, mul_assign, Vector3, Vector3, Mul, mul);
impl_binop_assign!(DivAssign, div_assign, Vector3, f32, Div, div);
impl_binop_assign!(DivAssign, div_assign, Vector3, Vector3, Div, div);

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| { negate(val) });
