//! Vectors.
//!
//! All vector types are `repr(C)` structs of consecutive components with no
//! padding, so they can be viewed as arrays of their component type and
//! loaded directly into SIMD registers.
//!
//! The two- and four-component types come with a `reference` and an
//! `accelerated` module exposing the same operations, computed with plain
//! arithmetic and with the [`Accelerated`](crate::simd::Accelerated) SIMD
//! backend respectively. The operator implementations and convenience methods
//! on the types use the accelerated paths. The three-component types only
//! have plain arithmetic implementations.

pub mod vector2;
pub mod vector2_int;
pub mod vector3;
pub mod vector3_int;
pub mod vector4;
pub mod vector4_int;

pub use vector2::Vector2;
pub use vector2_int::Vector2Int;
pub use vector3::Vector3;
pub use vector3_int::Vector3Int;
pub use vector4::Vector4;
pub use vector4_int::Vector4Int;

/// The smallest positive subnormal `f32`. Projections onto normals with a
/// squared length below this give the zero vector.
pub(crate) const SMALLEST_POSITIVE_SUBNORMAL: f32 = f32::from_bits(1);

/// Denominators below this make angle computations return zero.
pub(crate) const ANGLE_DENOMINATOR_THRESHOLD: f32 = 1e-15;
