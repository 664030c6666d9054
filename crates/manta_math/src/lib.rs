//! Scalar and vector math with interchangeable reference and SIMD-accelerated
//! implementations.
//!
//! Every operation that has an accelerated implementation also has a
//! reference implementation with the same signature, exposed in sibling
//! `reference` and `accelerated` modules. The [`parity`] module checks that
//! the two agree.

#[macro_use]
mod macros;

#[cfg(feature = "benchmark")]
pub mod benchmark;
pub mod num;
pub mod parity;
pub mod scalar;
pub mod simd;
pub mod vector;

pub use num::Float;
pub use vector::{Vector2, Vector2Int, Vector3, Vector3Int, Vector4, Vector4Int};
