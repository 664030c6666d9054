//! Numbers and numerics.

use num_traits as nt;

/// Gathers traits useful for working with generic floating point types.
pub trait Float:
    nt::Float + nt::FromPrimitive + nt::ToPrimitive + approx::AbsDiffEq + approx::RelativeEq
{
    const ZERO: Self;
    const ONE: Self;
    const NEG_ONE: Self;
    const TWO: Self;
    const THREE: Self;
    const FOUR: Self;
    const FIVE: Self;
    const ONE_HALF: Self;
    const PI: Self;
    const TWO_PI: Self;
    /// Smallest positive normal value.
    const MIN_POSITIVE: Self;
    const MAX: Self;
}

macro_rules! impl_float {
    ($f:tt) => {
        impl Float for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const NEG_ONE: Self = -1.0;
            const TWO: Self = 2.0;
            const THREE: Self = 3.0;
            const FOUR: Self = 4.0;
            const FIVE: Self = 5.0;
            const ONE_HALF: Self = 0.5;
            const PI: Self = std::$f::consts::PI;
            const TWO_PI: Self = std::$f::consts::TAU;
            const MIN_POSITIVE: Self = $f::MIN_POSITIVE;
            const MAX: Self = $f::MAX;
        }
    };
}

impl_float!(f32);
impl_float!(f64);
