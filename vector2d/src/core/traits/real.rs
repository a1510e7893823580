use super::FuzzyEq;

/// Scalar type a [Vector2](crate::core::math::Vector2) can be built from (`f32` or `f64`).
///
/// Bundles the floating point operations needed by the vector methods (square root, inverse
/// cosine, two argument arc tangent) with fuzzy comparison.
pub trait Real:
    num_traits::real::Real
    + FuzzyEq
    + std::default::Default
    + std::fmt::Debug
    + 'static
{
    /// Archimedes' constant for this precision.
    fn pi() -> Self;
}

impl Real for f32 {
    #[inline]
    fn pi() -> Self {
        std::f32::consts::PI
    }
}

impl Real for f64 {
    #[inline]
    fn pi() -> Self {
        std::f64::consts::PI
    }
}
