//! Immutable 2D vector arithmetic: addition, scaling, magnitude, normalization, distance,
//! dot/determinant products and angles between vectors.
//!
//! All vector operations are non-destructive, they return new values and leave the receiver and
//! arguments unchanged. Floating point degeneracies (zero divisors, normalizing a zero vector)
//! are not guarded and propagate as infinity/NaN.
//!
//! # Examples
//!
//! ```
//! # use vector2d::core::math::*;
//! # use vector2d::core::traits::*;
//! let a = vec2(1.0, 0.0);
//! let b = vec2(0.0, 1.0);
//!
//! assert!(a.angle(b).fuzzy_eq(std::f64::consts::FRAC_PI_2));
//! assert_eq!(vec2(1.0, 2.0).det(vec2(3.0, 4.0)), -2.0);
//! assert_eq!(Vector2::new(3.0, 4.0).magnitude(), 5.0);
//! ```
#[macro_use]
mod macros;

pub mod core;
