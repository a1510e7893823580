//! 2D vector value type and helpers.
mod vector2;

pub use vector2::{Vector2, vec2};
