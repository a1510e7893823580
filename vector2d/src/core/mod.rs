//! Core module has the vector math and the numeric traits it is built on.
pub mod math;
pub mod traits;
