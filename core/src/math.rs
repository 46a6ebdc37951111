//! Colors, points, and approximate float comparison.
//!
//! Colors come in two representations: [`Color3f`], with `f32` channels
//! normally in the range [0, 1], used for interpolation; and [`Color3`],
//! with `u8` channels, the storage format of framebuffers. Conversions
//! between the two are always explicit, so that it is easy to see where
//! a lossy quantization happens.

pub use {
    approx::ApproxEq,
    color::{Color, Color3, Color3f, rgb},
    point::{Point2i, pt2},
};

pub mod approx;
pub mod color;
pub mod point;
