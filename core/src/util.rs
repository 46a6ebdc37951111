//! Pixel buffers and image file output.

pub mod buf;
pub mod pnm;

/// Width and height of a rectangular buffer, in that order.
pub type Dims = (usize, usize);
