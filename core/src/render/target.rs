//! Render targets.
//!
//! The typical render target is a framebuffer: a rectangular, row-major
//! array of pixels, either owned as a [`Buf2`] or borrowed as a
//! [`Framebuf`] view of a caller-provided slice.

use crate::math::Color3;
use crate::util::{Dims, buf::Buf2};

use super::{Error, Result};

/// Trait for types that can be used as render targets.
pub trait Target {
    /// Returns the width and height of `self` in pixels.
    fn dims(&self) -> Dims;

    /// Writes a single pixel into `self`.
    ///
    /// The renderer only calls this with `x < width` and `y < height`.
    fn put(&mut self, x: usize, y: usize, c: Color3);
}

/// Framebuffer view of a borrowed slice of pixels in row-major order.
///
/// The pixel at column x, row y is `pixels[x + width * y]`.
#[derive(Debug)]
pub struct Framebuf<'a> {
    pixels: &'a mut [Color3],
    width: usize,
    height: usize,
}

impl<'a> Framebuf<'a> {
    /// Creates a framebuffer of size `width` × `height` over `pixels`.
    ///
    /// # Errors
    /// Returns [`Error::BufferSizeMismatch`] if `pixels.len()` is not
    /// exactly `width * height`.
    pub fn new(pixels: &'a mut [Color3], width: usize, height: usize) -> Result<Self> {
        let len = pixels.len();
        if width.checked_mul(height) != Some(len) {
            return Err(Error::BufferSizeMismatch { width, height, len });
        }
        Ok(Self { pixels, width, height })
    }
}

impl Target for Framebuf<'_> {
    fn dims(&self) -> Dims {
        (self.width, self.height)
    }
    #[inline]
    fn put(&mut self, x: usize, y: usize, c: Color3) {
        self.pixels[x + self.width * y] = c;
    }
}

impl Target for Buf2<Color3> {
    fn dims(&self) -> Dims {
        Buf2::dims(self)
    }
    #[inline]
    fn put(&mut self, x: usize, y: usize, c: Color3) {
        self[[x, y]] = c;
    }
}
