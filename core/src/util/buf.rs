use alloc::vec::Vec;
use core::fmt::{self, Debug, Formatter};
use core::iter::repeat;
use core::ops::{Index, IndexMut};
use core::slice::Chunks;

use super::Dims;

/// A rectangular 2D buffer that owns its elements, backed by a `Vec`.
///
/// `Buf2` stores its elements contiguously, in standard row-major order,
/// such that element (x, y) maps to element at index
/// ```text
/// buf.width() * y + x
/// ```
/// in the backing vector. This is exactly the layout the rasterizer
/// expects of a framebuffer.
///
/// # Examples
/// ```
/// # use trifill_core::util::buf::*;
/// // Elements initialized with `Default::default()`
/// let mut buf = Buf2::new((4, 4));
/// // Indexing with an array [x, y] yields element at row y, column x:
/// buf[[2, 1]] = 123;
/// // Indexing with an usize i yields row with index i as a slice:
/// assert_eq!(&buf[1], &[0, 0, 123, 0]);
/// // Thus you can also do this, row first, column second:
/// assert_eq!(buf[1][2], 123)
/// ```
#[derive(Clone, Eq, PartialEq)]
pub struct Buf2<T> {
    data: Vec<T>,
    dims: Dims,
}

impl<T> Buf2<T> {
    /// Returns the width and height of `self`.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }
    /// Returns the width of `self`.
    #[inline]
    pub fn width(&self) -> usize {
        self.dims.0
    }
    /// Returns the height of `self`.
    #[inline]
    pub fn height(&self) -> usize {
        self.dims.1
    }

    /// Returns a view of the backing data of `self`.
    pub fn data(&self) -> &[T] {
        &self.data
    }
    /// Returns a mutable view of the backing data of `self`.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns an iterator over the rows of `self`, top to bottom.
    pub fn rows(&self) -> Chunks<'_, T> {
        self.data.chunks(self.width().max(1))
    }

    /// Sets every element of `self` to `val`.
    pub fn fill(&mut self, val: T)
    where
        T: Clone,
    {
        self.data.fill(val);
    }
}

impl<T> Debug for Buf2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buf2")
            .field("dims", &self.dims)
            .finish_non_exhaustive()
    }
}

impl<T> Index<[usize; 2]> for Buf2<T> {
    type Output = T;

    /// Returns a reference to the element at column x, row y.
    ///
    /// # Panics
    /// If x or y is out of bounds.
    #[inline]
    fn index(&self, [x, y]: [usize; 2]) -> &T {
        let (w, h) = self.dims;
        assert!(x < w && y < h, "position ({x}, {y}) out of bounds");
        &self.data[w * y + x]
    }
}

impl<T> IndexMut<[usize; 2]> for Buf2<T> {
    /// Returns a mutable reference to the element at column x, row y.
    ///
    /// # Panics
    /// If x or y is out of bounds.
    #[inline]
    fn index_mut(&mut self, [x, y]: [usize; 2]) -> &mut T {
        let (w, h) = self.dims;
        assert!(x < w && y < h, "position ({x}, {y}) out of bounds");
        &mut self.data[w * y + x]
    }
}

impl<T> Index<usize> for Buf2<T> {
    type Output = [T];

    /// Returns a reference to the row at index `i`.
    ///
    /// # Panics
    /// If `i` is out of bounds.
    #[inline]
    fn index(&self, i: usize) -> &[T] {
        let w = self.width();
        &self.data[i * w..][..w]
    }
}

impl<T> IndexMut<usize> for Buf2<T> {
    /// Returns a mutable reference to the row at index `i`.
    ///
    /// # Panics
    /// If `i` is out of bounds.
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut [T] {
        let w = self.width();
        &mut self.data[i * w..][..w]
    }
}
