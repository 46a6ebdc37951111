use core::fmt::{self, Debug, Formatter};

/// A point in screen space, with `i32` pixel coordinates.
///
/// The x axis points right and the y axis points *down*, with the origin
/// at the top left corner of the framebuffer. Points may lie outside the
/// framebuffer; rasterization only ever touches pixels inside it.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Point2i(pub [i32; 2]);

/// Returns a screen-space point with `x` and `y` components.
#[inline]
pub const fn pt2(x: i32, y: i32) -> Point2i {
    Point2i([x, y])
}

impl Point2i {
    /// Returns the x component of `self`.
    #[inline]
    pub const fn x(&self) -> i32 {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub const fn y(&self) -> i32 {
        self.0[1]
    }

    /// Returns the component-wise minimum of `self` and `other`.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        pt2(self.x().min(other.x()), self.y().min(other.y()))
    }
    /// Returns the component-wise maximum of `self` and `other`.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        pt2(self.x().max(other.x()), self.y().max(other.y()))
    }
}

impl Debug for Point2i {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Point{:?}", self.0)
    }
}

impl From<[i32; 2]> for Point2i {
    #[inline]
    fn from(xy: [i32; 2]) -> Self {
        Self(xy)
    }
}
