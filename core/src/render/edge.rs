//! Edge functions and the top-left fill rule.
//!
//! An *edge function* of a directed line from `a` to `b` is the signed area
//! of the parallelogram spanned by `b - a` and `p - a`. It is zero on the
//! line, positive on one side of it and negative on the other. A point lies
//! inside a triangle if all three of its edge functions agree in sign.
//!
//! Pixels exactly on an edge shared by two triangles must be owned by one
//! of them only. The *top-left rule* decides: a pixel on a top or a left
//! edge is inside, a pixel on a bottom or a right edge is outside.
//! ```text
//!          top (inclusive)
//!        *-------------->*
//!         ^            /
//!   left   \          /   right
//!  (incl.)  \        /   (excl.)
//!            \      v
//!             \    /
//!              \  /
//!               *
//! ```

use crate::math::Point2i;

/// An edge function stepped incrementally across the pixel grid.
///
/// Because the edge function is linear, its value at (x + 1, y) and at
/// (x, y + 1) can be computed from the value at (x, y) with a single
/// addition of [`dx`][Self::dx] or [`dy`][Self::dy], respectively.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct EdgeFn {
    /// The value of the edge function at the origin of the scan.
    pub value: i64,
    /// Zero if the edge is a top or left edge, -1 otherwise.
    pub bias: i64,
    /// Change of the value per pixel in the +x direction.
    pub dx: i64,
    /// Change of the value per pixel in the +y direction.
    pub dy: i64,
}

impl EdgeFn {
    /// Returns the edge function of the directed edge from `a` to `b`,
    /// evaluated at `origin`.
    pub fn new(a: Point2i, b: Point2i, origin: Point2i) -> Self {
        Self {
            value: orient(a, b, origin),
            bias: bias(a, b),
            dx: i64::from(a.y()) - i64::from(b.y()),
            dy: i64::from(b.x()) - i64::from(a.x()),
        }
    }

    /// Returns whether a pixel whose edge function value is `value`
    /// lies on the inner side of this edge, according to the fill rule.
    #[inline]
    pub fn covers(&self, value: i64) -> bool {
        value + self.bias >= 0
    }
}

/// Returns twice the signed area of the triangle `a`, `b`, `c`.
///
/// The result is
/// ```text
/// (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
/// ```
/// computed in 64 bits. It cannot overflow as long as all coordinates are
/// at most 2<sup>29</sup> in magnitude.
///
/// On a screen whose y axis points down, the result is positive if `c`
/// is to the right of the directed line from `a` to `b`, negative if it
/// is to the left, and zero if the three points are collinear.
///
/// # Examples
/// ```
/// use trifill_core::{math::pt2, render::edge::orient};
///
/// let (a, b) = (pt2(0, 0), pt2(4, 0));
/// assert_eq!(orient(a, b, pt2(2, 3)), 12);
/// assert_eq!(orient(a, b, pt2(2, -3)), -12);
/// assert_eq!(orient(a, b, pt2(9, 0)), 0);
/// ```
#[inline]
pub fn orient(a: Point2i, b: Point2i, c: Point2i) -> i64 {
    let [ax, ay] = a.0.map(i64::from);
    let [bx, by] = b.0.map(i64::from);
    let [cx, cy] = c.0.map(i64::from);
    (bx - ax) * (cy - ay) - (by - ay) * (cx - ax)
}

/// Returns whether the directed edge from `a` to `b` is a top or a left
/// edge of a triangle whose edges are directed clockwise on screen.
///
/// A top edge is horizontal and points right; a left edge points up.
/// The edge functions of a counter-clockwise triangle traverse its
/// vertices in reverse, so they are directed exactly like this.
#[inline]
pub fn is_top_left(a: Point2i, b: Point2i) -> bool {
    (a.y() == b.y() && a.x() < b.x()) || a.y() > b.y()
}

/// Returns the fill rule bias of the edge from `a` to `b`:
/// zero for top-left edges and -1 for all others.
///
/// Edge function values are integers, so adding -1 turns the inclusive
/// test `value >= 0` into the exclusive `value > 0`.
#[inline]
pub fn bias(a: Point2i, b: Point2i) -> i64 {
    if is_top_left(a, b) { 0 } else { -1 }
}

#[cfg(test)]
mod tests {
    use crate::math::pt2;

    use super::*;

    #[test]
    fn orient_sign() {
        let (a, b) = (pt2(0, 0), pt2(0, 10));
        // Pointing down the screen, +x is on the left
        assert!(orient(a, b, pt2(3, 5)) < 0);
        assert!(orient(a, b, pt2(-3, 5)) > 0);
        assert_eq!(orient(a, b, pt2(0, -7)), 0);
    }

    #[test]
    fn orient_is_antisymmetric() {
        let [a, b, c] = [pt2(3, -1), pt2(-7, 4), pt2(12, 9)];
        assert_eq!(orient(a, b, c), -orient(b, a, c));
        assert_eq!(orient(a, b, c), orient(b, c, a));
    }

    #[test]
    fn orient_does_not_overflow_near_limits() {
        let m = 1 << 29;
        let v = orient(pt2(-m, -m), pt2(m, -m), pt2(-m, m));
        assert_eq!(v, 1i64 << 60);
        let v = orient(pt2(-m, -m), pt2(m, m), pt2(m, -m));
        assert_eq!(v, -(1i64 << 60));
    }

    #[test]
    fn top_left_classification() {
        // Horizontal, pointing right: top
        assert!(is_top_left(pt2(0, 0), pt2(5, 0)));
        // Horizontal, pointing left: bottom
        assert!(!is_top_left(pt2(5, 0), pt2(0, 0)));
        // Pointing up: left
        assert!(is_top_left(pt2(0, 5), pt2(0, 0)));
        assert!(is_top_left(pt2(0, 5), pt2(3, 0)));
        // Pointing down: right
        assert!(!is_top_left(pt2(0, 0), pt2(0, 5)));
        assert!(!is_top_left(pt2(3, 0), pt2(0, 5)));
        // Degenerate
        assert!(!is_top_left(pt2(2, 2), pt2(2, 2)));
    }

    #[test]
    fn biases() {
        assert_eq!(bias(pt2(0, 0), pt2(5, 0)), 0);
        assert_eq!(bias(pt2(5, 0), pt2(0, 0)), -1);
    }

    #[test]
    fn stepping_matches_direct_evaluation() {
        let (a, b) = (pt2(-3, 17), pt2(25, -6));
        let e = EdgeFn::new(a, b, pt2(0, 0));
        for y in -5..5 {
            for x in -5..5 {
                let stepped = e.value + x * e.dx + y * e.dy;
                let p = pt2(x as i32, y as i32);
                assert_eq!(stepped, orient(a, b, p), "at {p:?}");
            }
        }
    }

    #[test]
    fn covers_uses_bias() {
        let top = EdgeFn::new(pt2(0, 0), pt2(5, 0), pt2(0, 0));
        let bottom = EdgeFn::new(pt2(5, 0), pt2(0, 0), pt2(0, 0));
        assert!(top.covers(0));
        assert!(!bottom.covers(0));
        assert!(bottom.covers(1));
        assert!(!top.covers(-1));
    }
}
