//! Basic geometric primitives.

use crate::math::{Color3f, Point2i};
use crate::render::edge::orient;

/// Vertex with a position and arbitrary other attributes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Vertex<P, A> {
    pub pos: P,
    pub attrib: A,
}

/// Screen-space vertex with a color attribute, the input of rasterization.
pub type Vertex2<A = Color3f> = Vertex<Point2i, A>;

/// Triangle, defined by three vertices.
///
/// Usually the vertices are indices into a vertex array, so that vertices
/// shared by several triangles are only stored once:
/// ```
/// use trifill_core::prelude::*;
///
/// let verts = [pt2(0, 0), pt2(0, 4), pt2(4, 4), pt2(4, 0)];
/// // Two triangles sharing the edge between vertices 1 and 3
/// let tris = [tri(0, 1, 3), tri(3, 1, 2)];
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub struct Tri<V>(pub [V; 3]);

/// Polygon winding order, as seen on a screen whose y axis points down.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Winding {
    /// Clockwise winding.
    Cw,
    /// Counter-clockwise winding. The canonical winding of the rasterizer.
    #[default]
    Ccw,
}

/// Creates a `Vertex` with the given position and attribute values.
pub const fn vertex<P, A>(pos: P, attrib: A) -> Vertex<P, A> {
    Vertex { pos, attrib }
}

/// Creates a `Tri` with the given vertices.
pub const fn tri<V>(a: V, b: V, c: V) -> Tri<V> {
    Tri([a, b, c])
}

impl<A> Tri<Vertex2<A>> {
    /// Returns the positions of the vertices of `self`.
    pub fn positions(&self) -> [Point2i; 3] {
        let [a, b, c] = &self.0;
        [a.pos, b.pos, c.pos]
    }

    /// Returns twice the signed area of `self`.
    ///
    /// The area is positive if `self` is wound counter-clockwise on screen,
    /// negative if clockwise, and zero if the vertices are collinear.
    pub fn signed_area_x2(&self) -> i64 {
        let [a, b, c] = self.positions();
        orient(c, b, a)
    }

    /// Returns the winding order of `self`, or `None` if `self` is
    /// degenerate and has zero area.
    ///
    /// # Examples
    /// ```
    /// use trifill_core::prelude::*;
    ///
    /// let [top, left, right] = [(64, 0), (32, 64), (96, 64)]
    ///     .map(|(x, y)| vertex(pt2(x, y), ()));
    ///
    /// assert_eq!(tri(top, left, right).winding(), Some(Winding::Ccw));
    /// assert_eq!(tri(top, right, left).winding(), Some(Winding::Cw));
    /// ```
    pub fn winding(&self) -> Option<Winding> {
        match self.signed_area_x2() {
            0 => None,
            a if a > 0 => Some(Winding::Ccw),
            _ => Some(Winding::Cw),
        }
    }
}
