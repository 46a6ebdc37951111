//! Translation of triangles into discrete pixels in the framebuffer.
//!
//! Rasterization scans the triangle's bounding box, clamped to the
//! framebuffer, row by row and pixel by pixel. For each pixel, the three
//! [edge functions][super::edge] of the triangle are tested; if the pixel
//! is on the inner side of all of them, it is *covered* and a [fragment][Frag]
//! is emitted.
//!
//! The edge functions are never evaluated from scratch inside the scan.
//! Instead, their values at the top left corner of the box are computed once,
//! and then stepped by a constant delta per column and per row:
//! ```text
//!       x0      x0+1     x0+2
//!   y0  e ──+dx──> · ──+dx──> · ···
//!       │
//!      +dy
//!       v
//! y0+1  · ──+dx──> · ──+dx──> · ···
//! ```
//! so the coverage test costs a handful of integer additions per pixel.
//!
//! The values of the edge functions at a covered pixel, divided by their sum,
//! are the barycentric weights of the pixel with respect to the vertices.

use core::ops::RangeInclusive;

use log::trace;

use crate::math::{Point2i, pt2};
use crate::util::Dims;

use super::edge::{EdgeFn, orient};
use super::stats::Throughput;

/// The largest vertex coordinate magnitude accepted by the rasterizer.
///
/// Within this range the 64-bit edge function arithmetic cannot overflow.
pub const MAX_COORD: i32 = 1 << 29;

/// A fragment, or a single covered pixel of a triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frag {
    /// The column of the pixel.
    pub x: usize,
    /// The row of the pixel.
    pub y: usize,
    /// The barycentric weights of the three vertices at this pixel,
    /// in the order the vertices were given. They sum to one.
    pub weights: [f32; 3],
}

/// An axis-aligned box of pixels, inclusive on all sides.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BBox {
    /// The top left corner.
    pub min: Point2i,
    /// The bottom right corner.
    pub max: Point2i,
}

impl BBox {
    /// Returns the smallest box containing all `pts`.
    pub fn of([a, b, c]: [Point2i; 3]) -> Self {
        Self {
            min: a.min(b).min(c),
            max: a.max(b).max(c),
        }
    }

    /// Returns the intersection of `self` with a `w` × `h` buffer whose
    /// top left corner is at the origin, or `None` if it is empty.
    pub fn clamp(self, (w, h): Dims) -> Option<Self> {
        let right = i32::try_from(w).unwrap_or(i32::MAX) - 1;
        let bottom = i32::try_from(h).unwrap_or(i32::MAX) - 1;
        let min = self.min.max(pt2(0, 0));
        let max = self.max.min(pt2(right, bottom));

        (min.x() <= max.x() && min.y() <= max.y()).then_some(Self { min, max })
    }

    /// Returns the range of columns spanned by `self`.
    ///
    /// Only meaningful if `self` is non-negative, as returned by `clamp`.
    pub fn xs(&self) -> RangeInclusive<usize> {
        self.min.x() as usize..=self.max.x() as usize
    }
    /// Returns the range of rows spanned by `self`.
    ///
    /// Only meaningful if `self` is non-negative, as returned by `clamp`.
    pub fn ys(&self) -> RangeInclusive<usize> {
        self.min.y() as usize..=self.max.y() as usize
    }
}

/// Rasterizes a filled triangle into a `dims`-sized pixel grid.
///
/// Invokes `frag_fn` for every covered pixel, in top-to-bottom,
/// left-to-right order. Returns the number of pixels tested and covered.
///
/// A pixel is sampled at its integer coordinates and covered if it lies
/// strictly inside the triangle, or exactly on a top or left edge. Thus
/// if two triangles share an edge, every pixel on the edge is covered by
/// exactly one of them.
///
/// Both windings are accepted: a clockwise triangle is rasterized as its
/// counter-clockwise mirror, covering the same pixels with the weights
/// still in the given vertex order. A triangle with zero area covers no
/// pixels.
///
/// The vertex coordinates must be within ±[`MAX_COORD`]; otherwise the
/// edge function arithmetic may overflow.
pub fn tri_fill<F>(verts: [Point2i; 3], dims: Dims, mut frag_fn: F) -> Throughput
where
    F: FnMut(Frag),
{
    let [v0, mut v1, mut v2] = verts;

    let area = orient(v2, v1, v0);
    if area == 0 {
        return Throughput::default();
    }
    // Edge functions are positive inside a counter-clockwise triangle
    let flip = area < 0;
    if flip {
        (v1, v2) = (v2, v1);
    }

    let Some(bbox) = BBox::of(verts).clamp(dims) else {
        return Throughput::default();
    };
    trace!("tri_fill {verts:?}: area {area}, {bbox:?}");

    // Each edge is opposite to the vertex with the same index
    let edges = [
        EdgeFn::new(v2, v1, bbox.min),
        EdgeFn::new(v0, v2, bbox.min),
        EdgeFn::new(v1, v0, bbox.min),
    ];
    let [e0, e1, e2] = edges;
    // Constant across the plane; the x and y deltas cancel out
    let total = (e0.value + e1.value + e2.value) as f32;

    let mut io = Throughput::default();
    let mut row = edges.map(|e| e.value);

    for y in bbox.ys() {
        let mut vals = row;
        for x in bbox.xs() {
            let [a, b, c] = vals;
            if e0.covers(a) && e1.covers(b) && e2.covers(c) {
                let w0 = a as f32 / total;
                let w1 = b as f32 / total;
                let w2 = 1.0 - w0 - w1;
                let weights = if flip { [w0, w2, w1] } else { [w0, w1, w2] };
                frag_fn(Frag { x, y, weights });
                io.o += 1;
            }
            vals = [a + e0.dx, b + e1.dx, c + e2.dx];
        }
        io.i += bbox.xs().count();
        row = [row[0] + e0.dy, row[1] + e1.dy, row[2] + e2.dy];
    }
    io
}
