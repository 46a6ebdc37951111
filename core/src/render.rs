//! Turning triangles into pixels.
//!
//! This module contains the [edge functions][edge] and the scanning
//! [rasterizer][raster] built on them, as well as the [render targets][target]
//! the rasterized pixels are written to, and the [context][ctx] and
//! [statistics][stats] of rendering.
//!
//! The entry points are [`draw`], which draws an indexed triangle into any
//! [`Target`], and [`rasterize`], which does the same for a plain slice
//! of pixels.

use core::fmt::{self, Display, Formatter};

use log::{debug, trace};

use crate::geom::{Tri, Vertex2};
use crate::math::{Color3, Color3f};

use raster::{Frag, MAX_COORD, tri_fill};
use stats::Throughput;
use target::{Framebuf, Target};

pub use ctx::{Context, FaceCull};
pub use stats::Stats;

pub mod ctx;
pub mod edge;
pub mod raster;
pub mod stats;
pub mod target;

/// Error returned when the input of a draw call is invalid.
///
/// All input is validated before any pixel is touched, so on error
/// the render target is left unchanged.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A vertex index is not less than the number of vertices.
    InvalidIndex { index: usize, len: usize },
    /// The length of a pixel slice is not equal to `width * height`.
    BufferSizeMismatch {
        width: usize,
        height: usize,
        len: usize,
    },
    /// A vertex coordinate has a magnitude greater than [`MAX_COORD`].
    CoordOutOfRange { x: i32, y: i32 },
}

/// Result of a draw call.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidIndex { index, len } => {
                write!(f, "vertex index {index} out of bounds (len {len})")
            }
            Error::BufferSizeMismatch { width, height, len } => write!(
                f,
                "pixel buffer of length {len} does not match {width}×{height}"
            ),
            Error::CoordOutOfRange { x, y } => write!(
                f,
                "vertex ({x}, {y}) out of range ±{MAX_COORD}"
            ),
        }
    }
}

/// Draws a triangle into `target`.
///
/// The triangle is given as three indices into `verts`. Every covered pixel
/// of `target` is overwritten with the vertex colors interpolated at that
/// pixel; uncovered pixels are left untouched. Thus successive draws
/// composite in call order, the last one drawn winning where they overlap.
///
/// The triangle may be wound either way, unless `ctx.face_cull` says
/// otherwise. A triangle with zero area draws nothing. Statistics of the
/// call are added to `ctx.stats`.
///
/// # Errors
/// Returns [`Error::InvalidIndex`] if any index is out of bounds, or
/// [`Error::CoordOutOfRange`] if any vertex coordinate is greater than
/// [`MAX_COORD`] in magnitude. Nothing is drawn in that case.
///
/// # Examples
/// ```
/// use trifill_core::prelude::*;
///
/// let verts = [(0, 0), (0, 4), (4, 4), (4, 0)]
///     .map(|(x, y)| vertex(pt2(x, y), Color3f::WHITE));
/// let mut buf = Buf2::<Color3>::new((5, 5));
/// let ctx = Context::default();
///
/// // Two triangles sharing the diagonal from 1 to 3
/// draw(&mut buf, &verts, tri(0, 1, 3), &ctx).unwrap();
/// draw(&mut buf, &verts, tri(3, 1, 2), &ctx).unwrap();
///
/// assert_eq!(buf[[3, 3]], Color3::WHITE);
/// assert_eq!(buf[[4, 4]], Color3::BLACK);
/// assert_eq!(ctx.stats.borrow().frags.o, 16);
/// ```
pub fn draw<T>(
    target: &mut T,
    verts: &[Vertex2],
    tri: Tri<usize>,
    ctx: &Context,
) -> Result<()>
where
    T: Target + ?Sized,
{
    let mut stats = Stats::start();

    let tri = resolve(verts, tri)?;
    let [a, b, c] = tri.0;
    let colors = [a.attrib, b.attrib, c.attrib];

    stats.calls = 1;
    stats.prims.i = 1;

    let winding = tri.winding();
    if winding.is_none() {
        debug!("degenerate triangle {:?}, nothing to draw", tri.positions());
    } else if ctx.face_cull(winding) {
        debug!("culled {winding:?} triangle {:?}", tri.positions());
    } else {
        let frags = tri_fill(tri.positions(), target.dims(), |frag| {
            let Frag { x, y, weights } = frag;
            if ctx.color_write {
                let c = Color3f::blend(weights, colors).to_color3();
                target.put(x, y, c);
            }
        });
        trace!(
            "drew {:?}, area×2 {}: {frags}",
            tri.positions(),
            tri.signed_area_x2()
        );
        stats.prims.o = usize::from(frags.o > 0);
        stats.frags = frags;
    }
    *ctx.stats.borrow_mut() += stats.finish();
    Ok(())
}

/// Rasterizes a triangle into a row-major slice of pixels.
///
/// `pixels` must be exactly `width * height` long; the pixel at column x,
/// row y is `pixels[x + width * y]`. The triangle is given as three
/// indices into `verts`. See [`draw`] for details.
///
/// Returns the number of pixels tested and covered.
///
/// # Errors
/// Returns [`Error::BufferSizeMismatch`] if the length of `pixels` is wrong,
/// and otherwise the same errors as [`draw`]. Nothing is drawn in that case.
///
/// # Examples
/// ```
/// use trifill_core::prelude::*;
///
/// let verts = [
///     vertex(pt2(0, 0), Color3f::RED),
///     vertex(pt2(0, 4), Color3f::RED),
///     vertex(pt2(4, 0), Color3f::RED),
/// ];
/// let mut pixels = [Color3::BLACK; 5 * 5];
///
/// let io = rasterize(&mut pixels, 5, 5, &verts, [0, 1, 2]).unwrap();
///
/// assert_eq!(io.o, 10);
/// assert_eq!(pixels[0], rgb(0xFF, 0, 0));
/// assert_eq!(pixels[4], Color3::BLACK);
/// ```
pub fn rasterize(
    pixels: &mut [Color3],
    width: usize,
    height: usize,
    verts: &[Vertex2],
    indices: [usize; 3],
) -> Result<Throughput> {
    let mut fb = Framebuf::new(pixels, width, height)?;
    let ctx = Context::default();
    draw(&mut fb, verts, Tri(indices), &ctx)?;
    Ok(ctx.stats.into_inner().frags)
}

/// Looks up the vertices of `tri` and checks their coordinates.
fn resolve(verts: &[Vertex2], Tri(idx): Tri<usize>) -> Result<Tri<Vertex2>> {
    let len = verts.len();
    let mut res = [Vertex2::default(); 3];
    for (v, index) in res.iter_mut().zip(idx) {
        *v = *verts.get(index).ok_or(Error::InvalidIndex { index, len })?;

        let [x, y] = v.pos.0;
        if x.unsigned_abs() > MAX_COORD as u32 || y.unsigned_abs() > MAX_COORD as u32 {
            return Err(Error::CoordOutOfRange { x, y });
        }
    }
    Ok(Tri(res))
}
