//! Rendering context and parameters.

use core::cell::RefCell;

use crate::geom::Winding;

use super::Stats;

/// Context and parameters used by the renderer.
#[derive(Clone, Debug)]
pub struct Context {
    /// Whether to cull (discard) triangles of either winding.
    ///
    /// The rasterizer itself accepts both windings, so nothing is culled
    /// by default. If the input follows a winding convention, such as the
    /// front faces of a mesh being wound counter-clockwise, culling the
    /// other winding skips triangles that would be overdrawn anyway.
    pub face_cull: Option<FaceCull>,

    /// Whether to write color values.
    ///
    /// If `false`, coverage is still computed and counted in the stats,
    /// but the render target is not touched.
    pub color_write: bool,

    /// Collecting rendering statistics.
    pub stats: RefCell<Stats>,
}

/// Which winding of triangles to cull.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FaceCull {
    /// Cull triangles wound clockwise on screen.
    Cw,
    /// Cull triangles wound counter-clockwise on screen.
    Ccw,
}

impl Context {
    /// Returns whether a triangle with the given winding should be culled
    /// based on the current face culling setting.
    ///
    /// Degenerate triangles, with no winding, are never culled; they are
    /// simply not drawn.
    #[inline]
    pub fn face_cull(&self, winding: Option<Winding>) -> bool {
        matches!(
            (self.face_cull, winding),
            (Some(FaceCull::Cw), Some(Winding::Cw))
                | (Some(FaceCull::Ccw), Some(Winding::Ccw))
        )
    }
}

impl Default for Context {
    /// Creates a rendering context with default settings.
    ///
    /// The default values are:
    /// * Face culling:  Disabled
    /// * Color writes:  Enabled
    fn default() -> Self {
        Self {
            face_cull: None,
            color_write: true,
            stats: Default::default(),
        }
    }
}
