//! Edge-function triangle rasterization into a CPU framebuffer.
//!
//! Given three vertices, each an integer screen-space position plus a color,
//! `trifill` determines which pixels of a rectangular framebuffer lie inside
//! the triangle and writes a barycentrically interpolated color to each.
//!
//! Coverage is decided by three integer *edge functions*, stepped
//! incrementally across the triangle's bounding box. Pixels lying exactly on
//! an edge are assigned by the *top-left* fill rule, so that triangles sharing
//! an edge never leave gaps between them nor draw any pixel twice.
//!
//! # Examples
//! ```
//! use trifill_core::prelude::*;
//!
//! let verts = [
//!     vertex(pt2(64, 0), Color3f::RED),
//!     vertex(pt2(32, 64), Color3f::GREEN),
//!     vertex(pt2(96, 64), Color3f::BLUE),
//! ];
//! let mut buf = Buf2::<Color3>::new((128, 128));
//!
//! draw(&mut buf, &verts, tri(0, 1, 2), &Context::default()).unwrap();
//!
//! assert_eq!(buf[[64, 21]], rgb(171, 42, 42));
//! assert_eq!(buf[[0, 0]], Color3::BLACK);
//! ```
//!
//! # Crate features
//!
//! * `std`:
//!   Makes available items requiring I/O or timekeeping, such as saving
//!   images to files, and implements `std::error::Error` for error types.
//!
//!   If this feature is disabled, the crate only depends on `alloc`.
//!
//! All features are disabled by default.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;
extern crate core;

pub mod geom;
pub mod math;
pub mod render;
pub mod util;

pub mod prelude {
    pub use crate::geom::{Tri, Vertex, Vertex2, Winding, tri, vertex};
    pub use crate::math::{Color3, Color3f, Point2i, pt2, rgb};
    pub use crate::render::{
        Context, Error, FaceCull, draw, rasterize, stats::Stats,
        target::Framebuf,
    };
    pub use crate::util::{Dims, buf::Buf2};
}
