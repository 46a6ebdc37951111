//! Scenes and output helpers shared by the demo programs.

use std::{env, error::Error, path::Path};

use image::{ImageFormat, RgbImage};
use log::info;

use tf::prelude::*;

/// Default frame size of the demos.
pub const FRAME: Dims = (128, 128);

/// The classic RGB triangle: red apex, green bottom left, blue bottom right.
pub fn rgb_triangle() -> [Vertex2; 3] {
    [
        vertex(pt2(64, 0), Color3f::RED),
        vertex(pt2(32, 64), Color3f::GREEN),
        vertex(pt2(96, 64), Color3f::BLUE),
    ]
}

/// An irregular quad made of two triangles sharing a diagonal.
pub fn quad() -> ([Vertex2; 4], [Tri<usize>; 2]) {
    let verts = [
        vertex(pt2(20, 10), rgb(1.0, 0.8, 0.2)),
        vertex(pt2(8, 110), rgb(0.2, 0.6, 1.0)),
        vertex(pt2(118, 96), rgb(0.9, 0.2, 0.5)),
        vertex(pt2(104, 14), rgb(0.3, 1.0, 0.4)),
    ];
    (verts, [tri(0, 1, 3), tri(3, 1, 2)])
}

/// Initializes logging, by default at the `info` level.
///
/// Set `RUST_LOG` to override, e.g. `RUST_LOG=trace` to see every draw.
pub fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();
}

/// Returns the output path given as the first command line argument,
/// or `default` if there is none.
pub fn out_path(default: &str) -> String {
    env::args().nth(1).unwrap_or_else(|| default.into())
}

/// Saves `buf` as a BMP image and a PPM image next to it.
///
/// # Errors
/// If either file cannot be written.
pub fn save(path: impl AsRef<Path>, buf: &Buf2<Color3>) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    let (w, h) = buf.dims();
    let bytes = buf.data().iter().flat_map(|c| c.0).collect();
    let img = RgbImage::from_raw(u32::try_from(w)?, u32::try_from(h)?, bytes)
        .ok_or("pixel data does not fit image")?;

    let bmp = path.with_extension("bmp");
    img.save_with_format(&bmp, ImageFormat::Bmp)?;
    info!("wrote {w}×{h} image to {}", bmp.display());

    let ppm = path.with_extension("ppm");
    tf::util::pnm::save_ppm(&ppm, buf)?;
    info!("wrote {w}×{h} image to {}", ppm.display());
    Ok(())
}
