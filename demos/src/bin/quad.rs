use std::error::Error;

use log::{info, warn};

use tf::prelude::*;

use trifill_demos::{FRAME, init_logging, out_path, quad, save};

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let out = out_path("quad.bmp");

    let (verts, tris) = quad();
    let (w, h) = FRAME;
    let mut pixels = vec![Color3::BLACK; w * h];

    let mut covered = 0;
    for Tri(indices) in tris {
        let io = rasterize(&mut pixels, w, h, &verts, indices)?;
        info!("triangle {indices:?}: {io}");
        covered += io.o;
    }

    let drawn = pixels.iter().filter(|&&c| c != Color3::BLACK).count();
    if drawn != covered {
        warn!("{covered} pixels covered but {drawn} drawn, shared edge overdrawn?");
    }

    save(&out, &Buf2::new_from(FRAME, pixels))?;
    Ok(())
}
