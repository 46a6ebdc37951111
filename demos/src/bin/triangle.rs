use std::error::Error;

use log::info;

use tf::prelude::*;

use trifill_demos::{FRAME, init_logging, out_path, rgb_triangle, save};

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let out = out_path("triangle.bmp");

    let mut buf = Buf2::<Color3>::new(FRAME);
    let ctx = Context::default();

    draw(&mut buf, &rgb_triangle(), tri(0, 1, 2), &ctx)?;
    info!("center pixel {:?}", buf[[64, 21]]);

    save(&out, &buf)?;
    let stats = ctx.stats.borrow();
    info!("\n{stats}");
    if let Some(rate) = stats.frags_per_sec() {
        info!("{rate:.0} pixels/s");
    }
    Ok(())
}
