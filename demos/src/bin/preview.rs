use std::{error::Error, time::Instant};

use log::info;
use minifb::{Key, Scale, Window, WindowOptions};

use tf::prelude::*;

use trifill_demos::{FRAME, init_logging, rgb_triangle};

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let (w, h) = FRAME;
    let opts = WindowOptions {
        scale: Scale::X4,
        ..WindowOptions::default()
    };
    let mut win = Window::new("trifill//preview", w, h, opts)?;
    win.set_target_fps(60);

    let verts = rgb_triangle();
    let center = (64.0, 42.0);
    let mut buf = Buf2::<Color3>::new(FRAME);
    let mut out = vec![0u32; w * h];
    let ctx = Context::default();

    let start = Instant::now();
    while win.is_open() && !win.is_key_down(Key::Escape) {
        let (sin, cos) = (start.elapsed().as_secs_f32() * 0.5).sin_cos();

        // Spin the triangle around its centroid
        let spun = verts.map(|v| {
            let (x, y) = (v.pos.x() as f32 - center.0, v.pos.y() as f32 - center.1);
            let rx = cos * x - sin * y + center.0;
            let ry = sin * x + cos * y + center.1;
            vertex(pt2(rx as i32, ry as i32), v.attrib)
        });

        buf.fill(Color3::BLACK);
        draw(&mut buf, &spun, tri(0, 1, 2), &ctx)?;

        for (o, c) in out.iter_mut().zip(buf.data()) {
            *o = c.to_rgb_u32();
        }
        win.update_with_buffer(&out, w, h)?;
    }
    let stats = ctx.stats.borrow();
    info!("\n{stats}");
    if let Some(rate) = stats.frags_per_sec() {
        info!("{:.1}M pixels/s", rate / 1e6);
    }
    Ok(())
}
