use trifill_core::prelude::*;

use trifill_core::render::{raster::MAX_COORD, stats::Throughput};
use trifill_core::util::pnm::read_pnm;

/// The classic RGB triangle, centered in a 128×128 frame.
const VERTS: [Vertex2; 3] = [
    vertex(pt2(64, 0), Color3f::RED),
    vertex(pt2(32, 64), Color3f::GREEN),
    vertex(pt2(96, 64), Color3f::BLUE),
];

fn is_black(c: &Color3) -> bool {
    *c == Color3::BLACK
}

#[test_log::test]
fn rgb_triangle_end_to_end() {
    let (w, h) = (128, 128);
    let mut pixels = vec![Color3::BLACK; w * h];

    let io = rasterize(&mut pixels, w, h, &VERTS, [0, 1, 2]).unwrap();

    assert_eq!(io, Throughput { i: 65 * 65, o: 2016 });

    let px = |x: usize, y: usize| pixels[x + w * y];
    // Near the centroid, a blend weighted toward the top vertex
    assert_eq!(px(64, 21), rgb(171, 42, 42));
    // The apex lies on a right edge, which is excluded
    assert_eq!(px(64, 0), Color3::BLACK);
    assert_eq!(px(64, 1), rgb(251, 2, 2));
    // Bottom edge is excluded, just above it is a green-blue mix
    assert_eq!(px(64, 64), Color3::BLACK);
    assert_eq!(px(64, 63), rgb(4, 126, 126));
    assert_eq!(px(33, 63), rgb(4, 249, 2));
    assert_eq!(px(95, 63), rgb(4, 2, 249));
    // Outside
    assert_eq!(px(0, 0), Color3::BLACK);
    assert_eq!(px(127, 127), Color3::BLACK);

    assert_eq!(pixels.iter().filter(|c| !is_black(c)).count(), 2016);
}

#[test_log::test]
fn mirrored_winding_draws_identical_image() {
    let mut ccw = Buf2::<Color3>::new((128, 128));
    let mut cw = ccw.clone();
    let ctx = Context::default();

    draw(&mut ccw, &VERTS, tri(0, 1, 2), &ctx).unwrap();
    draw(&mut cw, &VERTS, tri(0, 2, 1), &ctx).unwrap();

    assert_eq!(ccw, cw);
    let stats = ctx.stats.borrow();
    assert_eq!(stats.frags.o, 2 * 2016);
}

#[test_log::test]
fn rotated_vertex_order_draws_identical_image() {
    let mut a = Buf2::<Color3>::new((128, 128));
    let mut b = a.clone();
    let ctx = Context::default();

    draw(&mut a, &VERTS, tri(0, 1, 2), &ctx).unwrap();
    draw(&mut b, &VERTS, tri(1, 2, 0), &ctx).unwrap();

    // Weights are computed in a different order, so allow for rounding
    for (p, q) in a.data().iter().zip(b.data()) {
        assert_eq!(is_black(p), is_black(q));
        for ch in 0..3 {
            assert!(p.0[ch].abs_diff(q.0[ch]) <= 1, "{p:?} vs {q:?}");
        }
    }
}

#[test_log::test]
fn vertices_have_exact_colors() {
    let verts = [
        vertex(pt2(1, 1), rgb(0.2, 0.4, 0.6)),
        vertex(pt2(1, 9), rgb(0.9, 0.1, 0.5)),
        vertex(pt2(9, 1), rgb(0.0, 1.0, 0.3)),
    ];
    let mut buf = Buf2::<Color3>::new((12, 12));
    draw(&mut buf, &verts, tri(0, 1, 2), &Context::default()).unwrap();

    // Only the top left vertex is on two inclusive edges
    assert_eq!(buf[[1, 1]], verts[0].attrib.to_color3());
    assert_eq!(buf[[1, 9]], Color3::BLACK);
    assert_eq!(buf[[9, 1]], Color3::BLACK);
}

#[test_log::test]
fn small_triangle_matches_reference_image() {
    let verts = [
        vertex(pt2(0, 0), Color3f::RED),
        vertex(pt2(0, 4), Color3f::GREEN),
        vertex(pt2(4, 0), Color3f::BLUE),
    ];
    let mut buf = Buf2::<Color3>::new((4, 4));
    draw(&mut buf, &verts, tri(0, 1, 2), &Context::default()).unwrap();

    let expected = read_pnm(
        *b"P3
# 4x4 RGB triangle, top left vertex red
4 4 255
255   0   0  191   0  64  128   0 128   64   0 191
191  64   0  128  64  64   64  64 128    0   0   0
128 128   0   64 128  64    0   0   0    0   0   0
 64 191   0    0   0   0    0   0   0    0   0   0
",
    )
    .unwrap();
    assert_eq!(buf, expected);
}

#[test_log::test]
fn quad_halves_share_diagonal_exactly_once() {
    let verts = [(3, 1), (1, 17), (22, 14), (19, 2)]
        .map(|(x, y)| vertex(pt2(x, y), Color3f::WHITE));
    let tris = [tri(0, 1, 3), tri(3, 1, 2)];

    let mut counts = Buf2::<u8>::new((24, 20));
    for t in tris {
        let mut buf = Buf2::<Color3>::new(counts.dims());
        draw(&mut buf, &verts, t, &Context::default()).unwrap();
        for (n, c) in counts.data_mut().iter_mut().zip(buf.data()) {
            *n += u8::from(!is_black(c));
        }
    }
    assert!(counts.data().iter().all(|&n| n <= 1));
    assert!(counts.data().iter().any(|&n| n == 1));
}

#[test_log::test]
fn later_draws_overwrite_earlier() {
    let verts = [
        vertex(pt2(0, 0), Color3f::RED),
        vertex(pt2(0, 8), Color3f::RED),
        vertex(pt2(8, 0), Color3f::RED),
        vertex(pt2(0, 0), Color3f::BLUE),
        vertex(pt2(0, 4), Color3f::BLUE),
        vertex(pt2(4, 0), Color3f::BLUE),
    ];
    let (red, blue) = (rgb(0xFF, 0, 0), rgb(0, 0, 0xFF));
    let mut buf = Buf2::<Color3>::new((8, 8));
    let ctx = Context::default();

    draw(&mut buf, &verts, tri(0, 1, 2), &ctx).unwrap();
    draw(&mut buf, &verts, tri(3, 4, 5), &ctx).unwrap();
    assert_eq!(buf[[1, 1]], blue);
    assert_eq!(buf[[5, 1]], red);
    assert_eq!(buf[[7, 7]], Color3::BLACK);

    draw(&mut buf, &verts, tri(0, 1, 2), &ctx).unwrap();
    assert_eq!(buf[[1, 1]], red);
}

#[test_log::test]
fn partially_offscreen_triangle_is_clipped() {
    let verts = [
        vertex(pt2(-50, -50), Color3f::WHITE),
        vertex(pt2(-50, 200), Color3f::WHITE),
        vertex(pt2(200, -50), Color3f::WHITE),
    ];
    let (w, h) = (16, 10);
    let mut pixels = vec![Color3::BLACK; w * h];

    let io = rasterize(&mut pixels, w, h, &verts, [0, 1, 2]).unwrap();

    assert_eq!(io, Throughput { i: w * h, o: w * h });
    assert!(pixels.iter().all(|c| !is_black(c)));
}

#[test_log::test]
fn huge_triangle_does_not_overflow() {
    let m = MAX_COORD;
    let verts = [
        vertex(pt2(-m, -m), Color3f::WHITE),
        vertex(pt2(-m, m), Color3f::WHITE),
        vertex(pt2(m, 0), Color3f::WHITE),
    ];
    let mut buf = Buf2::<Color3>::new((8, 8));
    draw(&mut buf, &verts, tri(0, 1, 2), &Context::default()).unwrap();
    assert!(buf.data().iter().all(|&c| c == Color3::WHITE));
}

#[test_log::test]
fn degenerate_triangle_is_a_no_op() {
    let verts = [
        vertex(pt2(2, 2), Color3f::WHITE),
        vertex(pt2(6, 6), Color3f::WHITE),
        vertex(pt2(10, 10), Color3f::WHITE),
    ];
    let mut pixels = vec![Color3::BLACK; 16 * 16];
    let io = rasterize(&mut pixels, 16, 16, &verts, [0, 1, 2]).unwrap();
    assert_eq!(io.o, 0);
    assert!(pixels.iter().all(is_black));
}

#[test_log::test]
fn invalid_input_leaves_buffer_untouched() {
    let mut pixels = vec![Color3::BLACK; 128 * 128];

    assert_eq!(
        rasterize(&mut pixels, 128, 128, &VERTS, [0, 1, 3]),
        Err(Error::InvalidIndex { index: 3, len: 3 })
    );
    assert_eq!(
        rasterize(&mut pixels, 128, 127, &VERTS, [0, 1, 2]),
        Err(Error::BufferSizeMismatch { width: 128, height: 127, len: 128 * 128 })
    );

    let mut far = VERTS;
    far[1].pos = pt2(-MAX_COORD - 1, 64);
    assert_eq!(
        rasterize(&mut pixels, 128, 128, &far, [0, 1, 2]),
        Err(Error::CoordOutOfRange { x: -MAX_COORD - 1, y: 64 })
    );

    assert!(pixels.iter().all(is_black));
}

#[test_log::test]
fn face_culling_discards_one_winding() {
    let mut buf = Buf2::<Color3>::new((128, 128));
    let ctx = Context {
        face_cull: Some(FaceCull::Cw),
        ..Context::default()
    };
    draw(&mut buf, &VERTS, tri(0, 2, 1), &ctx).unwrap();
    assert!(buf.data().iter().all(is_black));

    draw(&mut buf, &VERTS, tri(0, 1, 2), &ctx).unwrap();
    assert_eq!(buf[[64, 21]], rgb(171, 42, 42));

    let stats = ctx.stats.borrow();
    assert_eq!(stats.calls, 2);
    assert_eq!(stats.prims, Throughput { i: 2, o: 1 });
}
