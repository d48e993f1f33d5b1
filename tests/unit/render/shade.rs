use super::*;

fn circle(x: f32, y: f32, radius: f32) -> Circle {
    Circle::new(x, y, 0.5, radius, [1.0, 0.0, 0.0])
}

#[test]
fn bounds_truncate_widen_and_clamp() {
    let b = pixel_bounds(&circle(0.5, 0.5, 0.25), 8, 8);
    assert_eq!(
        b,
        PixelBounds {
            min_x: 2,
            max_x: 7,
            min_y: 2,
            max_y: 7
        }
    );

    let edge = pixel_bounds(&circle(0.0, 1.0, 0.25), 8, 8);
    assert_eq!((edge.min_x, edge.max_x), (0, 3));
    assert_eq!((edge.min_y, edge.max_y), (6, 8));
}

#[test]
fn offscreen_circle_has_empty_bounds() {
    assert!(pixel_bounds(&circle(2.0, 0.5, 0.1), 16, 16).is_empty());
    assert!(pixel_bounds(&circle(0.5, -1.0, 0.1), 16, 16).is_empty());
    assert!(!pixel_bounds(&circle(0.5, 0.5, 0.1), 16, 16).is_empty());
}

#[test]
fn shade_blends_inside_and_skips_outside() {
    let c = circle(0.5, 0.5, 0.1);

    let mut inside = [1.0, 1.0, 1.0, 1.0];
    shade_pixel(&c, 0.5, 0.55, &mut inside);
    assert_eq!(inside, [1.0, 0.5, 0.5, 1.5]);

    let mut outside = [1.0, 1.0, 1.0, 1.0];
    shade_pixel(&c, 0.7, 0.5, &mut outside);
    assert_eq!(outside, [1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn shade_includes_points_exactly_on_the_radius() {
    let c = circle(0.5, 0.5, 0.25);
    let mut px = [0.0, 0.0, 0.0, 0.0];
    shade_pixel(&c, 0.75, 0.5, &mut px);
    assert_eq!(px[3], CIRCLE_ALPHA);
}

#[test]
fn composite_respects_band_rows() {
    let (w, h) = (4u32, 4u32);
    let c = circle(0.5, 0.5, 1.0);
    let bounds = pixel_bounds(&c, w, h);

    // Rows 2..4 only.
    let mut data = vec![0.0f32; (w * 2 * 4) as usize];
    let mut band = RowBand {
        data: &mut data,
        y0: 2,
        y1: 4,
        width: w,
        height: h,
    };
    composite_circle(&c, bounds, &mut band);

    for px in data.chunks_exact(4) {
        assert_eq!(px, &[0.5, 0.0, 0.0, 0.5]);
    }
}
