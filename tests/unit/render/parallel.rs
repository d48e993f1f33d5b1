use super::*;

fn b(min_y: u32, max_y: u32) -> PixelBounds {
    PixelBounds {
        min_x: 0,
        max_x: 1,
        min_y,
        max_y,
    }
}

#[test]
fn bins_keep_scene_order_and_span_bands() {
    let bounds = [b(0, 3), b(2, 9), b(5, 6), b(4, 4), b(8, 10)];
    let bins = bin_by_band(&bounds, 10, 4);

    assert_eq!(bins.len(), 3);
    assert_eq!(bins[0], vec![0, 1]);
    assert_eq!(bins[1], vec![1, 2]);
    assert_eq!(bins[2], vec![1, 4]);
}

#[test]
fn zero_threads_is_rejected() {
    let err = ParallelRenderer::new(
        RendererOpts::default(),
        ParallelOpts {
            threads: Some(0),
            tile_rows: 8,
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("threads"));
}

#[test]
fn explicit_thread_count_and_zero_tile_rows() {
    let r = ParallelRenderer::new(
        RendererOpts::default(),
        ParallelOpts {
            threads: Some(2),
            tile_rows: 0,
        },
    )
    .unwrap();
    assert_eq!(r.threads(), 2);
    assert_eq!(r.tile_rows, 1);
    assert_eq!(r.tag(), "par");
}

#[test]
fn render_without_image_fails() {
    let mut r = ParallelRenderer::new(RendererOpts::default(), ParallelOpts::default()).unwrap();
    assert!(r.render().is_err());
}
