use super::*;
use crate::render::backend::RendererOpts;
use crate::render::reference::RefRenderer;

#[test]
fn file_names_follow_prefix_frame_and_tag() {
    let opts = BenchOpts {
        out_dir: PathBuf::from("out"),
        prefix: "shot".to_string(),
        format: ExportFormat::Ppm,
    };
    assert_eq!(
        opts.frame_path(3, "par"),
        PathBuf::from("out").join("shot_frame3_par.ppm")
    );
    assert_eq!(
        opts.single_path("ref"),
        PathBuf::from("out").join("shot_ref.ppm")
    );

    let png = BenchOpts {
        format: ExportFormat::Png,
        ..BenchOpts::default()
    };
    assert_eq!(png.single_path("ref"), PathBuf::from(".").join("image_ref.png"));
}

#[test]
fn speedup_is_undefined_for_zero_accelerated_time() {
    assert_eq!(
        speedup_ratio(Duration::from_millis(10), Duration::ZERO),
        None
    );
    assert_eq!(
        speedup_ratio(Duration::from_millis(10), Duration::from_millis(4)),
        Some(2.5)
    );
}

#[test]
fn frame_timing_sums() {
    let t = FrameTimings {
        clear: Duration::from_millis(1),
        render: Duration::from_millis(2),
        save: Duration::from_millis(4),
    };
    assert_eq!(t.compute(), Duration::from_millis(3));
    assert_eq!(t.total(), Duration::from_millis(7));
}

#[test]
fn zero_frames_is_rejected() {
    let mut r = RefRenderer::new(RendererOpts::default());
    r.alloc_output_image(4, 4).unwrap();
    let err = run_frame_dump(&mut r, 0, &BenchOpts::default()).unwrap_err();
    assert!(matches!(err, RenderError::Validation(_)));
}

#[test]
fn missing_output_image_is_reported_with_the_tag() {
    let mut r = RefRenderer::new(RendererOpts::default());
    let err = run_frame_dump(&mut r, 1, &BenchOpts::default()).unwrap_err();
    assert!(err.to_string().contains("no output image"));
}

#[test]
fn timings_serialize_as_milliseconds() {
    let t = FrameTimings {
        clear: Duration::from_micros(1500),
        render: Duration::ZERO,
        save: Duration::from_millis(2),
    };
    let v = serde_json::to_value(t).unwrap();
    assert_eq!(v["clear"], serde_json::json!(1.5));
    assert_eq!(v["save"], serde_json::json!(2.0));
}
