//! Order-preserving rasterizer for scenes of translucent circles.
//!
//! A scene is an ordered circle list; rendering composites each circle over an RGBA float image
//! in list order (painter's algorithm, fixed opacity 0.5). Two renderers share that contract:
//!
//! - [`RefRenderer`] is sequential and defines the expected pixels.
//! - [`ParallelRenderer`] spreads row bands over a rayon pool and must match it.
//!
//! [`compare_images`] checks two outputs against each other, and the benchmark harness
//! ([`run_frame_dump`], [`run_paired`]) times clear/render/save phases and derives the speedup.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bench;
mod canvas;
mod check;
mod foundation;
mod render;
mod scene;

pub use bench::harness::{
    BenchOpts, EngineSummary, FrameDumpReport, FrameTimings, PAIRED_FRAMES, PairedReport,
    ensure_out_dir, run_frame_dump, run_paired, speedup_ratio,
};
pub use canvas::buffer::Image;
pub use canvas::export::{ExportFormat, save_image, to_rgb8, write_ppm};
pub use check::compare::{CHANNEL_TOLERANCE, CompareReport, MAX_MISMATCHES, compare_images};
pub use foundation::error::{RenderError, RenderResult};
pub use foundation::rng::{Rng64, SCENE_SEED};
pub use render::backend::{
    CircleRenderer, ParallelOpts, RendererKind, RendererOpts, create_renderer,
};
pub use render::parallel::ParallelRenderer;
pub use render::reference::RefRenderer;
pub use scene::loader::{SceneName, generate_scene, load_scene};
pub use scene::model::{CIRCLE_ALPHA, Circle, Scene};
