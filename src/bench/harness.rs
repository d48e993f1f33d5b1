use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use crate::{
    canvas::buffer::Image,
    canvas::export::{ExportFormat, save_image},
    check::compare::{CompareReport, compare_images},
    foundation::error::{RenderError, RenderResult},
    render::backend::CircleRenderer,
};

/// Frames rendered per engine in paired comparison mode.
pub const PAIRED_FRAMES: u32 = 10;

/// Where and how benchmark frames are written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchOpts {
    /// Directory frames are written into. Must exist.
    pub out_dir: PathBuf,
    /// File name prefix.
    pub prefix: String,
    /// Output file format.
    pub format: ExportFormat,
}

impl Default for BenchOpts {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            prefix: "image".to_string(),
            format: ExportFormat::Ppm,
        }
    }
}

impl BenchOpts {
    /// `<prefix>_frame<N>_<tag>.<ext>`
    pub fn frame_path(&self, frame: u32, tag: &str) -> PathBuf {
        self.out_dir.join(format!(
            "{}_frame{frame}_{tag}.{}",
            self.prefix,
            self.format.extension()
        ))
    }

    /// `<prefix>_<tag>.<ext>`
    pub fn single_path(&self, tag: &str) -> PathBuf {
        self.out_dir
            .join(format!("{}_{tag}.{}", self.prefix, self.format.extension()))
    }
}

/// Wall-clock duration of each phase of one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct FrameTimings {
    /// Time spent clearing the image.
    #[serde(serialize_with = "ser_ms")]
    pub clear: Duration,
    /// Time spent compositing circles.
    #[serde(serialize_with = "ser_ms")]
    pub render: Duration,
    /// Time spent writing the frame file (zero when not saved).
    #[serde(serialize_with = "ser_ms")]
    pub save: Duration,
}

impl FrameTimings {
    /// Clear plus render.
    pub fn compute(&self) -> Duration {
        self.clear + self.render
    }

    /// Clear plus render plus save.
    pub fn total(&self) -> Duration {
        self.clear + self.render + self.save
    }
}

/// Result of [`run_frame_dump`].
#[derive(Clone, Debug, serde::Serialize)]
pub struct FrameDumpReport {
    /// Renderer tag.
    pub renderer: &'static str,
    /// Per-frame timings in frame order.
    pub frames: Vec<FrameTimings>,
    /// Written files in frame order.
    pub files: Vec<PathBuf>,
    /// Wall time from the first clear to the last save.
    #[serde(serialize_with = "ser_ms")]
    pub wall: Duration,
}

/// Averaged phase timings of one engine in paired mode.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EngineSummary {
    /// Renderer tag.
    pub renderer: &'static str,
    /// Mean clear time over [`PAIRED_FRAMES`] frames.
    #[serde(serialize_with = "ser_ms")]
    pub mean_clear: Duration,
    /// Mean render time over [`PAIRED_FRAMES`] frames.
    #[serde(serialize_with = "ser_ms")]
    pub mean_render: Duration,
    /// Time spent saving the first frame.
    #[serde(serialize_with = "ser_ms")]
    pub first_save: Duration,
    /// Wall time of the whole run.
    #[serde(serialize_with = "ser_ms")]
    pub wall: Duration,
    /// File holding the first frame.
    pub file: PathBuf,
}

impl EngineSummary {
    /// Mean clear plus mean render.
    pub fn mean_compute(&self) -> Duration {
        self.mean_clear + self.mean_render
    }
}

/// Result of [`run_paired`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PairedReport {
    /// Sequential reference engine.
    pub reference: EngineSummary,
    /// Accelerated engine.
    pub accelerated: EngineSummary,
    /// Comparison of the two final frames.
    pub check: CompareReport,
    /// Reference mean render time over accelerated mean render time.
    pub speedup: Option<f64>,
}

/// Reference over accelerated time, undefined when the accelerated time is zero.
pub fn speedup_ratio(reference: Duration, accelerated: Duration) -> Option<f64> {
    if accelerated.is_zero() {
        return None;
    }
    Some(reference.as_secs_f64() / accelerated.as_secs_f64())
}

/// Make sure `dir` exists so frames can be written into it.
pub fn ensure_out_dir(dir: &Path) -> RenderResult<()> {
    std::fs::create_dir_all(dir)
        .map_err(|e| RenderError::io(format!("create output dir '{}'", dir.display()), e))
}

/// Clear, render and save `frames` frames with one renderer, timing every phase.
#[tracing::instrument(skip(renderer, opts), fields(renderer = renderer.tag()))]
pub fn run_frame_dump(
    renderer: &mut dyn CircleRenderer,
    frames: u32,
    opts: &BenchOpts,
) -> RenderResult<FrameDumpReport> {
    if frames == 0 {
        return Err(RenderError::validation("benchmark frame count must be > 0"));
    }

    let tag = renderer.tag();
    let mut report = FrameDumpReport {
        renderer: tag,
        frames: Vec::with_capacity(frames as usize),
        files: Vec::with_capacity(frames as usize),
        wall: Duration::ZERO,
    };

    let wall = Instant::now();
    for frame in 0..frames {
        let mut t = time_frame(renderer)?;

        let path = opts.frame_path(frame, tag);
        let t0 = Instant::now();
        save_image(output(&*renderer)?, &path, opts.format)?;
        t.save = t0.elapsed();

        tracing::info!(frame, clear = ?t.clear, render = ?t.render, save = ?t.save, "frame done");
        report.frames.push(t);
        report.files.push(path);
    }
    report.wall = wall.elapsed();

    Ok(report)
}

/// Run [`PAIRED_FRAMES`] frames on each engine, save their first frames, then compare the final
/// frames and derive the speedup.
///
/// A failing comparison is returned as an error.
pub fn run_paired(
    reference: &mut dyn CircleRenderer,
    accelerated: &mut dyn CircleRenderer,
    opts: &BenchOpts,
) -> RenderResult<PairedReport> {
    let reference_summary = run_engine(reference, opts)?;
    let accelerated_summary = run_engine(accelerated, opts)?;

    let check = compare_images(output(&*reference)?, output(&*accelerated)?)?;
    let speedup = speedup_ratio(
        reference_summary.mean_render,
        accelerated_summary.mean_render,
    );
    if speedup.is_none() {
        tracing::warn!("accelerated mean render time is zero; speedup undefined");
    }

    Ok(PairedReport {
        reference: reference_summary,
        accelerated: accelerated_summary,
        check,
        speedup,
    })
}

#[tracing::instrument(skip(renderer, opts), fields(renderer = renderer.tag()))]
fn run_engine(renderer: &mut dyn CircleRenderer, opts: &BenchOpts) -> RenderResult<EngineSummary> {
    let tag = renderer.tag();
    let file = opts.single_path(tag);
    let mut clear = Duration::ZERO;
    let mut render = Duration::ZERO;
    let mut first_save = Duration::ZERO;

    let wall = Instant::now();
    for frame in 0..PAIRED_FRAMES {
        let t = time_frame(renderer)?;
        if frame == 0 {
            let t0 = Instant::now();
            save_image(output(&*renderer)?, &file, opts.format)?;
            first_save = t0.elapsed();
        }
        clear += t.clear;
        render += t.render;
    }

    Ok(EngineSummary {
        renderer: tag,
        mean_clear: clear / PAIRED_FRAMES,
        mean_render: render / PAIRED_FRAMES,
        first_save,
        wall: wall.elapsed(),
        file,
    })
}

fn time_frame(renderer: &mut dyn CircleRenderer) -> RenderResult<FrameTimings> {
    let t0 = Instant::now();
    renderer.clear_image()?;
    let t1 = Instant::now();
    renderer.render()?;
    let t2 = Instant::now();

    Ok(FrameTimings {
        clear: t1 - t0,
        render: t2 - t1,
        save: Duration::ZERO,
    })
}

fn output(renderer: &dyn CircleRenderer) -> RenderResult<&Image> {
    renderer.image().ok_or_else(|| {
        RenderError::validation(format!(
            "renderer '{}' has no output image allocated",
            renderer.tag()
        ))
    })
}

fn ser_ms<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_nanos() as f64 / 1_000_000.0)
}

#[cfg(test)]
#[path = "../../tests/unit/bench/harness.rs"]
mod tests;
