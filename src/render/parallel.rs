use rayon::prelude::*;

use crate::{
    canvas::buffer::Image,
    foundation::error::{RenderError, RenderResult},
    render::backend::{CircleRenderer, ParallelOpts, RenderTarget, RendererOpts},
    render::shade::{PixelBounds, RowBand, composite_circle, pixel_bounds},
    scene::model::Scene,
};

/// Tile-parallel renderer.
///
/// The image is cut into horizontal bands of `tile_rows` rows. Circles are binned into the bands
/// their bounds overlap, in scene order, and each band is composited by one worker. A pixel lives in
/// exactly one band, so its blends run in scene order and the output matches [`RefRenderer`]
/// bit for bit.
///
/// [`RefRenderer`]: crate::RefRenderer
pub struct ParallelRenderer {
    opts: RendererOpts,
    tile_rows: u32,
    pool: rayon::ThreadPool,
    target: RenderTarget,
}

impl ParallelRenderer {
    /// Build the renderer and its worker pool.
    pub fn new(opts: RendererOpts, parallel: ParallelOpts) -> RenderResult<Self> {
        let tile_rows = u32::try_from(parallel.tile_rows.max(1))
            .map_err(|_| RenderError::validation("parallel 'tile_rows' does not fit in u32"))?;
        Ok(Self {
            opts,
            tile_rows,
            pool: build_thread_pool(parallel.threads)?,
            target: RenderTarget::default(),
        })
    }

    /// Number of worker threads in the pool.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl std::fmt::Debug for ParallelRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallelRenderer")
            .field("opts", &self.opts)
            .field("tile_rows", &self.tile_rows)
            .field("threads", &self.threads())
            .finish_non_exhaustive()
    }
}

impl CircleRenderer for ParallelRenderer {
    fn tag(&self) -> &'static str {
        "par"
    }

    fn alloc_output_image(&mut self, width: u32, height: u32) -> RenderResult<()> {
        self.target.alloc(width, height)
    }

    fn set_scene(&mut self, scene: Scene) {
        self.target.set_scene(scene);
    }

    fn clear_image(&mut self) -> RenderResult<()> {
        self.target.clear(self.opts.clear_rgba)
    }

    #[tracing::instrument(skip(self))]
    fn render(&mut self) -> RenderResult<()> {
        let tile_rows = self.tile_rows;
        let pool = &self.pool;
        let (scene, image) = self.target.parts_mut()?;
        let (width, height) = image.dims();
        let circles = scene.circles();

        let bounds: Vec<PixelBounds> = pool.install(|| {
            circles
                .par_iter()
                .map(|c| pixel_bounds(c, width, height))
                .collect()
        });
        let bins = bin_by_band(&bounds, height, tile_rows);

        let band_len = width as usize * 4 * tile_rows as usize;
        pool.install(|| {
            image
                .data_mut()
                .par_chunks_mut(band_len)
                .zip(bins.par_iter())
                .enumerate()
                .for_each(|(t, (data, bin))| {
                    let y0 = t as u32 * tile_rows;
                    let y1 = (y0 + tile_rows).min(height);
                    let mut band = RowBand {
                        data,
                        y0,
                        y1,
                        width,
                        height,
                    };
                    for &i in bin {
                        composite_circle(&circles[i], bounds[i], &mut band);
                    }
                });
        });

        tracing::debug!(
            circles = circles.len(),
            bands = bins.len(),
            width,
            height,
            "parallel render done"
        );
        Ok(())
    }

    fn image(&self) -> Option<&Image> {
        self.target.image()
    }
}

/// Circle indices per band, each list in ascending scene order.
fn bin_by_band(bounds: &[PixelBounds], height: u32, tile_rows: u32) -> Vec<Vec<usize>> {
    let bands = height.div_ceil(tile_rows) as usize;
    let mut bins = vec![Vec::new(); bands];
    for (i, b) in bounds.iter().enumerate() {
        if b.is_empty() {
            continue;
        }
        let first = (b.min_y / tile_rows) as usize;
        let last = ((b.max_y - 1) / tile_rows) as usize;
        for bin in &mut bins[first..=last] {
            bin.push(i);
        }
    }
    bins
}

fn build_thread_pool(threads: Option<usize>) -> RenderResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(RenderError::validation(
            "parallel 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| RenderError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/parallel.rs"]
mod tests;
