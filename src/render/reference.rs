use crate::{
    canvas::buffer::Image,
    foundation::error::RenderResult,
    render::backend::{CircleRenderer, RenderTarget, RendererOpts},
    render::shade::{RowBand, composite_circle, pixel_bounds},
    scene::model::Scene,
};

/// Sequential renderer that defines the expected output.
///
/// Circles are composited one at a time in scene order over the whole image.
#[derive(Debug, Default)]
pub struct RefRenderer {
    opts: RendererOpts,
    target: RenderTarget,
}

impl RefRenderer {
    /// Create a renderer with no image and an empty scene.
    pub fn new(opts: RendererOpts) -> Self {
        Self {
            opts,
            target: RenderTarget::default(),
        }
    }
}

impl CircleRenderer for RefRenderer {
    fn tag(&self) -> &'static str {
        "ref"
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
        let (scene, image) = self.target.parts_mut()?;
        let (width, height) = image.dims();
        let mut band = RowBand {
            data: image.data_mut(),
            y0: 0,
            y1: height,
            width,
            height,
        };

        for c in scene.circles() {
            composite_circle(c, pixel_bounds(c, width, height), &mut band);
        }
        tracing::debug!(circles = scene.len(), width, height, "reference render done");
        Ok(())
    }

    fn image(&self) -> Option<&Image> {
        self.target.image()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/reference.rs"]
mod tests;
