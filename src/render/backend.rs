use crate::{
    canvas::buffer::Image,
    foundation::error::{RenderError, RenderResult},
    scene::loader::{SceneName, load_scene},
    scene::model::Scene,
};

/// Settings shared by every renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RendererOpts {
    /// Color every pixel is reset to by [`CircleRenderer::clear_image`].
    pub clear_rgba: [f32; 4],
}

impl Default for RendererOpts {
    fn default() -> Self {
        Self {
            clear_rgba: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Worker pool and tiling controls for the parallel renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallelOpts {
    /// Optional explicit worker thread count. `Some(0)` is rejected.
    pub threads: Option<usize>,
    /// Image rows per work item. `0` is treated as `1`.
    pub tile_rows: usize,
}

impl Default for ParallelOpts {
    fn default() -> Self {
        Self {
            threads: None,
            tile_rows: 16,
        }
    }
}

/// Capability set of a circle renderer.
///
/// Any implementation must produce exactly the pixels the sequential reference produces: each
/// pixel receives its circles' blends in scene order.
pub trait CircleRenderer: Send {
    /// Short tag used in frame file names and reports.
    fn tag(&self) -> &'static str;

    /// Allocate the output image, dropping any previous one.
    fn alloc_output_image(&mut self, width: u32, height: u32) -> RenderResult<()>;

    /// Install an already built scene.
    fn set_scene(&mut self, scene: Scene);

    /// Generate and install a named scene.
    fn load_scene(&mut self, name: SceneName) {
        self.set_scene(load_scene(name));
    }

    /// Reset the output image to the configured clear color.
    fn clear_image(&mut self) -> RenderResult<()>;

    /// Composite every circle of the loaded scene onto the output image.
    fn render(&mut self) -> RenderResult<()>;

    /// Current output image, if one has been allocated.
    fn image(&self) -> Option<&Image>;
}

/// Available renderer implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// Single-threaded ground truth.
    Reference,
    /// Tile-parallel renderer on a rayon pool.
    Parallel,
}

impl RendererKind {
    /// Tag written into file names for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            RendererKind::Reference => "ref",
            RendererKind::Parallel => "par",
        }
    }
}

/// Create a renderer of the requested kind.
///
/// `parallel` only affects [`RendererKind::Parallel`].
pub fn create_renderer(
    kind: RendererKind,
    opts: &RendererOpts,
    parallel: &ParallelOpts,
) -> RenderResult<Box<dyn CircleRenderer>> {
    match kind {
        RendererKind::Reference => Ok(Box::new(crate::render::reference::RefRenderer::new(
            *opts,
        ))),
        RendererKind::Parallel => Ok(Box::new(
            crate::render::parallel::ParallelRenderer::new(*opts, *parallel)?,
        )),
    }
}

/// Output image plus loaded scene, owned by one renderer.
#[derive(Debug, Default)]
pub(crate) struct RenderTarget {
    image: Option<Image>,
    scene: Scene,
}

impl RenderTarget {
    pub(crate) fn alloc(&mut self, width: u32, height: u32) -> RenderResult<()> {
        match self.image.as_mut() {
            Some(img) => img.reallocate(width, height),
            None => {
                self.image = Some(Image::new(width, height)?);
                Ok(())
            }
        }
    }

    pub(crate) fn set_scene(&mut self, scene: Scene) {
        self.scene = scene;
    }

    pub(crate) fn clear(&mut self, rgba: [f32; 4]) -> RenderResult<()> {
        self.image_mut()?.clear(rgba);
        Ok(())
    }

    pub(crate) fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// Split borrow of the scene and the image for a render pass.
    pub(crate) fn parts_mut(&mut self) -> RenderResult<(&Scene, &mut Image)> {
        let image = self
            .image
            .as_mut()
            .ok_or_else(|| RenderError::validation("no output image allocated"))?;
        Ok((&self.scene, image))
    }

    fn image_mut(&mut self) -> RenderResult<&mut Image> {
        self.parts_mut().map(|(_, img)| img)
    }
}
