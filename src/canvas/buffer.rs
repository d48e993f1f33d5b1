use crate::foundation::error::{RenderError, RenderResult};

/// Row-major RGBA float image, 4 channels per pixel.
///
/// Dimensions stay fixed until the next [`Image::reallocate`]; renderers only mutate pixel values.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl Image {
    /// Allocate a zeroed image. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let len = pixel_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0.0; len],
        })
    }

    /// Replace the whole buffer with a zeroed one of the new size.
    ///
    /// The previous allocation is dropped before the new one is made.
    pub fn reallocate(&mut self, width: u32, height: u32) -> RenderResult<()> {
        let len = pixel_len(width, height)?;
        self.data = Vec::new();
        self.data = vec![0.0; len];
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` pair.
    pub fn dims(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Set every pixel to `rgba`.
    pub fn clear(&mut self, rgba: [f32; 4]) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Raw channel data, `4 * width * height` floats.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable raw channel data.
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Read one pixel. Panics when `(x, y)` is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 4] {
        let i = self.index(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Mutable access to one pixel. Panics when `(x, y)` is out of bounds.
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut [f32] {
        let i = self.index(x, y);
        &mut self.data[i..i + 4]
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        4 * (y as usize * self.width as usize + x as usize)
    }
}

fn pixel_len(width: u32, height: u32) -> RenderResult<usize> {
    if width == 0 || height == 0 {
        return Err(RenderError::validation(format!(
            "image dimensions must be > 0 (got {width}x{height})"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(4))
        .ok_or_else(|| {
            RenderError::validation(format!("image dimensions {width}x{height} overflow"))
        })
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/buffer.rs"]
mod tests;
