use crate::scene::model::{CIRCLE_ALPHA, Circle};

/// Half-open pixel ranges `[min, max)` covered by a circle's bounding box, clamped to the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PixelBounds {
    pub(crate) min_x: u32,
    pub(crate) max_x: u32,
    pub(crate) min_y: u32,
    pub(crate) max_y: u32,
}

impl PixelBounds {
    pub(crate) fn is_empty(self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }
}

/// Scale the normalized bounding box to pixels: truncate, widen the upper bound by one, clamp.
pub(crate) fn pixel_bounds(c: &Circle, width: u32, height: u32) -> PixelBounds {
    let w = width as f32;
    let h = height as f32;
    let clamp = |v: i64, hi: u32| v.clamp(0, i64::from(hi)) as u32;

    PixelBounds {
        min_x: clamp(((c.x - c.radius) * w) as i64, width),
        max_x: clamp(((c.x + c.radius) * w) as i64 + 1, width),
        min_y: clamp(((c.y - c.radius) * h) as i64, height),
        max_y: clamp(((c.y + c.radius) * h) as i64 + 1, height),
    }
}

/// Blend `c` into one RGBA pixel if the pixel center lies inside the circle.
///
/// `center_x`/`center_y` are the pixel center in normalized space.
#[inline]
pub(crate) fn shade_pixel(c: &Circle, center_x: f32, center_y: f32, px: &mut [f32]) {
    let dx = c.x - center_x;
    let dy = c.y - center_y;
    let dist2 = dx * dx + dy * dy;
    if dist2 > c.radius * c.radius {
        return;
    }

    let alpha = CIRCLE_ALPHA;
    let inv = 1.0 - alpha;
    px[0] = alpha * c.color[0] + inv * px[0];
    px[1] = alpha * c.color[1] + inv * px[1];
    px[2] = alpha * c.color[2] + inv * px[2];
    px[3] += alpha;
}

/// Horizontal band of image rows `[y0, y1)` backed by its own slice of channel data.
pub(crate) struct RowBand<'a> {
    pub(crate) data: &'a mut [f32],
    pub(crate) y0: u32,
    pub(crate) y1: u32,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

/// Composite one circle into the rows of `band` that its bounds overlap.
pub(crate) fn composite_circle(c: &Circle, bounds: PixelBounds, band: &mut RowBand<'_>) {
    let y0 = bounds.min_y.max(band.y0);
    let y1 = bounds.max_y.min(band.y1);
    if y0 >= y1 || bounds.min_x >= bounds.max_x {
        return;
    }

    let inv_w = 1.0 / band.width as f32;
    let inv_h = 1.0 / band.height as f32;
    let stride = band.width as usize * 4;
    let span = (bounds.max_x - bounds.min_x) as usize * 4;

    for py in y0..y1 {
        let center_y = inv_h * (py as f32 + 0.5);
        let start = (py - band.y0) as usize * stride + bounds.min_x as usize * 4;
        let row = &mut band.data[start..start + span];
        for (i, px) in row.chunks_exact_mut(4).enumerate() {
            let center_x = inv_w * ((bounds.min_x as usize + i) as f32 + 0.5);
            shade_pixel(c, center_x, center_y, px);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/shade.rs"]
mod tests;
