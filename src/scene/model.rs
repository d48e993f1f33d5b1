use std::io::Write;

/// Opacity applied to every circle, independent of the scene.
pub const CIRCLE_ALPHA: f32 = 0.5;

/// One translucent circle in normalized `[0,1]^2` space.
///
/// `z` only orders circles during generation; rendering reads the list order instead.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Circle {
    /// Center x in normalized units.
    pub x: f32,
    /// Center y in normalized units.
    pub y: f32,
    /// Depth in `[0,1]`, larger is farther.
    pub z: f32,
    /// Radius in normalized units.
    pub radius: f32,
    /// Straight RGB color.
    pub color: [f32; 3],
}

impl Circle {
    /// Build a circle from its center, depth, radius and color.
    pub fn new(x: f32, y: f32, z: f32, radius: f32, color: [f32; 3]) -> Self {
        Self {
            x,
            y,
            z,
            radius,
            color,
        }
    }
}

/// Ordered circle list. Index order is back-to-front painter order and never changes after load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    circles: Vec<Circle>,
}

impl Scene {
    /// Wrap an already ordered circle list.
    pub fn from_circles(circles: Vec<Circle>) -> Self {
        Self { circles }
    }

    /// Circles in compositing order.
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Number of circles.
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    /// Return `true` when the scene holds no circles.
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Write the circle count followed by one `x y z     radius` line per circle.
    pub fn write_particles<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        writeln!(out, "{}", self.circles.len())?;
        for c in &self.circles {
            writeln!(
                out,
                "{:.6} {:.6} {:.6}     {:.6}",
                c.x, c.y, c.z, c.radius
            )?;
        }
        out.flush()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
