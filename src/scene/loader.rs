use std::str::FromStr;

use crate::{
    foundation::error::RenderError,
    foundation::rng::{Rng64, SCENE_SEED},
    scene::model::{Circle, Scene},
};

/// Named scenes the generator knows how to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneName {
    /// Three overlapping circles: red (far), green, blue (near).
    Rgb,
    /// Four hand-placed circles of three sizes.
    Rgby,
    /// 10,000 random circles.
    Rand10k,
    /// 100,000 random circles.
    Rand100k,
    /// Two overlaid square grids (16x16 red, 31x31 yellow).
    Pattern,
}

impl SceneName {
    /// Every known scene, in CLI listing order.
    pub const ALL: [SceneName; 5] = [
        SceneName::Rgb,
        SceneName::Rgby,
        SceneName::Rand10k,
        SceneName::Rand100k,
        SceneName::Pattern,
    ];

    /// Identifier accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            SceneName::Rgb => "rgb",
            SceneName::Rgby => "rgby",
            SceneName::Rand10k => "rand10k",
            SceneName::Rand100k => "rand100k",
            SceneName::Pattern => "pattern",
        }
    }
}

impl std::fmt::Display for SceneName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SceneName {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SceneName::ALL
            .into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| RenderError::UnknownScene(s.to_string()))
    }
}

/// Build a named scene from a fresh generator seeded with [`SCENE_SEED`].
pub fn load_scene(name: SceneName) -> Scene {
    let mut rng = Rng64::new(SCENE_SEED);
    generate_scene(name, &mut rng)
}

/// Build a named scene, drawing every random value from `rng`.
#[tracing::instrument(skip(rng))]
pub fn generate_scene(name: SceneName, rng: &mut Rng64) -> Scene {
    let circles = match name {
        SceneName::Rgb => rgb_circles(),
        SceneName::Rgby => rgby_circles(),
        SceneName::Rand10k => random_circles(10_000, rng),
        SceneName::Rand100k => random_circles(100_000, rng),
        SceneName::Pattern => pattern_circles(rng),
    };
    tracing::info!(circles = circles.len(), "loaded scene");
    Scene::from_circles(circles)
}

fn rgb_circles() -> Vec<Circle> {
    const R: f32 = 0.3;
    vec![
        Circle::new(0.4, 0.5, 0.75, R, [1.0, 0.0, 0.0]),
        Circle::new(0.5, 0.5, 0.5, R, [0.0, 1.0, 0.0]),
        Circle::new(0.6, 0.5, 0.25, R, [0.0, 0.0, 1.0]),
    ]
}

fn rgby_circles() -> Vec<Circle> {
    const TINY: f32 = 0.1;
    const SMALL: f32 = 0.19;
    const BIG: f32 = 0.25;
    vec![
        Circle::new(0.25, 0.25, 0.75, SMALL, [1.0, 0.0, 0.0]),
        Circle::new(0.3, 0.3, 0.5, SMALL, [0.0, 1.0, 0.0]),
        Circle::new(0.5, 0.5, 0.25, BIG, [0.0, 0.0, 1.0]),
        Circle::new(0.2, 0.2, 0.9, TINY, [1.0, 1.0, 0.0]),
    ]
}

fn random_circles(count: usize, rng: &mut Rng64) -> Vec<Circle> {
    let mut depths: Vec<f32> = (0..count).map(|_| rng.next_f32_01()).collect();
    // Farthest first.
    depths.sort_by(|a, b| b.total_cmp(a));

    depths
        .into_iter()
        .map(|z| {
            let radius = 0.02 + 0.06 * rng.next_f32_01();
            let x = rng.next_f32_01();
            let y = rng.next_f32_01();
            let color = if count <= 10_000 {
                [
                    0.1 + 0.9 * rng.next_f32_01(),
                    0.2 + 0.5 * rng.next_f32_01(),
                    0.5 + 0.5 * rng.next_f32_01(),
                ]
            } else {
                [
                    0.3 + 0.9 * rng.next_f32_01(),
                    0.1 + 0.9 * rng.next_f32_01(),
                    0.1 + 0.4 * rng.next_f32_01(),
                ]
            };
            Circle::new(x, y, z, radius, color)
        })
        .collect()
}

struct Grid {
    side: usize,
    radius: f32,
    offset: f32,
    color: [f32; 3],
}

fn pattern_circles(rng: &mut Rng64) -> Vec<Circle> {
    const SIDE_A: usize = 16;
    const SIDE_B: usize = 31;
    let radius = 0.5 * (1.0 / SIDE_A as f32);

    let mut out = Vec::with_capacity(SIDE_A * SIDE_A + SIDE_B * SIDE_B);
    push_grid(
        &mut out,
        Grid {
            side: SIDE_A,
            radius,
            offset: radius,
            color: [1.0, 0.0, 0.0],
        },
        rng,
    );
    push_grid(
        &mut out,
        Grid {
            side: SIDE_B,
            radius,
            offset: 0.0,
            color: [1.0, 1.0, 0.0],
        },
        rng,
    );
    out
}

fn push_grid(out: &mut Vec<Circle>, grid: Grid, rng: &mut Rng64) {
    let step = 2.0 * grid.radius;
    for j in 0..grid.side {
        for i in 0..grid.side {
            let x = grid.offset + step * i as f32;
            let y = grid.offset + step * j as f32;
            out.push(Circle::new(x, y, rng.next_f32_01(), grid.radius, grid.color));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/loader.rs"]
mod tests;
