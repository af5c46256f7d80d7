// render.rs - Projects a grid onto a 2D drawing surface as circles

use std::f32::consts::TAU;

use crate::config::{self, LifeConfig};
use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Host-owned drawing surface. Mirrors the small subset of a 2D canvas
/// context the renderer needs; the renderer never owns its lifecycle.
pub trait Surface {
    fn size(&self) -> (f32, f32);
    fn set_size(&mut self, width: f32, height: f32);
    fn clear(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn begin_path(&mut self);
    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32);
    fn set_stroke_style(&mut self, color: Rgb);
    fn stroke(&mut self);
    fn set_fill_style(&mut self, color: Rgb);
    fn fill(&mut self);
}

/// Geometry and colours for drawing cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub cell_spacing: f32,
    pub cell_radius: f32,
    pub outline: Rgb,
    pub live: Rgb,
}

impl Default for Layout {
    fn default() -> Self {
        Self::from_config(&LifeConfig::default())
    }
}

impl Layout {
    pub fn from_config(config: &LifeConfig) -> Self {
        Self {
            cell_spacing: config.cell_spacing,
            cell_radius: config.cell_radius,
            outline: config::OUTLINE_COLOR,
            live: config::LIVE_COLOR,
        }
    }

    /// Pixel center of cell `(x, y)`.
    pub fn center(&self, x: usize, y: usize) -> (f32, f32) {
        let n = self.cell_spacing;
        (x as f32 * n + n / 2.0, y as f32 * n + n / 2.0)
    }
}

/// Clears the surface and redraws every cell: an outline for all of them,
/// filled when alive.
pub fn render<S: Surface + ?Sized>(grid: &Grid, surface: &mut S, layout: &Layout) {
    let (width, height) = surface.size();
    surface.clear(0.0, 0.0, width, height);

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let alive = grid.cells()[x + y * grid.width()];
            let (cx, cy) = layout.center(x, y);

            surface.begin_path();
            surface.arc(cx, cy, layout.cell_radius, 0.0, TAU);
            surface.set_stroke_style(layout.outline);
            surface.stroke();
            if alive {
                surface.set_fill_style(layout.live);
                surface.fill();
            }
        }
    }
}
