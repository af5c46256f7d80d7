// config.rs - Compile-time configuration for the simulation

use std::time::Duration;

use crate::grid::Edges;
use crate::render::Rgb;

// These values are the most aesthetically pleasing
pub const GRID_WIDTH: usize = 50;                       // Cells per row
pub const GRID_HEIGHT: usize = 100;                     // Rows
pub const CELL_SPACING: f32 = 15.0;                     // Pixels between cell centers
pub const CELL_RADIUS: f32 = 5.0;                       // Circle radius in pixels
pub const TICK_PERIOD: Duration = Duration::from_millis(300);
pub const LIVE_PROBABILITY: f64 = 1.0 / 3.0;            // Chance a cell starts alive
pub const EDGES: Edges = Edges::Inclusive;              // Neighbor window used by the running app

pub const OUTLINE_COLOR: Rgb = Rgb::new(0xcc, 0xcc, 0xcc);       // #ccc
pub const LIVE_COLOR: Rgb = Rgb::new(0x44, 0x44, 0x44);          // #444

#[derive(Debug, Clone)]
pub struct LifeConfig {
    pub width: usize,
    pub height: usize,
    pub cell_spacing: f32,
    pub cell_radius: f32,
    pub tick_period: Duration,
    pub live_probability: f64,
    pub edges: Edges,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Show the textual grid dump alongside the counter.
    pub show_printed: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            cell_spacing: CELL_SPACING,
            cell_radius: CELL_RADIUS,
            tick_period: TICK_PERIOD,
            live_probability: LIVE_PROBABILITY,
            edges: EDGES,
            seed: None,
            show_printed: false,
        }
    }
}

impl LifeConfig {
    /// Floors a host size down to a whole number of cells.
    pub fn snap_to_cells(&self, width: f32, height: f32) -> (f32, f32) {
        let n = self.cell_spacing;
        ((width / n).floor().max(0.0) * n, (height / n).floor().max(0.0) * n)
    }
}
