// lib.rs - Conway's Game of Life drawn as a field of circles

pub mod config;
pub mod error;
pub mod grid;
pub mod interaction;
pub mod printer;
pub mod render;
pub mod simulation;

pub use config::LifeConfig;
pub use error::{LifeError, Result};
pub use grid::{Edges, Grid};
pub use render::{Layout, Rgb, Surface};
pub use simulation::{Phase, Simulation, TickClock};
