// simulation.rs - Owns the grid and drives step + render on a fixed period

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::LifeConfig;
use crate::error::{LifeError, Result};
use crate::grid::Grid;
use crate::interaction;
use crate::render::{self, Layout, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Initialized,
    Running,
}

pub struct Simulation {
    config: LifeConfig,
    layout: Layout,
    grid: Grid,
    generation: u64,
    phase: Phase,
    rng: StdRng,
}

impl Simulation {
    pub fn new(config: LifeConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            layout: Layout::from_config(&config),
            grid: Grid::new(config.width, config.height),
            generation: 0,
            phase: Phase::Uninitialized,
            rng,
            config,
        }
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Randomizes the grid from the simulation's own RNG.
    pub fn setup(&mut self) -> Result<()> {
        self.ensure_uninitialized()?;
        let grid = Grid::random(
            self.config.width,
            self.config.height,
            self.config.live_probability,
            &mut self.rng,
        )?;
        self.install(grid);
        Ok(())
    }

    /// Same as [`Simulation::setup`] with a caller-provided RNG.
    pub fn setup_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.ensure_uninitialized()?;
        let grid = Grid::random(
            self.config.width,
            self.config.height,
            self.config.live_probability,
            rng,
        )?;
        self.install(grid);
        Ok(())
    }

    fn ensure_uninitialized(&self) -> Result<()> {
        match self.phase {
            Phase::Uninitialized => Ok(()),
            _ => Err(LifeError::AlreadyInitialized),
        }
    }

    // Setup counts as a generation.
    fn install(&mut self, grid: Grid) {
        self.grid = grid;
        self.generation += 1;
        self.phase = Phase::Initialized;
        log::info!(
            "grid {}x{} seeded with {} live cells",
            self.grid.width(),
            self.grid.height(),
            self.grid.live_count()
        );
    }

    pub fn start(&mut self) -> Result<()> {
        match self.phase {
            Phase::Uninitialized => Err(LifeError::NotInitialized),
            Phase::Initialized => {
                self.phase = Phase::Running;
                log::debug!("timer started, period {:?}", self.config.tick_period);
                Ok(())
            }
            Phase::Running => Ok(()),
        }
    }

    /// Advances one generation. The previous buffer is replaced wholesale.
    pub fn tick(&mut self) -> Result<()> {
        if self.phase != Phase::Running {
            return Err(LifeError::NotRunning);
        }
        self.generation += 1;
        self.grid = self.grid.step(self.config.edges);
        log::trace!(
            "generation {}: {} live",
            self.generation,
            self.grid.live_count()
        );
        Ok(())
    }

    /// Sizes the surface to the largest whole number of cells that fits the
    /// host area. The grid keeps its dimensions.
    pub fn fit_surface<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        available_width: f32,
        available_height: f32,
    ) -> (f32, f32) {
        let (width, height) = self.config.snap_to_cells(available_width, available_height);
        surface.set_size(width, height);
        (width, height)
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        render::render(&self.grid, surface, &self.layout);
    }

    /// Pointer moved to `(px, py)` in surface pixels.
    pub fn pointer_moved(&mut self, px: f32, py: f32) -> usize {
        interaction::pointer_moved(&mut self.grid, px, py, self.config.cell_spacing)
    }
}

/// Fixed-period pacing for hosts that poll once per frame.
#[derive(Debug, Clone)]
pub struct TickClock {
    period: Duration,
    last_tick: Instant,
}

impl TickClock {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            last_tick: now,
        }
    }

    /// True once a full period has elapsed since the last tick; resets the
    /// clock when it fires.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) >= self.period {
            self.last_tick = now;
            true
        } else {
            false
        }
    }

    /// Time left until the next tick is due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.period
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }
}
