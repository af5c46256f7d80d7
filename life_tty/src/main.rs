// main.rs - Headless runner: a tokio interval drives the simulation

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use life::printer::print_grid;
use life::{LifeConfig, Simulation};
use tokio::time::{self, MissedTickBehavior};

#[derive(Parser, Debug)]
struct Args {
    /// ms per generation
    #[arg(long, default_value_t = 300)]
    ms: u64,

    /// fixed RNG seed for a reproducible start
    #[arg(long)]
    seed: Option<u64>,

    /// print the grid after every generation
    #[arg(long, default_value_t = false)]
    print: bool,

    /// stop after N generations (0 = run until Ctrl-C)
    #[arg(long, default_value_t = 0)]
    generations: u64,
}

impl Args {
    fn config(&self) -> LifeConfig {
        LifeConfig {
            tick_period: Duration::from_millis(self.ms.max(1)),
            seed: self.seed,
            show_printed: self.print,
            ..LifeConfig::default()
        }
    }
}

/// One-line projection of the grid, printed every generation.
fn summary(simulation: &Simulation) -> String {
    let grid = simulation.grid();
    format!(
        "cycle {}: {} of {} cells live",
        simulation.generation(),
        grid.live_count(),
        grid.cells().len()
    )
}

fn emit(simulation: &Simulation) {
    println!("{}", summary(simulation));
    if simulation.config().show_printed {
        println!("{}\n", print_grid(simulation.grid()));
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut simulation = Simulation::new(args.config());
    simulation.setup().context("seeding the grid")?;
    emit(&simulation);
    simulation.start().context("starting the timer")?;

    let mut interval = time::interval(simulation.config().tick_period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; setup already counted as one.
    interval.tick().await;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut remaining = args.generations;
    loop {
        tokio::select! {
            _ = interval.tick() => {
                simulation.tick().context("advancing a generation")?;
                emit(&simulation);
                if remaining > 0 {
                    remaining -= 1;
                    if remaining == 0 {
                        break;
                    }
                }
            }
            signal = &mut ctrl_c => {
                signal.context("listening for Ctrl-C")?;
                log::info!("interrupted at generation {}", simulation.generation());
                break;
            }
        }
    }

    log::info!(
        "stopped at generation {} with {} live cells",
        simulation.generation(),
        simulation.grid().live_count()
    );
    Ok(())
}
