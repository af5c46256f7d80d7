// main.rs - Game of Life window: circles on a canvas, splashed by the pointer

use eframe::egui;
use life::{LifeConfig, Simulation};

mod surface;
mod ui;

use ui::LifeApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = LifeConfig::default();
    let mut simulation = Simulation::new(config);
    if let Err(err) = simulation.setup().and_then(|()| simulation.start()) {
        log::error!("could not start simulation: {err}");
        std::process::exit(1);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|_cc| Box::new(LifeApp::new(simulation))),
    )
}
