// ui.rs - eframe host: frame loop as timer, hover as pointer-move, resize

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Vec2};
use life::printer::print_grid;
use life::{Simulation, TickClock};

use crate::surface::PainterSurface;

const BACKGROUND: Color32 = Color32::WHITE;

pub struct LifeApp {
    simulation: Simulation,
    clock: TickClock,
    surface_size: Vec2,
    show_printed: bool,
}

impl LifeApp {
    pub fn new(simulation: Simulation) -> Self {
        let clock = TickClock::new(simulation.config().tick_period, Instant::now());
        let show_printed = simulation.config().show_printed;
        Self {
            simulation,
            clock,
            surface_size: Vec2::ZERO,
            show_printed,
        }
    }

    fn note_resize(&mut self, size: Vec2) {
        if size != self.surface_size {
            let grid = self.simulation.grid();
            log::info!(
                "surface resized to {}x{}, grid stays {}x{}",
                size.x,
                size.y,
                grid.width(),
                grid.height()
            );
            self.surface_size = size;
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.clock.poll(Instant::now()) {
            if let Err(err) = self.simulation.tick() {
                log::warn!("tick skipped: {err}");
            }
        }

        if self.show_printed {
            egui::SidePanel::right("printed").show(ctx, |ui| {
                egui::ScrollArea::both().show(ui, |ui| {
                    ui.monospace(print_grid(self.simulation.grid()));
                });
            });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Generation:");
                    ui.label(self.simulation.generation().to_string());
                });

                let available = ui.available_size();
                let (response, painter) = ui.allocate_painter(available, egui::Sense::hover());

                let mut surface = PainterSurface::new(&painter, response.rect.min, BACKGROUND);
                let (w, h) = (available.x, available.y);
                let size = self.simulation.fit_surface(&mut surface, w, h);
                self.note_resize(Vec2::from(size));
                self.simulation.render(&mut surface);

                // Splash on movement only, like a mousemove listener.
                if let Some(pos) = response.hover_pos() {
                    if ctx.input(|i| i.pointer.is_moving()) {
                        let local = pos - response.rect.min;
                        self.simulation.pointer_moved(local.x, local.y);
                    }
                }
            });

        ctx.request_repaint_after(self.clock.remaining(Instant::now()));
    }
}
