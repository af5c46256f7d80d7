// surface.rs - egui painter as a drawing surface

use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};
use life::{Rgb, Surface};

const OUTLINE_WIDTH: f32 = 1.0;

fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Wraps the painter of the canvas area. Coordinates are relative to the
/// canvas origin. egui has no path API, so a path holds a single circle.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    size: Vec2,
    background: Color32,
    circle: Option<(Pos2, f32)>,
    stroke_color: Color32,
    fill_color: Color32,
}

impl<'a> PainterSurface<'a> {
    /// Starts empty at `origin`; the host sizes it with `set_size`.
    pub fn new(painter: &'a Painter, origin: Pos2, background: Color32) -> Self {
        Self {
            painter,
            origin,
            size: Vec2::ZERO,
            background,
            circle: None,
            stroke_color: Color32::BLACK,
            fill_color: Color32::BLACK,
        }
    }
}

impl Surface for PainterSurface<'_> {
    fn size(&self) -> (f32, f32) {
        (self.size.x, self.size.y)
    }

    fn set_size(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    fn clear(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let rect = Rect::from_min_size(self.origin + Vec2::new(x, y), Vec2::new(width, height));
        self.painter.rect_filled(rect, 0.0, self.background);
    }

    fn begin_path(&mut self) {
        self.circle = None;
    }

    fn arc(&mut self, cx: f32, cy: f32, radius: f32, _start: f32, _end: f32) {
        self.circle = Some((self.origin + Vec2::new(cx, cy), radius));
    }

    fn set_stroke_style(&mut self, rgb: Rgb) {
        self.stroke_color = color(rgb);
    }

    fn stroke(&mut self) {
        if let Some((center, radius)) = self.circle {
            self.painter
                .circle_stroke(center, radius, Stroke::new(OUTLINE_WIDTH, self.stroke_color));
        }
    }

    fn set_fill_style(&mut self, rgb: Rgb) {
        self.fill_color = color(rgb);
    }

    fn fill(&mut self) {
        if let Some((center, radius)) = self.circle {
            self.painter.circle_filled(center, radius, self.fill_color);
        }
    }
}
