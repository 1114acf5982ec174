//! [`Surface`] over an egui painter
//!
//! Coordinates handed in by the simulator are surface-local pixels; the
//! painter works in screen points, so everything is offset by the canvas
//! rect origin.

use eframe::egui;
use glam::Vec2;

use crate::core::{RadialGradient, Rgba, Surface};
use crate::theme::colors;

/// Segments per ring when tessellating gradient circles
const GRADIENT_SEGMENTS: u32 = 24;

pub fn to_color32(color: Rgba) -> egui::Color32 {
    let alpha = (color.a.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, alpha)
}

pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        self.rect.min + egui::vec2(p.x, p.y)
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, colors::BG_PRIMARY);
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            egui::Stroke::new(width, to_color32(color)),
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.painter.circle_filled(self.to_screen(center), radius, to_color32(color));
    }

    /// egui has no gradient brush, so the circle is built as a mesh of
    /// concentric rings, one per gradient stop inside `radius` plus the rim.
    fn fill_circle_gradient(&mut self, center: Vec2, radius: f32, gradient: &RadialGradient<'_>) {
        if radius <= 0.0 {
            return;
        }

        let c = self.to_screen(center);
        let mut rings: Vec<f32> = gradient
            .stops
            .iter()
            .map(|stop| stop.offset * gradient.radius)
            .filter(|&r| r > 0.0 && r < radius)
            .collect();
        rings.push(radius);

        let mut mesh = egui::Mesh::default();
        mesh.colored_vertex(c, to_color32(gradient.color_at(0.0)));
        for &r in &rings {
            let color = to_color32(gradient.color_at(r));
            for k in 0..GRADIENT_SEGMENTS {
                let angle = k as f32 / GRADIENT_SEGMENTS as f32 * std::f32::consts::TAU;
                mesh.colored_vertex(c + egui::vec2(angle.cos(), angle.sin()) * r, color);
            }
        }

        // Centre fan
        for k in 0..GRADIENT_SEGMENTS {
            mesh.add_triangle(0, 1 + k, 1 + (k + 1) % GRADIENT_SEGMENTS);
        }
        // Bands between consecutive rings
        for ring in 1..rings.len() as u32 {
            let inner = 1 + (ring - 1) * GRADIENT_SEGMENTS;
            let outer = 1 + ring * GRADIENT_SEGMENTS;
            for k in 0..GRADIENT_SEGMENTS {
                let next = (k + 1) % GRADIENT_SEGMENTS;
                mesh.add_triangle(inner + k, outer + k, outer + next);
                mesh.add_triangle(inner + k, outer + next, inner + next);
            }
        }

        self.painter.add(egui::Shape::mesh(mesh));
    }
}
