//! Stats overlay: frame rate, network size, loop state

use eframe::egui;

use crate::core::{LoopState, Quality};
use crate::theme::colors;
use super::NeuralCanvasApp;

impl NeuralCanvasApp {
    pub(crate) fn render_stats(&self, ctx: &egui::Context) {
        let Some(sim) = self.sim.as_ref() else {
            return;
        };

        let network = sim.network();
        let fps = sim.fps().map_or_else(|| "-- fps".to_string(), |fps| format!("{:.0} fps", fps));

        let (state_color, state_text) = match sim.state() {
            LoopState::Running => (colors::RUNNING, "Running"),
            LoopState::Stopped => (colors::STOPPED, "Stopped"),
        };
        let quality_color = match sim.quality() {
            Quality::Full => colors::TEXT_SECONDARY,
            Quality::Reduced => colors::REDUCED,
        };

        egui::Area::new(egui::Id::new("stats_overlay"))
            .anchor(egui::Align2::LEFT_TOP, egui::vec2(8.0, 8.0))
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(colors::BG_OVERLAY)
                    .corner_radius(4.0)
                    .inner_margin(6.0)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            let state = egui::RichText::new(state_text).size(11.0);
                            ui.colored_label(state_color, state);
                            ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED).size(11.0));
                            ui.label(
                                egui::RichText::new(fps)
                                    .color(colors::TEXT_SECONDARY)
                                    .monospace()
                                    .size(11.0),
                            );
                            ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED).size(11.0));
                            ui.label(
                                egui::RichText::new(format!(
                                    "{} nodes {} links",
                                    network.particles().len(),
                                    network.edges().len()
                                ))
                                .color(colors::TEXT_MUTED)
                                .monospace()
                                .size(11.0),
                            );
                            ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED).size(11.0));
                            ui.label(
                                egui::RichText::new(format!("{} quality", sim.quality().label()))
                                    .color(quality_color)
                                    .size(11.0),
                            );
                        });
                    });
            });
    }
}
