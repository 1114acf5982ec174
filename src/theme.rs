//! Dark theme for the canvas host

use egui::Color32;

pub mod colors {
    use super::Color32;

    // === Backgrounds ===
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(5, 8, 18);          // #050812 - page backdrop
    pub const BG_OVERLAY: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 160);

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 240, 255);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(140, 170, 200);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(70, 90, 110);

    // === Status ===
    pub const RUNNING: Color32 = Color32::from_rgb(0, 254, 207);
    pub const STOPPED: Color32 = Color32::from_rgb(200, 100, 100);
    pub const REDUCED: Color32 = Color32::from_rgb(200, 200, 100);
}

/// Dark egui visuals matching the canvas backdrop
pub fn canvas_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_PRIMARY;
    visuals.extreme_bg_color = BG_PRIMARY;
    visuals.override_text_color = Some(TEXT_PRIMARY);

    // Flat overlay, no shadows
    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
