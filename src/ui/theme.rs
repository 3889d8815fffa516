//! Theme configuration for egui.
//!
//! A quiet dark theme tuned for long stretches of plain text.

use egui::{Color32, FontFamily, FontId, Stroke, TextStyle};

/// Apply the editor theme to the egui context.
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    let bg_color = Color32::from_rgb(30, 30, 36);
    let panel_color = Color32::from_rgb(38, 38, 46);
    let widget_color = Color32::from_rgb(50, 50, 62);
    let text_color = Color32::from_rgb(224, 224, 224);

    style.visuals = egui::Visuals::dark();

    style.visuals.panel_fill = panel_color;
    style.visuals.window_fill = bg_color;
    style.visuals.extreme_bg_color = bg_color;

    style.visuals.widgets.noninteractive.bg_fill = widget_color;
    style.visuals.widgets.inactive.bg_fill = widget_color;
    style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(64, 64, 84);
    style.visuals.widgets.active.bg_fill = accent_color();

    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::BLACK);

    style.visuals.selection.bg_fill = accent_color().gamma_multiply(0.35);
    style.visuals.selection.stroke = Stroke::new(1.0, accent_color());

    // Editor body text
    style
        .text_styles
        .insert(TextStyle::Monospace, FontId::new(15.0, FontFamily::Monospace));

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);

    ctx.set_style(style);
}

pub fn accent_color() -> Color32 {
    Color32::from_rgb(100, 181, 246)
}

/// Color for the "no document" hint and status text.
pub fn dim_text_color() -> Color32 {
    Color32::from_rgb(136, 136, 136)
}
