//! Palette and egui style for the portfolio shell.

use eframe::egui;
use view_core::NoticeKind;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub app_background: egui::Color32,
    pub top_bar: egui::Color32,
    pub card: egui::Color32,
    pub accent: egui::Color32,
    pub error_text: egui::Color32,
}

pub fn palette() -> Palette {
    Palette {
        app_background: egui::Color32::from_rgb(24, 26, 31),
        top_bar: egui::Color32::from_rgb(32, 35, 42),
        card: egui::Color32::from_rgb(38, 42, 51),
        accent: egui::Color32::from_rgb(37, 99, 235),
        error_text: egui::Color32::from_rgb(244, 113, 113),
    }
}

/// Fill and stroke for banners and toasts by kind.
pub fn notice_colors(kind: NoticeKind) -> (egui::Color32, egui::Stroke) {
    match kind {
        NoticeKind::Success => (
            egui::Color32::from_rgb(53, 111, 64),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(96, 175, 112)),
        ),
        NoticeKind::Error => (
            egui::Color32::from_rgb(111, 53, 53),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
        ),
        NoticeKind::Info => (
            egui::Color32::from_rgb(53, 77, 111),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(96, 124, 175)),
        ),
    }
}

pub fn lighten(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

pub fn apply(ctx: &egui::Context) {
    let palette = palette();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::dark();
    style.visuals.panel_fill = palette.app_background;
    style.visuals.selection.bg_fill = palette.accent;

    // Make text inputs reliably clickable and visible:
    style.visuals.widgets.inactive.bg_stroke =
        egui::Stroke::new(1.0, style.visuals.widgets.noninteractive.bg_stroke.color);
    style.visuals.widgets.hovered.bg_stroke =
        egui::Stroke::new(1.0, style.visuals.widgets.hovered.bg_stroke.color);
    style.visuals.widgets.active.bg_stroke =
        egui::Stroke::new(1.2, style.visuals.selection.bg_fill.gamma_multiply(0.9));

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    style.spacing.interact_size = egui::vec2(40.0, 30.0);
    ctx.set_style(style);
}
