//! Reusable panel pieces: form fields, banners, toasts, project cards.

use eframe::egui;
use shared::domain::FieldSpec;
use view_core::{CardVisual, Notice, NoticeKind, ProjectCard};

use crate::ui::theme::{self, Palette};

fn ui_in_rect(ui: &mut egui::Ui, rect: egui::Rect, add: impl FnOnce(&mut egui::Ui)) {
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::top_down(egui::Align::Min)),
    );
    child.set_clip_rect(rect.expand(2.0));
    add(&mut child);
}

/// Labelled text input with its single error indicator underneath.
pub fn labelled_field(
    ui: &mut egui::Ui,
    spec: &FieldSpec,
    value: &mut String,
    error: Option<&str>,
    palette: &Palette,
) -> egui::Response {
    let label = if spec.required {
        format!("{} *", spec.label)
    } else {
        spec.label.clone()
    };
    ui.label(egui::RichText::new(label).strong());

    let id = format!("contact_field_{}", spec.name);
    let response = if spec.multiline {
        ui.add(
            egui::TextEdit::multiline(value)
                .id_salt(id)
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        )
    } else {
        ui.add(
            egui::TextEdit::singleline(value)
                .id_salt(id)
                .desired_width(f32::INFINITY),
        )
    };

    if let Some(error) = error {
        ui.label(
            egui::RichText::new(error)
                .color(palette.error_text)
                .small(),
        );
    }
    response
}

/// Inline banner above the form. Returns true when the user dismissed it.
pub fn form_banner(ui: &mut egui::Ui, kind: NoticeKind, message: &str) -> bool {
    let mut dismissed = false;
    let (fill, stroke) = theme::notice_colors(kind);
    egui::Frame::NONE
        .fill(fill)
        .stroke(stroke)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(message).color(egui::Color32::WHITE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Dismiss").clicked() {
                        dismissed = true;
                    }
                });
            });
        });
    dismissed
}

/// Corner toast. `slide` is 0.0 fully off-screen to 1.0 fully shown.
pub fn toast(ctx: &egui::Context, notice: &Notice, slide: f32) {
    const TOAST_WIDTH: f32 = 320.0;
    const MARGIN: f32 = 16.0;

    let x_off = (1.0 - slide) * (TOAST_WIDTH + MARGIN);
    let (fill, stroke) = theme::notice_colors(notice.kind);
    egui::Area::new(egui::Id::new("corner_toast"))
        .anchor(
            egui::Align2::RIGHT_TOP,
            egui::vec2(-MARGIN + x_off, MARGIN + 40.0),
        )
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            ui.set_width(TOAST_WIDTH);
            egui::Frame::NONE
                .fill(fill)
                .stroke(stroke)
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(egui::Margin::symmetric(12, 10))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(&notice.message).color(egui::Color32::WHITE));
                });
        });
}

/// One gallery card at its current transition state.
pub fn project_card(ui: &mut egui::Ui, card: &ProjectCard, visual: CardVisual, palette: &Palette) {
    let size = egui::vec2(240.0, 120.0);
    let (rect, _response) = ui.allocate_exact_size(size, egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let draw_rect = rect.translate(egui::vec2(0.0, visual.y_offset));
    ui_in_rect(ui, draw_rect, |ui| {
        ui.set_opacity(visual.alpha);
        egui::Frame::NONE
            .fill(palette.card)
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::symmetric(12, 10))
            .show(ui, |ui| {
                ui.set_min_width(size.x - 24.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&card.project.title).strong());
                    if let Some(category) = card.project.category.as_deref() {
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(
                                    egui::RichText::new(category)
                                        .small()
                                        .color(theme::lighten(palette.accent, 0.4)),
                                );
                            },
                        );
                    }
                });
                ui.label(egui::RichText::new(&card.project.blurb).weak().small());
            });
    });
}
