// src/ui/helpers.rs
use egui::{Button, Color32, Response, RichText, Ui, Vec2};

use crate::model::Difficulty;
use crate::view_models::{OptionRow, OptionStatus};

pub const EMERALD: Color32 = Color32::from_rgb(16, 185, 129);
pub const ROSE: Color32 = Color32::from_rgb(244, 63, 94);
pub const INDIGO: Color32 = Color32::from_rgb(99, 102, 241);
pub const AMBER: Color32 = Color32::from_rgb(245, 158, 11);

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

pub fn difficulty_color(difficulty: Difficulty) -> Color32 {
    match difficulty {
        Difficulty::Junior => EMERALD,
        Difficulty::Middle => AMBER,
        Difficulty::Senior => ROSE,
    }
}

/// Etiqueta pequeña tipo "chip"
pub fn tag(ui: &mut Ui, text: &str, color: Color32) {
    egui::Frame::default()
        .stroke(egui::Stroke::new(1.0, color))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().strong().color(color));
        });
}

pub fn option_button(ui: &mut Ui, row: &OptionRow, width: f32) -> bool {
    add_option_button(ui, row, width).clicked()
}

/// Botón de opción; deshabilitado cuando la respuesta ya está enviada
pub fn add_option_button(ui: &mut Ui, row: &OptionRow, width: f32) -> Response {
    let text = RichText::new(row.label()).size(17.0);
    let text = match row.status {
        OptionStatus::Dimmed => text.weak(),
        OptionStatus::Selected => text.color(INDIGO).strong(),
        _ => text,
    };

    let mut button = Button::new(text)
        .min_size(Vec2::new(width, 44.0))
        .selected(row.status == OptionStatus::Selected);
    match row.status {
        OptionStatus::Correct => button = button.fill(EMERALD.gamma_multiply(0.35)),
        OptionStatus::Wrong => button = button.fill(ROSE.gamma_multiply(0.35)),
        _ => {}
    }

    ui.add_enabled(row.enabled, button)
}
