use egui::{RichText, Ui};

use crate::ui::helpers::{EMERALD, INDIGO, ROSE};
use crate::view_models::ExplanationCard;

pub fn ui_explanation_card(ui: &mut Ui, card: &ExplanationCard) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(16, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let verdict = if card.was_correct {
                RichText::new("✅ ¡Bien!").color(EMERALD)
            } else {
                RichText::new("❌ Esta vez no").color(ROSE)
            };
            ui.horizontal(|ui| {
                ui.heading("📖 Explicación");
                ui.label(verdict.strong());
            });
            ui.add_space(8.0);

            ui.label(RichText::new("Respuesta correcta").small().weak());
            ui.label(
                RichText::new(&card.correct_answer)
                    .size(22.0)
                    .strong()
                    .color(EMERALD),
            );
            ui.add_space(6.0);

            ui.label(RichText::new("Regla gramatical").small().weak());
            ui.label(&card.rule);
            ui.add_space(6.0);

            ui.label(RichText::new("Ejemplo").small().weak());
            ui.label(
                RichText::new(format!("\"{}\"", card.example))
                    .italics()
                    .color(INDIGO),
            );
            ui.add_space(6.0);

            ui.label(RichText::new("Error frecuente").small().weak());
            ui.label(RichText::new(&card.common_mistake).color(ROSE));
        });
}
