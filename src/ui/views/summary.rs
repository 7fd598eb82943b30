use egui::{Context, Grid, RichText};

use crate::QuizApp;
use crate::ui::helpers::{INDIGO, big_button};
use crate::ui::layout::scroll_panel;

pub fn ui_summary(app: &mut QuizApp, ctx: &Context) {
    let summary = app.summary_view();
    let mut restart = false;

    scroll_panel(ctx, 640.0, egui::Margin::symmetric(24, 24), |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("🏆").size(48.0));
            ui.heading("¡Práctica completada!");
            ui.label(RichText::new("Has terminado todas las preguntas de gramática").weak());
            ui.add_space(16.0);

            ui.label(RichText::new(summary.score_label()).size(44.0).strong().color(INDIGO));
            ui.label(RichText::new(summary.encouragement.message()).color(INDIGO));
            ui.add_space(16.0);

            restart = big_button(ui, "🔄 Empezar de nuevo", 260.0, 40.0, true);
            ui.add_space(12.0);

            if !summary.review_topics.is_empty() {
                ui.separator();
                ui.label(RichText::new("Temas recomendados para repasar").weak());
                ui.horizontal_wrapped(|ui| {
                    for topic in &summary.review_topics {
                        ui.label(RichText::new(format!("📌 {}", topic.label())).strong());
                    }
                });
                ui.add_space(12.0);
            }
        });

        ui.separator();
        ui.label("Resumen de respuestas:");
        ui.add_space(5.0);
        Grid::new("quiz_results_grid")
            .striped(true)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(RichText::new("#").strong());
                ui.label(RichText::new("Frase").strong());
                ui.label(RichText::new("Tu respuesta").strong());
                ui.label(RichText::new("Correcta").strong());
                ui.label(RichText::new("Estado").strong());
                ui.end_row();

                for row in &summary.rows {
                    ui.label(row.number.to_string());
                    ui.label(&row.sentence);
                    ui.label(row.chosen.as_deref().unwrap_or("—"));
                    ui.label(&row.correct);
                    ui.label(row.verdict_label());
                    ui.end_row();
                }
            });
    });

    if restart {
        app.pedir_reinicio();
    }
}
