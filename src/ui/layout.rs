use egui::{Align, Align2, CentralPanel, Context, Frame, Layout, ProgressBar, RichText, ScrollArea, Ui};

use crate::QuizApp;
use crate::model::AppState;

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(RichText::new("🎓 GrammarMaster").strong().size(18.0));

            if app.state == AppState::Quiz {
                ui.add_space(16.0);
                ui.add(
                    ProgressBar::new(app.session.progress_ratio())
                        .desired_width(240.0)
                        .show_percentage(),
                );
                ui.label(
                    RichText::new(format!(
                        "{} / {}",
                        app.session.current_index() + 1,
                        app.session.question_count()
                    ))
                    .strong(),
                );
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("🔄 Reiniciar").clicked() {
                    app.pedir_reinicio();
                }
            });
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("⭐ ¡Practica cada día y mejorarás poco a poco!").weak());
        });
    });
}

/// Panel con scroll y anchura máxima, para pantallas más largas que la ventana
pub fn scroll_panel(ctx: &Context, max_width: f32, margin: egui::Margin, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let w = ui.available_width().min(max_width);
                    Frame::default()
                        .fill(ui.visuals().window_fill())
                        .inner_margin(margin)
                        .show(ui, |ui| {
                            ui.set_width(w);
                            ui.with_layout(Layout::top_down(Align::Min), inner);
                        });
                });
            });
    });
}

pub fn confirm_reset_window(app: &mut QuizApp, ctx: &Context) {
    egui::Window::new("Confirmar reinicio")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("¿Seguro que quieres empezar de nuevo? Se perderán las respuestas de esta sesión.");
            ui.horizontal(|ui| {
                if ui.button("Sí, reiniciar").clicked() {
                    app.reiniciar_quiz();
                }
                if ui.button("No").clicked() {
                    app.cancelar_reinicio();
                }
            });
        });
}
