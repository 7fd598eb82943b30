use egui::{Context, RichText};

use crate::QuizApp;
use crate::ui::helpers::{EMERALD, INDIGO, ROSE, big_button, difficulty_color, option_button, tag};
use crate::ui::layout::scroll_panel;
use crate::ui::views::explanation::ui_explanation_card;
use crate::view_models::{BlankState, PrimaryAction};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let Some(view) = app.question_view() else {
        return;
    };
    let card = app.explanation_card();
    let message = app.message.clone();

    let mut clicked_option: Option<String> = None;
    let mut primary_clicked = false;

    scroll_panel(ctx, 680.0, egui::Margin::symmetric(24, 20), |ui| {
        let panel_width = ui.available_width();

        ui.horizontal(|ui| {
            let category_color = ui.visuals().weak_text_color();
            tag(ui, view.difficulty.label(), difficulty_color(view.difficulty));
            tag(ui, view.category.label(), category_color);
        });
        ui.add_space(18.0);

        // Frase con el hueco
        let blank = match &view.blank {
            BlankState::Empty => RichText::new(view.blank_text()).weak(),
            BlankState::Pending(_) => RichText::new(view.blank_text()).color(INDIGO),
            BlankState::Correct(_) => RichText::new(view.blank_text()).color(EMERALD),
            BlankState::Wrong(_) => RichText::new(view.blank_text()).color(ROSE),
        };
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(&view.before_blank).size(24.0));
            ui.label(blank.size(24.0).strong().underline());
            ui.label(RichText::new(&view.after_blank).size(24.0));
        });
        ui.add_space(20.0);

        for row in &view.options {
            if option_button(ui, row, panel_width) {
                clicked_option = Some(row.id.clone());
            }
            ui.add_space(6.0);
        }

        ui.add_space(12.0);
        ui.separator();
        ui.horizontal(|ui| {
            ui.label(RichText::new("ℹ Elige la respuesta correcta y pulsa enviar").weak());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let enabled = match view.action {
                    PrimaryAction::Submit { enabled } => enabled,
                    PrimaryAction::Next | PrimaryAction::SeeResults => true,
                };
                primary_clicked = big_button(ui, view.action.label(), 200.0, 40.0, enabled);
            });
        });

        if !message.is_empty() {
            ui.add_space(8.0);
            ui.label(&message);
        }

        if let Some(card) = &card {
            ui.add_space(16.0);
            ui_explanation_card(ui, card);
        }
    });

    if let Some(option_id) = clicked_option {
        app.select_option(&option_id);
    }
    if primary_clicked {
        match view.action {
            PrimaryAction::Submit { .. } => app.enviar_respuesta(),
            PrimaryAction::Next | PrimaryAction::SeeResults => app.siguiente_pregunta(),
        }
    }
}
