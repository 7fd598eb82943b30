mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, confirm_reset_window, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Los paneles laterales van antes que el central
        top_panel(self, ctx);
        bottom_panel(ctx);

        match self.state {
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Summary => views::summary::ui_summary(self, ctx),
        }

        if self.confirm_reset {
            confirm_reset_window(self, ctx);
        }
    }
}
