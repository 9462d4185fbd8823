mod helpers;
pub mod layout;
pub mod views;

use crate::app::{QuizApp, Screen};
use eframe::{App, Frame};
use egui::Context;
use layout::bottom_panel;
use std::time::Duration;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // resultado da geração em segundo plano
        if self.poll_generation() {
            ctx.request_repaint();
        }
        if self.is_generation_pending() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // PAINEL INFERIOR TEMA ESCURO OU CLARO
        bottom_panel(ctx);

        // Dispatch por tela
        let view: fn(&mut QuizApp, &Context) = match self.session.screen() {
            Screen::Configuring { .. } => views::config::ui_config,
            Screen::Loading { .. } => views::loading::ui_loading,
            Screen::InProgress { .. } => views::quiz::ui_quiz,
            Screen::Results { .. } => views::results::ui_results,
        };
        view(self, ctx);
    }
}
