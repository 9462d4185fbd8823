use crate::QuizApp;
use crate::app::COUNT_OPTIONS;
use crate::model::QuizMode;
use crate::ui::helpers::choice_button;
use crate::ui::layout::scroll_panel;
use egui::{Button, Color32, Context, RichText};

pub fn ui_config(app: &mut QuizApp, ctx: &Context) {
    let mut chosen_count = None;
    let mut chosen_mode = None;
    let mut start = false;

    let config = app.session.config;
    let error = app.session.error_message().map(str::to_owned);

    scroll_panel(ctx, 560.0, |ui| {
        let width = ui.available_width();

        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(RichText::new("Simulador INSS").size(32.0).strong());
            ui.label(RichText::new("Padrão Oficial CEBRASPE (Certo/Errado)").weak());
            ui.add_space(24.0);
        });

        if let Some(msg) = &error {
            egui::Frame::default()
                .fill(Color32::from_rgb(254, 242, 242))
                .inner_margin(egui::Margin::symmetric(12, 10))
                .show(ui, |ui| {
                    ui.set_width(width - 24.0);
                    ui.label(RichText::new(format!("⚠ {msg}")).color(Color32::from_rgb(185, 28, 28)));
                });
            ui.add_space(16.0);
        }

        ui.label(RichText::new("NÚMERO DE QUESTÕES").strong());
        ui.add_space(8.0);
        let btn_w = (width - 8.0) / 2.0;
        egui::Grid::new("count_grid")
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for (i, n) in COUNT_OPTIONS.iter().enumerate() {
                    let label = format!("{n} Questões");
                    if choice_button(ui, &label, btn_w, 40.0, config.count == *n) {
                        chosen_count = Some(*n);
                    }
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });

        ui.add_space(20.0);
        ui.label(RichText::new("MODO DE ESTUDO").strong());
        ui.add_space(8.0);

        let modes = [
            (
                QuizMode::Treino,
                "Modo TREINO",
                "Gabarito e comentários detalhados aparecem após a finalização do simulado.",
            ),
            (
                QuizMode::Prova,
                "Modo PROVA",
                "Apenas a nota final e acertos/erros. Sem comentários explicativos.",
            ),
        ];
        for (mode, title, description) in modes {
            let label = format!("{title}\n{description}");
            if choice_button(ui, &label, width, 56.0, config.mode == mode) {
                chosen_mode = Some(mode);
            }
            ui.add_space(6.0);
        }

        ui.add_space(20.0);
        if ui
            .add_sized([width, 48.0], Button::new(RichText::new("Iniciar Simulado").strong()))
            .clicked()
        {
            start = true;
        }
    });

    if let Some(n) = chosen_count {
        app.session.set_count(n);
    }
    if let Some(mode) = chosen_mode {
        app.session.set_mode(mode);
    }
    if start {
        app.start_quiz();
    }
}
