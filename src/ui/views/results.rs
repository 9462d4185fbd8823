use crate::QuizApp;
use crate::ui::helpers::tag;
use crate::view_models::{Outcome, ReviewRow};
use egui::{Button, Color32, Context, RichText, Ui};

fn outcome_color(outcome: Outcome) -> Color32 {
    match outcome {
        Outcome::Acertou => Color32::from_rgb(21, 128, 61),
        Outcome::Errou => Color32::from_rgb(185, 28, 28),
        Outcome::EmBranco => Color32::GRAY,
    }
}

fn stat_cell(ui: &mut Ui, width: f32, label: &str, value: usize, color: Color32) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(width);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(label).small().weak());
            ui.label(RichText::new(value.to_string()).size(24.0).strong().color(color));
        });
    });
}

fn review_card(ui: &mut Ui, width: f32, row: &ReviewRow) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(12, 12))
        .show(ui, |ui| {
            ui.set_width(width);
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(format!("#{}", row.number)).strong());
                tag(ui, &row.disciplina, Color32::GRAY);
                tag(ui, row.outcome.label(), outcome_color(row.outcome));
            });
            ui.add_space(6.0);
            ui.label(&row.enunciado);
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("GABARITO:").small().weak());
                ui.label(RichText::new(row.gabarito.symbol()).strong());
                ui.add_space(16.0);
                ui.label(RichText::new("SUA RESPOSTA:").small().weak());
                ui.label(
                    RichText::new(row.user_answer_label())
                        .strong()
                        .color(outcome_color(row.outcome)),
                );
            });
            ui.add_space(6.0);
            ui.label(RichText::new("Comentário:").strong());
            ui.label(RichText::new(&row.comentario).italics());
        });
}

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let Some(summary) = app.session.results() else {
        return;
    };
    let review = app.session.review();
    let mut restart = false;

    crate::ui::layout::scroll_panel(ctx, 720.0, |ui| {
        let width = ui.available_width();

        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Resultado Final").size(28.0).strong());
            ui.label(RichText::new("Confira seu desempenho neste simulado.").weak());
        });
        ui.add_space(16.0);

        let cell_w = (width - 3.0 * 8.0) / 4.0 - 14.0;
        ui.horizontal(|ui| {
            stat_cell(ui, cell_w, "Total", summary.total_questions, ui.visuals().text_color());
            stat_cell(ui, cell_w, "Certas", summary.correct, outcome_color(Outcome::Acertou));
            stat_cell(ui, cell_w, "Erradas", summary.incorrect, outcome_color(Outcome::Errou));
            stat_cell(ui, cell_w, "Em Branco", summary.blank, outcome_color(Outcome::EmBranco));
        });
        ui.add_space(16.0);

        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Nota Líquida").weak());
            ui.label(RichText::new(summary.final_score_label()).size(40.0).strong());
            ui.label(
                RichText::new("Baseado no critério CEBRASPE: Uma resposta errada anula uma correta.")
                    .small()
                    .weak(),
            );
        });

        if let Some(rows) = &review {
            ui.add_space(24.0);
            ui.heading(RichText::new("Correção Comentada").strong());
            ui.add_space(8.0);
            for row in rows {
                review_card(ui, width - 28.0, row);
                ui.add_space(8.0);
            }
        }

        ui.add_space(20.0);
        if ui
            .add_sized([width, 44.0], Button::new(RichText::new("Fazer Novo Simulado").strong()))
            .clicked()
        {
            restart = true;
        }
    });

    if restart {
        app.session.restart();
    }
}
