use crate::QuizApp;
use crate::model::Answer;
use crate::ui::helpers::{choice_button, progress_dots, tag};
use crate::ui::layout::{scroll_panel, two_button_row};
use egui::{Button, Color32, Context, ProgressBar, RichText};

enum QuizAction {
    Select(Answer),
    Clear,
    Previous,
    Next,
}

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let session = &app.session;
    let (Some(quiz), Some(question), Some(idx)) = (
        session.quiz(),
        session.current_question(),
        session.current_index(),
    ) else {
        return;
    };

    let cargo = quiz.cargo.clone();
    let total = quiz.len();
    let question = question.clone();
    let selected = session.current_answer();
    let progress = session.progress_percent().unwrap_or(0.0);
    let answered = session.answered_flags();
    let is_last = session.is_last_question();

    let mut action = None;

    scroll_panel(ctx, 720.0, |ui| {
        let width = ui.available_width();

        // Cabeçalho com progresso
        ui.horizontal(|ui| {
            ui.label(RichText::new("INSS").strong().background_color(Color32::from_gray(30)).color(Color32::WHITE));
            ui.label(RichText::new(&cargo).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(format!("{}%", progress.round())).strong());
            });
        });
        ui.add(ProgressBar::new(progress / 100.0).desired_width(width));
        ui.add_space(16.0);

        // Cartão da questão
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                ui.set_width(width - 34.0);
                ui.horizontal_wrapped(|ui| {
                    tag(ui, &question.area, Color32::from_rgb(29, 78, 216));
                    tag(ui, &question.disciplina, Color32::GRAY);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(format!("Questão {} de {}", idx + 1, total)).weak());
                    });
                });
                ui.add_space(8.0);
                ui.label(RichText::new(format!("Assunto: {}", question.assunto)).small().weak());
                ui.add_space(4.0);
                ui.label(RichText::new(&question.enunciado).size(18.0));
                ui.add_space(16.0);

                let btn_w = (ui.available_width() - 8.0) / 2.0;
                ui.horizontal(|ui| {
                    if choice_button(ui, "CERTO (C)", btn_w, 44.0, selected == Some(Answer::Certo)) {
                        action = Some(QuizAction::Select(Answer::Certo));
                    }
                    if choice_button(ui, "ERRADO (E)", btn_w, 44.0, selected == Some(Answer::Errado)) {
                        action = Some(QuizAction::Select(Answer::Errado));
                    }
                });

                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui
                        .add_enabled(selected.is_some(), Button::new("Deixar em branco").frame(false))
                        .clicked()
                    {
                        action = Some(QuizAction::Clear);
                    }
                });
            });

        ui.add_space(16.0);
        progress_dots(ui, &answered, idx);
        ui.add_space(12.0);

        let next_label = if is_last { "Finalizar" } else { "Próxima" };
        let (prev, next) = two_button_row(ui, width, ("Anterior", idx > 0), (next_label, true));
        if prev {
            action = Some(QuizAction::Previous);
        }
        if next {
            action = Some(QuizAction::Next);
        }
    });

    match action {
        Some(QuizAction::Select(a)) => app.session.select_answer(a),
        Some(QuizAction::Clear) => app.session.clear_answer(),
        Some(QuizAction::Previous) => app.session.go_back(),
        Some(QuizAction::Next) => app.session.advance(),
        None => {}
    }
}
