use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText, Spinner};

pub fn ui_loading(_app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 260.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add(Spinner::new().size(64.0));
            ui.add_space(24.0);
            ui.heading(RichText::new("Elaborando seu Simulado...").strong());
            ui.add_space(8.0);
            ui.label(
                RichText::new(
                    "Estamos utilizando Inteligência Artificial para gerar questões inéditas no padrão CEBRASPE para o concurso do INSS. Aguarde um instante.",
                )
                .weak(),
            );
        });
    });
}
